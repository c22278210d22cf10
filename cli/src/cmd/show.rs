use error_stack::{IntoReport, Result, ResultExt};
use serde::Serialize;

use swatchbook_core::{ColorCatalog, PaletteError, PaletteValue};

#[derive(Serialize)]
struct ColorReport<'a> {
  name: &'a str,
  hex: String,
  alpha: f32,
  luma: f32,
  text_is_dark: bool,
  text_hex: String,
}

pub fn run_show(catalog: &ColorCatalog, name: &str, json: bool) -> Result<(), PaletteError> {
  let value = PaletteValue::from_resource_name(catalog, name)?;
  let text = value
    .preferred_text_palette(catalog)
    .attach_printable_lazy(|| format!("while picking a text color for {name}"))?;

  let report = ColorReport {
    name,
    hex: value.to_hex_string(),
    alpha: value.alpha(),
    luma: value.luma(),
    text_is_dark: value.preferred_text_is_dark(),
    text_hex: text.to_hex_string(),
  };

  if json {
    println!("{}", report_json(&report)?);
  } else {
    println!(
      "{} {} alpha={:.3} luma={:.3} text={} ({})",
      report.name,
      report.hex,
      report.alpha,
      report.luma,
      report.text_hex,
      if report.text_is_dark { "dark" } else { "light" }
    );
  }
  Ok(())
}

fn report_json(report: &ColorReport) -> Result<String, PaletteError> {
  serde_json::to_string_pretty(report)
    .into_report()
    .change_context_lazy(|| PaletteError::Serialization(format!("color report for {}", report.name)))
}

#[cfg(test)]
mod tests {
  use swatchbook_core::{ColorCatalog, PaletteError};

  use super::{report_json, run_show, ColorReport};

  #[test]
  fn test_report_json_fields() {
    let report = ColorReport {
      name: "Primary",
      hex: "#3f51b5".to_string(),
      alpha: 1.0,
      luma: 0.25,
      text_is_dark: false,
      text_hex: "#ffffff".to_string(),
    };
    let json: serde_json::Value = serde_json::from_str(&report_json(&report).unwrap()).unwrap();
    assert_eq!(json["name"], "Primary");
    assert_eq!(json["hex"], "#3f51b5");
    assert_eq!(json["text_is_dark"], false);
  }

  #[test]
  fn test_show_missing_name_is_an_error() {
    let err = run_show(&ColorCatalog::material(), "does-not-exist", true).unwrap_err();
    assert_eq!(
      err.current_context(),
      &PaletteError::ResourceNotFound("does-not-exist".to_string())
    );
  }
}
