use error_stack::{IntoReport, Report, Result, ResultExt};

use swatchbook_core::color::utils::hex_digits;
use swatchbook_core::{ColorCatalog, PaletteError, PaletteValue};

pub fn run_hex(catalog: &ColorCatalog, argb: &str) -> Result<(), PaletteError> {
  let value = PaletteValue::from_packed_color(parse_packed(argb)?);
  let text = value.preferred_text_palette(catalog)?;
  println!(
    "{} alpha={:.3} text={}",
    value,
    value.alpha(),
    text.to_hex_string()
  );
  Ok(())
}

/// Accepts `0xAARRGGBB`, `#AARRGGBB` or bare hex digits.
fn parse_packed(argb: &str) -> Result<u32, PaletteError> {
  let invalid = || PaletteError::InvalidColorValue {
    name: "argb".to_string(),
    value: argb.to_string(),
  };

  let trimmed = argb.trim();
  let digits = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
    Some(rest) if !rest.starts_with('#') => hex_digits(rest),
    Some(_) => None,
    None => hex_digits(trimmed),
  }
  .ok_or_else(|| Report::new(invalid()))?;

  u32::from_str_radix(digits, 16)
    .into_report()
    .change_context_lazy(invalid)
}

#[cfg(test)]
mod tests {
  use swatchbook_core::PaletteError;

  use super::parse_packed;

  #[test]
  fn test_parse_packed_prefixes() {
    assert_eq!(parse_packed("0xff3f51b5").unwrap(), 0xff3f51b5);
    assert_eq!(parse_packed("#80ffffff").unwrap(), 0x80ffffff);
    assert_eq!(parse_packed("ffffff").unwrap(), 0x00ffffff);
  }

  #[test]
  fn test_parse_packed_rejects_signs_and_repeated_prefixes() {
    for bad in ["+fffffff", "0x0xff", "##ff", "0x#ff", "", "0x", "123456789"] {
      let err = parse_packed(bad).unwrap_err();
      assert!(
        matches!(err.current_context(), PaletteError::InvalidColorValue { .. }),
        "{bad:?} should be rejected"
      );
    }
  }
}
