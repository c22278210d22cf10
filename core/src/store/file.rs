//! Utilities for reading and writing color catalogs in INI form.
//!
//! A catalog file has a single `[colors]` section, one color per line:
//!
//! ```ini
//! [colors]
//! Primary = 3f51b5
//! Divider = 1f000000
//! ```
//!
//! Six hex digits are `rrggbb` (opaque), eight are `aarrggbb`.
use std::fs;
use std::path::Path;

use error_stack::{IntoReport, Report, Result, ResultExt};
use ini::Ini;

use super::ColorCatalog;
use crate::color::utils::{hex_digits, pack_argb, unpack_argb};
use crate::error::PaletteError;

pub const COLORS_SECTION: &str = "colors";

impl ColorCatalog {
  pub fn from_ini_str<S: AsRef<str>>(source: S) -> Result<ColorCatalog, PaletteError> {
    let ini = Ini::load_from_str(source.as_ref())
      .map_err(|e| Report::new(PaletteError::CatalogParse(e.to_string())))?;

    let mut catalog = ColorCatalog::new();
    let section = match ini.section(Some(COLORS_SECTION)) {
      Some(section) => section,
      None => {
        log::warn!("color catalog has no [{COLORS_SECTION}] section");
        return Ok(catalog);
      }
    };

    for (name, value) in section.iter() {
      let argb = parse_color_value(name, value)?;
      catalog.insert(name, unpack_argb(argb));
    }

    Ok(catalog)
  }

  pub fn load<P: AsRef<Path>>(path: P) -> Result<ColorCatalog, PaletteError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
      .into_report()
      .change_context_lazy(|| PaletteError::CatalogIo(path.display().to_string()))?;

    let catalog = ColorCatalog::from_ini_str(contents)
      .attach_printable_lazy(|| format!("while loading {}", path.display()))?;
    log::debug!("loaded {} colors from {}", catalog.len(), path.display());
    Ok(catalog)
  }

  pub fn to_ini(&self) -> Ini {
    let mut conf = Ini::new();
    for name in self.names() {
      if let Some(color) = self.colors.get(name) {
        conf
          .with_section(Some(COLORS_SECTION))
          .set(name, format!("{:08x}", pack_argb(color)));
      }
    }
    conf
  }
}

fn parse_color_value(name: &str, value: &str) -> Result<u32, PaletteError> {
  let invalid = || PaletteError::InvalidColorValue {
    name: name.to_string(),
    value: value.to_string(),
  };

  let digits = hex_digits(value).ok_or_else(|| Report::new(invalid()))?;
  let parsed = u32::from_str_radix(digits, 16)
    .into_report()
    .change_context_lazy(invalid)?;

  match digits.len() {
    6 => Ok(0xff000000 | parsed),
    8 => Ok(parsed),
    _ => Err(Report::new(invalid())),
  }
}
