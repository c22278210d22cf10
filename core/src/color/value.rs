use std::fmt::Display;

use error_stack::{Report, Result};
use palette::Srgba;

use super::utils::{color_hex, luma, prefers_dark_text, unpack_argb};
use crate::error::PaletteError;
use crate::store::ColorStore;

pub const TEXT_ON_LIGHT: &str = "Text-Primary-Dark-Content";
pub const TEXT_ON_DARK: &str = "Text-Primary-Light-Content";

/// An immutable color, as resolved from a store or built from components.
#[derive(Debug, Clone, Copy)]
pub struct PaletteValue {
  color: Srgba,
}

impl PaletteValue {
  /// Looks up `name` in `store`.
  ///
  /// Returns [`PaletteError::ResourceNotFound`] if the store has no such color.
  pub fn from_resource_name<S: ColorStore + ?Sized>(
    store: &S,
    name: &str,
  ) -> Result<PaletteValue, PaletteError> {
    log::trace!("resolving color {name:?}");
    match store.lookup(name) {
      Some(color) => Ok(PaletteValue { color }),
      None => {
        log::debug!("color {name:?} not found in store");
        Err(Report::new(PaletteError::ResourceNotFound(name.to_string())))
      }
    }
  }

  /// Decodes an `0xAARRGGBB` value.
  pub fn from_packed_color(argb: u32) -> Self {
    PaletteValue {
      color: unpack_argb(argb),
    }
  }

  pub fn from_components(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
    PaletteValue {
      color: Srgba::new(red, green, blue, alpha),
    }
  }

  pub fn from_color(color: Srgba) -> Self {
    PaletteValue { color }
  }

  pub fn red(&self) -> f32 {
    self.color.red
  }

  pub fn green(&self) -> f32 {
    self.color.green
  }

  pub fn blue(&self) -> f32 {
    self.color.blue
  }

  pub fn alpha(&self) -> f32 {
    self.color.alpha
  }

  pub fn luma(&self) -> f32 {
    luma(&self.color)
  }

  /// True when dark text reads better than light text on this color.
  pub fn preferred_text_is_dark(&self) -> bool {
    prefers_dark_text(&self.color)
  }

  /// The primary text color to draw on top of this color.
  pub fn preferred_text_palette<S: ColorStore + ?Sized>(
    &self,
    store: &S,
  ) -> Result<PaletteValue, PaletteError> {
    let name = if self.preferred_text_is_dark() {
      TEXT_ON_LIGHT
    } else {
      TEXT_ON_DARK
    };
    PaletteValue::from_resource_name(store, name)
  }

  /// `#rrggbb`, lowercase, without alpha.
  pub fn to_hex_string(&self) -> String {
    color_hex(&self.color)
  }

  pub fn render(&self) -> Srgba {
    self.color
  }
}

impl From<Srgba> for PaletteValue {
  fn from(color: Srgba) -> Self {
    PaletteValue::from_color(color)
  }
}

impl From<PaletteValue> for Srgba {
  fn from(value: PaletteValue) -> Self {
    value.render()
  }
}

impl PartialEq for PaletteValue {
  fn eq(&self, other: &Self) -> bool {
    self.red() == other.red()
      && self.green() == other.green()
      && self.blue() == other.blue()
      && self.alpha() == other.alpha()
  }
}

impl Display for PaletteValue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.to_hex_string())
  }
}
