use error_stack::Result;
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::color::PaletteValue;
use crate::error::PaletteError;
use crate::hue::{resolve_hue_name, Hue};
use crate::shade::Shade;
use crate::store::{ColorCatalog, ColorStore};

/// Surface elevation of a sheet of paper, in dp.
///
/// Convert from a dp value with `num_traits::FromPrimitive`; elevations the
/// catalog doesn't carry (e.g. 5) give `None`.
#[derive(Debug, FromPrimitive, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum Elevation {
  Z1 = 1,
  Z2 = 2,
  Z3 = 3,
  Z4 = 4,
  Z6 = 6,
  Z8 = 8,
  Z12 = 12,
  Z16 = 16,
  Z24 = 24,
}

impl Elevation {
  pub fn dp(&self) -> u8 {
    *self as u8
  }

  pub fn resource_name(&self) -> String {
    format!("Paper-Z{}", self.dp())
  }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum TextStyle {
  Primary,
  Secondary,
  Hint,
  Error,
}

impl TextStyle {
  pub fn resource_name(&self) -> &'static str {
    match self {
      TextStyle::Primary => "Text-Primary",
      TextStyle::Secondary => "Text-Secondary",
      TextStyle::Hint => "Text-Hint",
      TextStyle::Error => "Error",
    }
  }
}

macro_rules! named_colors {
  ($($fn_name:ident => $resource:literal),* $(,)?) => {
    $(
      #[doc = concat!("The `", $resource, "` color.")]
      pub fn $fn_name(&self) -> Result<PaletteValue, PaletteError> {
        self.named($resource)
      }
    )*
  };
}

macro_rules! hue_colors {
  ($($fn_name:ident => $hue:expr),* $(,)?) => {
    $(
      pub fn $fn_name(&self, shade: Shade) -> Result<PaletteValue, PaletteError> {
        self.hue($hue, shade)
      }
    )*
  };
}

/// Design-system colors, resolved against a store on every call.
#[derive(Debug, Clone)]
pub struct Palette<S> {
  store: S,
}

impl Palette<ColorCatalog> {
  /// A palette over the built-in Material catalog.
  pub fn material() -> Self {
    Palette::new(ColorCatalog::material())
  }
}

impl<S: ColorStore> Palette<S> {
  pub fn new(store: S) -> Self {
    Palette { store }
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Fully transparent black. Needs no store.
  pub fn clear(&self) -> PaletteValue {
    PaletteValue::from_packed_color(0x00000000)
  }

  pub fn named(&self, name: &str) -> Result<PaletteValue, PaletteError> {
    PaletteValue::from_resource_name(&self.store, name)
  }

  named_colors! {
    canvas => "Canvas",
    divider => "Divider",
    error => "Error",
    grouped => "Grouped",
    success => "Success",
    paper => "Paper",
    primary => "Primary",
    primary_accent => "Primary-Accent",
    primary_dark => "Primary-Dark",
    primary_light => "Primary-Light",
    secondary => "Secondary",
    secondary_accent => "Secondary-Accent",
    secondary_dark => "Secondary-Dark",
    secondary_light => "Secondary-Light",
    text_primary => "Text-Primary",
    text_secondary => "Text-Secondary",
    text_hint => "Text-Hint",
  }

  pub fn paper_z(&self, elevation: Elevation) -> Result<PaletteValue, PaletteError> {
    self.named(&elevation.resource_name())
  }

  pub fn text(&self, style: TextStyle) -> Result<PaletteValue, PaletteError> {
    self.named(style.resource_name())
  }

  pub fn hue(&self, hue: Hue, shade: Shade) -> Result<PaletteValue, PaletteError> {
    self.named(&resolve_hue_name(hue, shade))
  }

  hue_colors! {
    red => Hue::Red,
    pink => Hue::Pink,
    purple => Hue::Purple,
    deep_purple => Hue::DeepPurple,
    indigo => Hue::Indigo,
    blue => Hue::Blue,
    light_blue => Hue::LightBlue,
    cyan => Hue::Cyan,
    teal => Hue::Teal,
    green => Hue::Green,
    light_green => Hue::LightGreen,
    lime => Hue::Lime,
    yellow => Hue::Yellow,
    amber => Hue::Amber,
    orange => Hue::Orange,
    deep_orange => Hue::DeepOrange,
    brown => Hue::Brown,
    grey => Hue::Grey,
    blue_grey => Hue::BlueGrey,
  }
}
