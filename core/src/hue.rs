use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::PaletteError;
use crate::shade::{resolve_shade_token, Shade};

/// A named color family of the Material Design palette.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
  Red,
  Pink,
  Purple,
  DeepPurple,
  Indigo,
  Blue,
  LightBlue,
  Cyan,
  Teal,
  Green,
  LightGreen,
  Lime,
  Yellow,
  Amber,
  Orange,
  DeepOrange,
  Brown,
  Grey,
  BlueGrey,
}

impl Hue {
  pub const ALL: [Hue; 19] = [
    Hue::Red,
    Hue::Pink,
    Hue::Purple,
    Hue::DeepPurple,
    Hue::Indigo,
    Hue::Blue,
    Hue::LightBlue,
    Hue::Cyan,
    Hue::Teal,
    Hue::Green,
    Hue::LightGreen,
    Hue::Lime,
    Hue::Yellow,
    Hue::Amber,
    Hue::Orange,
    Hue::DeepOrange,
    Hue::Brown,
    Hue::Grey,
    Hue::BlueGrey,
  ];

  /// The resource-name prefix for this family, e.g. `"DEEP-PURPLE"`.
  pub fn prefix(&self) -> &'static str {
    use Hue::*;
    match self {
      Red => "RED",
      Pink => "PINK",
      Purple => "PURPLE",
      DeepPurple => "DEEP-PURPLE",
      Indigo => "INDIGO",
      Blue => "BLUE",
      LightBlue => "LIGHT-BLUE",
      Cyan => "CYAN",
      Teal => "TEAL",
      Green => "GREEN",
      LightGreen => "LIGHT-GREEN",
      Lime => "LIME",
      Yellow => "YELLOW",
      Amber => "AMBER",
      Orange => "ORANGE",
      DeepOrange => "DEEP-ORANGE",
      Brown => "BROWN",
      Grey => "GREY",
      BlueGrey => "BLUE-GREY",
    }
  }

  /// Brown, grey and blue-grey have no A100..A700 range.
  pub fn has_accents(&self) -> bool {
    !matches!(self, Hue::Brown | Hue::Grey | Hue::BlueGrey)
  }

  /// The shades this family actually defines.
  pub fn shades(&self) -> impl Iterator<Item = Shade> {
    let has_accents = self.has_accents();
    Shade::ALL
      .into_iter()
      .filter(move |shade| has_accents || !shade.is_accent())
  }
}

/// Builds the store key for `hue` at `shade`, e.g. `"RED_A700"`.
///
/// Accent shades on a family without accents resolve to the 500 shade.
pub fn resolve_hue_name(hue: Hue, shade: Shade) -> String {
  format!(
    "{}_{}",
    hue.prefix(),
    resolve_shade_token(shade, hue.has_accents())
  )
}

impl Display for Hue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.prefix())
  }
}

impl FromStr for Hue {
  type Err = PaletteError;

  /// Accepts the prefix (`"BLUE-GREY"`), camel case (`"blueGrey"`) or snake
  /// case (`"blue_grey"`).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = normalize(s);
    Hue::ALL
      .into_iter()
      .find(|hue| normalize(hue.prefix()) == wanted)
      .ok_or_else(|| PaletteError::UnknownToken(s.to_string()))
  }
}

fn normalize(s: &str) -> String {
  s.trim()
    .chars()
    .filter(|c| c.is_ascii_alphanumeric())
    .map(|c| c.to_ascii_lowercase())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::{resolve_hue_name, Hue};
  use crate::shade::Shade;

  #[test]
  fn test_hue_names() {
    assert_eq!(resolve_hue_name(Hue::Grey, Shade::S900), "GREY_900");
    assert_eq!(resolve_hue_name(Hue::Red, Shade::A700), "RED_A700");
    assert_eq!(resolve_hue_name(Hue::DeepPurple, Shade::S50), "DEEP-PURPLE_50");
    assert_eq!(resolve_hue_name(Hue::LightBlue, Shade::A200), "LIGHT-BLUE_A200");
  }

  #[test]
  fn test_grey_family_accents_collapse_to_500() {
    assert_eq!(resolve_hue_name(Hue::BlueGrey, Shade::A100), "BLUE-GREY_500");
    assert_eq!(resolve_hue_name(Hue::Brown, Shade::A400), "BROWN_500");
    assert_eq!(resolve_hue_name(Hue::Grey, Shade::A700), "GREY_500");
  }

  #[test]
  fn test_accent_support() {
    let without: Vec<Hue> = Hue::ALL.into_iter().filter(|h| !h.has_accents()).collect();
    assert_eq!(without, vec![Hue::Brown, Hue::Grey, Hue::BlueGrey]);
    assert_eq!(Hue::Grey.shades().count(), 10);
    assert_eq!(Hue::Teal.shades().count(), 14);
  }

  #[test]
  fn test_parse_hue() {
    assert_eq!("deepPurple".parse::<Hue>().unwrap(), Hue::DeepPurple);
    assert_eq!("blue_grey".parse::<Hue>().unwrap(), Hue::BlueGrey);
    assert_eq!("LIGHT-GREEN".parse::<Hue>().unwrap(), Hue::LightGreen);
    assert!("mauve".parse::<Hue>().is_err());
  }
}
