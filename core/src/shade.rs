use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::PaletteError;

/// An intensity token within a hue family.
///
/// The numeric shades run from 50 (lightest) to 900 (darkest). The four
/// accent shades only exist for hues that carry an accent range.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
  S50 = 0,
  S100,
  S200,
  S300,
  S400,
  S500,
  S600,
  S700,
  S800,
  S900,
  A100,
  A200,
  A400,
  A700,
}

struct ShadeToken {
  label: &'static str,
  without_accents: &'static str,
}

// Indexed by `Shade as usize`. Accent rows collapse to "500" for hues
// without an accent range.
const SHADE_TOKENS: [ShadeToken; 14] = [
  ShadeToken { label: "50", without_accents: "50" },
  ShadeToken { label: "100", without_accents: "100" },
  ShadeToken { label: "200", without_accents: "200" },
  ShadeToken { label: "300", without_accents: "300" },
  ShadeToken { label: "400", without_accents: "400" },
  ShadeToken { label: "500", without_accents: "500" },
  ShadeToken { label: "600", without_accents: "600" },
  ShadeToken { label: "700", without_accents: "700" },
  ShadeToken { label: "800", without_accents: "800" },
  ShadeToken { label: "900", without_accents: "900" },
  ShadeToken { label: "A100", without_accents: "500" },
  ShadeToken { label: "A200", without_accents: "500" },
  ShadeToken { label: "A400", without_accents: "500" },
  ShadeToken { label: "A700", without_accents: "500" },
];

impl Shade {
  pub const ALL: [Shade; 14] = [
    Shade::S50,
    Shade::S100,
    Shade::S200,
    Shade::S300,
    Shade::S400,
    Shade::S500,
    Shade::S600,
    Shade::S700,
    Shade::S800,
    Shade::S900,
    Shade::A100,
    Shade::A200,
    Shade::A400,
    Shade::A700,
  ];

  pub fn is_accent(&self) -> bool {
    matches!(self, Shade::A100 | Shade::A200 | Shade::A400 | Shade::A700)
  }

  /// The token as written in resource names, e.g. `"500"` or `"A200"`.
  pub fn label(&self) -> &'static str {
    SHADE_TOKENS[*self as usize].label
  }
}

/// Returns the resource-name token for `shade`.
///
/// When `allow_accent` is false, accent shades resolve to `"500"` rather than
/// failing. Numeric shades always resolve to their own label.
pub fn resolve_shade_token(shade: Shade, allow_accent: bool) -> &'static str {
  let token = &SHADE_TOKENS[shade as usize];
  if allow_accent {
    token.label
  } else {
    token.without_accents
  }
}

impl Display for Shade {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Shade {
  type Err = PaletteError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim().trim_start_matches('_');
    Shade::ALL
      .into_iter()
      .find(|shade| shade.label().eq_ignore_ascii_case(s))
      .ok_or_else(|| PaletteError::UnknownToken(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::{resolve_shade_token, Shade};

  const VALID_TOKENS: [&str; 14] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "A100", "A200", "A400",
    "A700",
  ];

  #[test]
  fn test_every_token_is_a_known_label() {
    for shade in Shade::ALL {
      for allow_accent in [true, false] {
        let token = resolve_shade_token(shade, allow_accent);
        assert!(VALID_TOKENS.contains(&token), "{shade:?} -> {token}");
      }
    }
  }

  #[test]
  fn test_accent_shades_keep_their_label_when_allowed() {
    assert_eq!(resolve_shade_token(Shade::A100, true), "A100");
    assert_eq!(resolve_shade_token(Shade::A200, true), "A200");
    assert_eq!(resolve_shade_token(Shade::A400, true), "A400");
    assert_eq!(resolve_shade_token(Shade::A700, true), "A700");
  }

  #[test]
  fn test_accent_shades_fall_back_to_500_when_disallowed() {
    for shade in Shade::ALL.into_iter().filter(Shade::is_accent) {
      assert_eq!(resolve_shade_token(shade, false), "500");
    }
  }

  #[test]
  fn test_numeric_shades_ignore_accent_flag() {
    let numeric: Vec<Shade> = Shade::ALL.into_iter().filter(|s| !s.is_accent()).collect();
    assert_eq!(numeric.len(), 10);
    for (shade, expected) in numeric.into_iter().zip(VALID_TOKENS) {
      assert_eq!(resolve_shade_token(shade, true), expected);
      assert_eq!(resolve_shade_token(shade, false), expected);
    }
  }

  #[test]
  fn test_parse_shade() {
    assert_eq!("500".parse::<Shade>().unwrap(), Shade::S500);
    assert_eq!("a200".parse::<Shade>().unwrap(), Shade::A200);
    assert_eq!("_50".parse::<Shade>().unwrap(), Shade::S50);
    assert!("550".parse::<Shade>().is_err());
  }
}
