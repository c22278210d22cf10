use serde::{Deserialize, Serialize};

use error_stack::Context;
use std::fmt::Display;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum PaletteError {
  /// The named color is not present in the store.
  ResourceNotFound(String),

  CatalogParse(String),
  InvalidColorValue {
    name: String,
    value: String,
  },
  CatalogIo(String),

  UnknownToken(String),

  Serialization(String),
}

impl Context for PaletteError {}

impl Display for PaletteError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use PaletteError::*;
    match self {
      ResourceNotFound(name) => write!(f, "no color named {name:?} in the color store"),

      CatalogParse(msg) => write!(f, "unable to parse color catalog: {msg}"),

      InvalidColorValue { name, value } => write!(
        f,
        "invalid color value {value:?} for {name:?}. Expected rrggbb or aarrggbb hex digits"
      ),

      CatalogIo(msg) => write!(f, "unable to read color catalog: {msg}"),

      UnknownToken(token) => write!(f, "unknown hue or shade {token:?}"),

      Serialization(what) => write!(f, "unable to serialize {what}"),
    }
  }
}
