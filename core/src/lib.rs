//! Named design-system colors over a pluggable color store.
//!
//! ```
//! use swatchbook_core::{Palette, Shade};
//!
//! let palette = Palette::material();
//! let red = palette.red(Shade::A700).unwrap();
//! assert_eq!(red.to_hex_string(), "#d50000");
//! assert!(!red.preferred_text_is_dark());
//! ```

pub mod color;
pub mod error;
pub mod hue;
pub mod shade;
pub mod store;
pub mod swatches;

pub use color::PaletteValue;
pub use error::PaletteError;
pub use hue::{resolve_hue_name, Hue};
pub use shade::{resolve_shade_token, Shade};
pub use store::{ColorCatalog, ColorStore};
pub use swatches::{Elevation, Palette, TextStyle};
