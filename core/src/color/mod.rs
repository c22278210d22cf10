pub mod utils;
pub mod value;

pub use value::PaletteValue;
