use error_stack::Result;

use swatchbook_core::{resolve_hue_name, ColorCatalog, Hue, Palette, PaletteError};

pub fn run_swatch(catalog: &ColorCatalog, hue: Hue) -> Result<(), PaletteError> {
  let palette = Palette::new(catalog);
  for shade in hue.shades() {
    let value = palette.hue(hue, shade)?;
    let marker = if value.preferred_text_is_dark() { "dark text" } else { "light text" };
    println!("{:<16} {} {marker}", resolve_hue_name(hue, shade), value);
  }
  Ok(())
}
