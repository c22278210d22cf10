mod hex;
mod resolve;
mod show;
mod swatch;

use clap::Subcommand;
use error_stack::Result;
use std::path::Path;

use swatchbook_core::{ColorCatalog, Hue, PaletteError, Shade};

use self::{hex::run_hex, resolve::run_resolve, show::run_show, swatch::run_swatch};

#[derive(Subcommand)]
pub enum CliCommand {
  /// Prints the color name for a hue and shade, e.g. `resolve blueGrey A100`
  Resolve {
    #[clap(value_parser = parse_hue)]
    hue: Hue,
    #[clap(value_parser = parse_shade)]
    shade: Shade,
  },

  /// Looks up a named color and prints its hex value and preferred text color
  Show {
    #[clap(value_parser)]
    name: String,

    /// Print the result as JSON
    #[clap(long)]
    json: bool,
  },

  /// Decodes a packed 0xAARRGGBB color
  Hex {
    #[clap(value_parser)]
    argb: String,
  },

  /// Lists every shade of a hue
  Swatch {
    #[clap(value_parser = parse_hue)]
    hue: Hue,
  },
}

impl CliCommand {
  pub fn run(&self, catalog: Option<&Path>) -> Result<(), PaletteError> {
    match self {
      Self::Resolve { hue, shade } => {
        run_resolve(*hue, *shade);
        Ok(())
      }

      Self::Show { name, json } => run_show(&load_catalog(catalog)?, name, *json),

      Self::Hex { argb } => run_hex(&load_catalog(catalog)?, argb),

      Self::Swatch { hue } => run_swatch(&load_catalog(catalog)?, *hue),
    }
  }
}

fn load_catalog(path: Option<&Path>) -> Result<ColorCatalog, PaletteError> {
  let mut catalog = ColorCatalog::material();
  if let Some(path) = path {
    let overrides = ColorCatalog::load(path)?;
    log::debug!("layering {} colors from {}", overrides.len(), path.display());
    catalog.extend_from(&overrides);
  }
  Ok(catalog)
}

fn parse_hue(s: &str) -> std::result::Result<Hue, String> {
  s.parse().map_err(|e: PaletteError| e.to_string())
}

fn parse_shade(s: &str) -> std::result::Result<Shade, String> {
  s.parse().map_err(|e: PaletteError| e.to_string())
}
