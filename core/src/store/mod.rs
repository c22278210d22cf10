//! The named-color store that palette values are resolved against.
//!
//! [`ColorStore`] is the only seam between the palette and wherever colors
//! actually come from. [`ColorCatalog`] is the in-memory implementation,
//! seeded from the built-in Material table or an INI catalog file.

pub mod file;
pub mod material;

use std::collections::HashMap;

use palette::Srgba;

/// A read-only mapping from color names to colors.
pub trait ColorStore {
  fn lookup(&self, name: &str) -> Option<Srgba>;
}

impl<T: ColorStore + ?Sized> ColorStore for &T {
  fn lookup(&self, name: &str) -> Option<Srgba> {
    (**self).lookup(name)
  }
}

#[derive(Debug, Clone, Default)]
pub struct ColorCatalog {
  colors: HashMap<String, Srgba>,
}

impl ColorCatalog {
  pub fn new() -> Self {
    ColorCatalog {
      colors: HashMap::new(),
    }
  }

  /// The built-in Material Design catalog, including the semantic keys
  /// (`"Canvas"`, `"Paper-Z4"`, `"Text-Primary"`, ...).
  pub fn material() -> Self {
    material::MATERIAL_CATALOG.clone()
  }

  pub fn insert<S: Into<String>>(&mut self, name: S, color: Srgba) -> &mut ColorCatalog {
    let name = name.into();
    if self.colors.insert(name.clone(), color).is_some() {
      log::warn!("color {name:?} defined more than once, keeping the last definition");
    }
    self
  }

  /// Copies every entry of `other` into this catalog. Entries in `other` win.
  pub fn extend_from(&mut self, other: &ColorCatalog) -> &mut ColorCatalog {
    for (name, color) in other.colors.iter() {
      self.colors.insert(name.clone(), *color);
    }
    self
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.colors.contains_key(name)
  }

  /// All color names, sorted.
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.colors.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }
}

impl ColorStore for ColorCatalog {
  fn lookup(&self, name: &str) -> Option<Srgba> {
    self.colors.get(name).copied()
  }
}
