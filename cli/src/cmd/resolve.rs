use swatchbook_core::{resolve_hue_name, Hue, Shade};

pub fn run_resolve(hue: Hue, shade: Shade) {
  println!("{}", resolve_hue_name(hue, shade));
}
