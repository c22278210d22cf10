use palette::Srgba;

/// Luma at or above this value prefers dark text.
pub const DARK_TEXT_THRESHOLD: f32 = 0.55;

/// Perceptual brightness of a color, using the BT.601 channel weights.
pub fn luma(col: &Srgba) -> f32 {
  ((col.red * 299.0) + (col.green * 587.0) + (col.blue * 114.0)) / 1000.0
}

/// Returns true if dark text is more legible than light text on `bg`.
///
/// Alpha is ignored; a transparent background is judged by its color channels.
pub fn prefers_dark_text(bg: &Srgba) -> bool {
  luma(bg) >= DARK_TEXT_THRESHOLD
}

/// Returns the color as a CSS-compatible hex string, with `#` prefix.
///
/// Channels are scaled to 0..=255 and truncated, not rounded. Alpha is dropped.
pub fn color_hex(col: &Srgba) -> String {
  let rgb = (channel_byte(col.red) << 16) | (channel_byte(col.green) << 8) | channel_byte(col.blue);
  format!("#{rgb:06x}")
}

/// Unpacks an `0xAARRGGBB` value into normalized channels.
pub fn unpack_argb(argb: u32) -> Srgba {
  let byte = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
  Srgba::new(byte(16), byte(8), byte(0), byte(24))
}

/// Packs normalized channels into `0xAARRGGBB`.
///
/// Unlike [`color_hex`] this rounds, so `pack_argb(&unpack_argb(x)) == x`.
pub fn pack_argb(col: &Srgba) -> u32 {
  let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
  (byte(col.alpha) << 24) | (byte(col.red) << 16) | (byte(col.green) << 8) | byte(col.blue)
}

/// Strips at most one `#` and returns the rest if it is 1 to 8 hex digits.
///
/// `u32::from_str_radix` alone would also take a leading `+`.
pub fn hex_digits(s: &str) -> Option<&str> {
  let s = s.trim();
  let digits = s.strip_prefix('#').unwrap_or(s);
  let valid = !digits.is_empty() && digits.len() <= 8 && digits.chars().all(|c| c.is_ascii_hexdigit());
  valid.then(|| digits)
}

fn channel_byte(c: f32) -> u32 {
  (c.clamp(0.0, 1.0) * 255.0) as u32
}

#[cfg(test)]
mod tests {
  use palette::Srgba;

  use super::{color_hex, hex_digits, luma, pack_argb, prefers_dark_text, unpack_argb};

  #[test]
  fn test_luma_weights() {
    assert_eq!(luma(&Srgba::new(1.0, 1.0, 1.0, 1.0)), 1.0);
    assert_eq!(luma(&Srgba::new(0.0, 0.0, 0.0, 1.0)), 0.0);
    assert!((luma(&Srgba::new(0.0, 1.0, 0.0, 1.0)) - 0.587).abs() < 1e-6);
  }

  #[test]
  fn test_threshold_is_not_one_half() {
    // luma 0.5 would pass a conventional 0.5 cutoff, but not this one
    let mid = Srgba::new(0.5, 0.5, 0.5, 1.0);
    assert!(!prefers_dark_text(&mid));
    let light = Srgba::new(0.6, 0.6, 0.6, 1.0);
    assert!(prefers_dark_text(&light));
  }

  #[test]
  fn test_hex_truncates() {
    // 0.999 * 255 = 254.7 -> fe
    assert_eq!(color_hex(&Srgba::new(0.999, 0.0, 1.0, 1.0)), "#fe00ff");
  }

  #[test]
  fn test_unpack_argb_channel_order() {
    let c = unpack_argb(0x80ff4000);
    assert_eq!(c.red, 1.0);
    assert_eq!(c.green, 64.0 / 255.0);
    assert_eq!(c.blue, 0.0);
    assert_eq!(c.alpha, 128.0 / 255.0);
    assert_eq!(pack_argb(&c), 0x80ff4000);
  }

  #[test]
  fn test_hex_digits_rejects_signs_and_repeated_prefix() {
    assert_eq!(hex_digits("3f51b5"), Some("3f51b5"));
    assert_eq!(hex_digits(" #1f000000 "), Some("1f000000"));
    assert_eq!(hex_digits("+fffffff"), None);
    assert_eq!(hex_digits("##3f51b5"), None);
    assert_eq!(hex_digits("#"), None);
    assert_eq!(hex_digits("123456789"), None);
  }
}
