//! The RGBA color type that every canvas pixel holds.

use bytemuck::{Pod, Zeroable};

use crate::{PngError, PngResult};

/// An 8-bits per channel RGBA color.
///
/// Colors are straight alpha (not premultiplied). They're plain values: every
/// operation returns a new color rather than changing the old one.
///
/// The layout is the same as the PNG RGBA8 pixel layout, so a `&[Color]` can
/// be cast to bytes with `bytemuck`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

#[allow(missing_docs)]
impl Color {
  /// Fully transparent, and treated as "nothing here" by [`or_else`](Color::or_else).
  pub const BACKGROUND: Self = Self::from_u32(0x0000_0000);
  pub const BLACK: Self = Self::from_u32(0x0000_00FF);
  pub const BLUE: Self = Self::from_u32(0x0000_FFFF);
  pub const BROWN: Self = Self::from_u32(0x9966_33FF);
  pub const BUBBLEGUM: Self = Self::from_u32(0xFF66_FFFF);
  pub const CYAN: Self = Self::from_u32(0x00FF_FFFF);
  pub const GRAY: Self = Self::from_u32(0x7F7F_7FFF);
  pub const GREEN: Self = Self::from_u32(0x00FF_00FF);
  pub const MAGENTA: Self = Self::from_u32(0xFF00_FFFF);
  pub const ORANGE: Self = Self::from_u32(0xFF7F_00FF);
  pub const PURPLE: Self = Self::from_u32(0x7F00_7FFF);
  pub const RED: Self = Self::from_u32(0xFF00_00FF);
  pub const WHITE: Self = Self::from_u32(0xFFFF_FFFF);
  pub const YELLOW: Self = Self::from_u32(0xFFFF_00FF);
}

impl Color {
  /// Makes a color from all four channels.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  /// Makes a fully opaque color.
  #[inline]
  #[must_use]
  pub const fn rgb_opaque(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: u8::MAX }
  }

  /// Makes a color from a `0xRRGGBBAA` integer.
  #[inline]
  #[must_use]
  pub const fn from_u32(rgba: u32) -> Self {
    let [r, g, b, a] = rgba.to_be_bytes();
    Self { r, g, b, a }
  }

  /// Packs the color into a `0xRRGGBBAA` integer.
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes([self.r, self.g, self.b, self.a])
  }

  /// Parses a hex color literal.
  ///
  /// Accepts `RRGGBBAA` or `RRGGBB` (opaque), with an optional `0x` or `#`
  /// prefix, in either letter case.
  ///
  /// ## Failure
  /// * Any other number of digits, or a non-hex digit.
  pub fn from_hex_str(s: &str) -> PngResult<Self> {
    let invalid = || PngError::InvalidColorLiteral(String::from(s));
    let digits = s
      .strip_prefix("0x")
      .or_else(|| s.strip_prefix("0X"))
      .or_else(|| s.strip_prefix('#'))
      .unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(invalid());
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    match digits.len() {
      8 => Ok(Self::from_u32(value)),
      6 => Ok(Self::from_u32((value << 8) | 0xFF)),
      _ => Err(invalid()),
    }
  }

  #[inline]
  #[must_use]
  pub const fn r(self) -> u8 {
    self.r
  }
  #[inline]
  #[must_use]
  pub const fn g(self) -> u8 {
    self.g
  }
  #[inline]
  #[must_use]
  pub const fn b(self) -> u8 {
    self.b
  }
  #[inline]
  #[must_use]
  pub const fn a(self) -> u8 {
    self.a
  }

  /// The color channels without alpha.
  #[inline]
  #[must_use]
  pub const fn rgb(self) -> [u8; 3] {
    [self.r, self.g, self.b]
  }

  #[inline]
  #[must_use]
  pub const fn to_array(self) -> [u8; 4] {
    [self.r, self.g, self.b, self.a]
  }

  /// Exact channel-for-channel equality, usable in `const` contexts.
  #[inline]
  #[must_use]
  pub const fn equals(self, other: Self) -> bool {
    self.r == other.r && self.g == other.g && self.b == other.b && self.a == other.a
  }

  /// Mixes `other` into this color, giving a new color.
  ///
  /// Each channel (alpha included) becomes the average of the two inputs,
  /// rounded down. Mixing white and black gives [`Color::GRAY`] regardless of
  /// argument order.
  #[inline]
  #[must_use]
  pub const fn blend(self, other: Self) -> Self {
    const fn mix(a: u8, b: u8) -> u8 {
      ((a as u16 + b as u16) / 2) as u8
    }
    Self {
      r: mix(self.r, other.r),
      g: mix(self.g, other.g),
      b: mix(self.b, other.b),
      a: mix(self.a, other.a),
    }
  }

  /// Scales alpha by `factor / 256`, keeping the color channels.
  ///
  /// `factor` is normally `0..=255`, but any value works: the new alpha is
  /// `(a * factor) >> 8`, saturating at 255.
  #[inline]
  #[must_use]
  pub const fn intensity(self, factor: u32) -> Self {
    let scaled = (self.a as u64 * factor as u64) >> 8;
    let a = if scaled > u8::MAX as u64 { u8::MAX } else { scaled as u8 };
    Self { a, ..self }
  }

  /// Gives `self`, unless `self` is [`Color::BACKGROUND`], in which case you get
  /// `other`.
  ///
  /// This is "first non-transparent color wins".
  #[inline]
  #[must_use]
  pub const fn or_else(self, other: Self) -> Self {
    if self.equals(Self::BACKGROUND) {
      other
    } else {
      self
    }
  }

  /// A two character string roughly showing how bright this color is.
  ///
  /// * Alpha 0 is `"  "`.
  /// * Otherwise the brightness is `((r + g + b) / 3) * a / 255`, and the
  ///   glyphs from darkest to lightest are `..`, `,,`, `++`, `00` (one for each
  ///   64 steps of brightness).
  #[inline]
  #[must_use]
  pub const fn to_ascii(self) -> &'static str {
    const GLYPHS: [&str; 4] = ["..", ",,", "++", "00"];
    if self.a == 0 {
      return "  ";
    }
    let sum = self.r as u32 + self.g as u32 + self.b as u32;
    let brightness = (sum / 3) * (self.a as u32) / 255;
    GLYPHS[(brightness / 64) as usize]
  }

  /// Makes an opaque color from hue, saturation, and value, each on a
  /// `0..=255` scale.
  ///
  /// Hue wraps around: 0 and 255 are both red, 85 is green, 170 is blue.
  /// Negative hues have 255 added first.
  #[must_use]
  pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
    if s == 0.0 {
      let v = v.round() as u8;
      return Self::rgb_opaque(v, v, v);
    }
    let h = if h < 0.0 { h + 255.0 } else { h };
    let h = h / 255.0 * 6.0;
    let s = s / 255.0;
    let v = v / 255.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let w = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match i as i64 {
      1 => (q, v, p),
      2 => (p, v, w),
      3 => (p, q, v),
      4 => (w, p, v),
      5 => (v, p, q),
      // 0, and 6 when the hue is exactly 255
      _ => (v, w, p),
    };
    let to_u8 = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Self::rgb_opaque(to_u8(r), to_u8(g), to_u8(b))
  }

  /// Converts to `[h, s, v]`, each on a `0..=255` scale.
  ///
  /// This is integer math, so a round trip through
  /// [`from_hsv`](Color::from_hsv) can be off by a step or two in a channel.
  #[must_use]
  pub fn to_hsv(self) -> [u8; 3] {
    let [r, g, b] = self.rgb().map(i32::from);
    let v = r.max(g).max(b);
    if v == 0 {
      return [0, 0, 0];
    }
    let range = v - r.min(g).min(b);
    let s = 255 * range / v;
    if s == 0 {
      return [0, 0, v as u8];
    }
    // 43 is a sixth of the hue circle on the 0..=255 scale
    let h = if v == r {
      (43 * (g - b)).div_euclid(range)
    } else if v == g {
      0x55 + (43 * (b - r)).div_euclid(range)
    } else {
      0xAA + (43 * (r - g)).div_euclid(range)
    };
    [h.rem_euclid(256) as u8, s as u8, v as u8]
  }
}

impl From<[u8; 4]> for Color {
  #[inline]
  fn from([r, g, b, a]: [u8; 4]) -> Self {
    Self { r, g, b, a }
  }
}
impl From<Color> for [u8; 4] {
  #[inline]
  fn from(c: Color) -> Self {
    c.to_array()
  }
}
