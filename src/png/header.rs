use super::*;

/// The pixel layouts this crate can decode.
///
/// PNG has others (greyscale, palette), but only direct RGB color is
/// supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ColorType {
  /// Red, Green, Blue. Decoded pixels get an alpha of 255.
  RGB = 2,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl ColorType {
  /// The number of channels (and so bytes, at 8-bit depth) per pixel.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::RGB => 3,
      Self::RGBA => 4,
    }
  }
}
impl TryFrom<u8> for ColorType {
  type Error = UnsupportedFormat;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      2 => ColorType::RGB,
      6 => ColorType::RGBA,
      _ => return Err(UnsupportedFormat::ColorType(value)),
    })
  }
}

/// The contents of an `IHDR` chunk, exactly as stored.
///
/// Parsing this doesn't check that the values are supported, call
/// [`validate`](ImageHeader::validate) for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHeader {
  pub width: u32,
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  pub color_type: u8,
  pub compression_method: u8,
  pub filter_method: u8,
  pub interlace_method: u8,
}
impl ImageHeader {
  /// The header this crate writes: 8-bit RGBA, no interlacing.
  #[inline]
  #[must_use]
  pub const fn rgba8(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      bit_depth: 8,
      color_type: ColorType::RGBA as u8,
      compression_method: 0,
      filter_method: 0,
      interlace_method: 0,
    }
  }

  /// The 13 bytes of `IHDR` chunk data.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> [u8; 13] {
    let [w0, w1, w2, w3] = self.width.to_be_bytes();
    let [h0, h1, h2, h3] = self.height.to_be_bytes();
    [
      w0,
      w1,
      w2,
      w3,
      h0,
      h1,
      h2,
      h3,
      self.bit_depth,
      self.color_type,
      self.compression_method,
      self.filter_method,
      self.interlace_method,
    ]
  }

  /// Checks that this crate can decode an image with this header.
  ///
  /// ## Failure
  /// * Bit depth other than 8.
  /// * Color type other than RGB or RGBA.
  /// * Non-zero compression, filter, or interlace method.
  pub fn validate(&self) -> Result<ColorType, UnsupportedFormat> {
    if self.bit_depth != 8 {
      return Err(UnsupportedFormat::BitDepth(self.bit_depth));
    }
    let color_type = ColorType::try_from(self.color_type)?;
    if self.compression_method != 0 {
      return Err(UnsupportedFormat::CompressionMethod(self.compression_method));
    }
    if self.filter_method != 0 {
      return Err(UnsupportedFormat::FilterMethod(self.filter_method));
    }
    if self.interlace_method != 0 {
      return Err(UnsupportedFormat::InterlaceMethod(self.interlace_method));
    }
    Ok(color_type)
  }

  #[inline]
  #[must_use]
  pub const fn metadata(&self) -> Metadata {
    Metadata { width: self.width, height: self.height, bit_depth: self.bit_depth }
  }
}
impl TryFrom<&[u8]> for ImageHeader {
  type Error = PngError;
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method] => {
        Ok(Self {
          width: u32::from_be_bytes([*w0, *w1, *w2, *w3]),
          height: u32::from_be_bytes([*h0, *h1, *h2, *h3]),
          bit_depth: *bit_depth,
          color_type: *color_type,
          compression_method: *compression_method,
          filter_method: *filter_method,
          interlace_method: *interlace_method,
        })
      }
      _ => Err(PngError::MalformedHeader { len: value.len() }),
    }
  }
}

/// What [`decode_metadata`] reports without decoding any pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Metadata {
  pub width: u32,
  pub height: u32,
  pub bit_depth: u8,
}
