use core::fmt;

use crate::png::ChunkType;

/// Which axis of a canvas a coordinate was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
  X,
  Y,
}
impl fmt::Display for Axis {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Axis::X => "x",
      Axis::Y => "y",
    })
  }
}

/// A header or scanline value this crate doesn't know how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum UnsupportedFormat {
  /// Only 8 bits per channel is supported.
  #[error("wrong bit depth: {0}")]
  BitDepth(u8),

  /// Only RGB (2) and RGBA (6) are supported.
  #[error("wrong color type: {0}")]
  ColorType(u8),

  /// Must be 0 (zlib).
  #[error("unsupported compression method: {0}")]
  CompressionMethod(u8),

  /// Must be 0 (adaptive filtering).
  #[error("unsupported filter method: {0}")]
  FilterMethod(u8),

  /// Must be 0, interlaced images aren't supported.
  #[error("unsupported interlace method: {0}")]
  InterlaceMethod(u8),

  /// A scanline started with a filter tag outside of `0..=4`.
  #[error("invalid filter algorithm {0}")]
  FilterType(u8),
}

/// An error from the `png_canvas` crate.
#[derive(Debug, thiserror::Error)]
pub enum PngError {
  /// The first 8 bytes weren't the PNG signature.
  #[error("invalid PNG signature")]
  Signature,

  /// A required chunk was missing or out of sequence.
  ///
  /// `found` is `None` when the input ran out of chunks entirely.
  #[error("expected {expected:?} chunk, not {found:?}")]
  ChunkOrder { expected: ChunkType, found: Option<ChunkType> },

  /// A chunk's stored CRC didn't match the CRC of its type and data.
  #[error("invalid CRC encountered in {chunk:?} chunk (declared {declared:#010x}, actual {actual:#010x})")]
  Checksum { chunk: ChunkType, declared: u32, actual: u32 },

  /// The input ended before a chunk did.
  #[error("input truncated: needed {needed} more bytes, only {remaining} remain")]
  Truncated { needed: usize, remaining: usize },

  /// The image uses a feature outside of 8-bit RGB/RGBA.
  #[error(transparent)]
  Unsupported(#[from] UnsupportedFormat),

  /// The header chunk's data wasn't exactly 13 bytes.
  #[error("header chunk has {len} bytes of data, expected 13")]
  MalformedHeader { len: usize },

  /// Width or height is zero, or the pixel count is too large to address.
  #[error("invalid image dimensions {width}x{height}")]
  InvalidDimensions { width: u32, height: u32 },

  /// The decompressed image data is shorter than the header requires.
  #[error("image data is {actual} bytes, expected at least {expected}")]
  ImageDataLength { expected: usize, actual: usize },

  /// Chunk data can be at most `u32::MAX` bytes long.
  #[error("chunk data is {len} bytes, which is more than a chunk can hold")]
  ChunkTooLong { len: usize },

  /// The image data wasn't a valid zlib stream.
  #[error("image data failed to decompress")]
  Decompress,

  /// A pixel coordinate was outside the canvas.
  #[error("bad {axis} value {value} >= {bound}")]
  OutOfBounds { axis: Axis, value: i64, bound: u32 },

  /// A color literal string couldn't be parsed.
  #[error("invalid color literal {0:?}")]
  InvalidColorLiteral(String),

  /// A composite mode name wasn't recognized.
  #[error("unknown style for composite: {0:?}")]
  UnknownCompositeMode(String),

  /// Reading or writing a file failed.
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),
}

/// Shorthand for results from this crate.
pub type PngResult<T> = Result<T, PngError>;
