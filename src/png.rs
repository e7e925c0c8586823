#![forbid(unsafe_code)]

//! Module for reading and writing PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Supported Subset
//!
//! Encoding always writes 8-bit RGBA with a single `IDAT` chunk. Decoding
//! accepts 8-bit RGB or RGBA, non-interlaced, with any ancillary chunks
//! between the header and the image data (they're skipped). Everything else is
//! rejected with an error rather than guessed at.
//!
//! The entire PNG byte stream is expected to be in memory as one slice.
//!
//! ## Layout
//!
//! A PNG is the 8 byte [`SIGNATURE`] followed by chunks. Each chunk is a
//! big-endian `u32` length, a 4 byte [`ChunkType`], the data, and a big-endian
//! CRC32 of the type and data (see [`chunk_crc`]).

use core::fmt::{Debug, Write};

use log::{debug, trace};

use crate::{
  canvas::pixel_count,
  crc32::chunk_crc,
  parser_helpers::{try_split_off_byte_array, try_split_off_slice, u32_be},
  Canvas, Color, PngError, PngResult, UnsupportedFormat,
};

mod chunk;
pub use chunk::*;

mod header;
pub use header::*;

mod filter;
pub use filter::*;

mod zlib;
pub use zlib::*;

mod encode;
pub use encode::*;

mod decode;
pub use decode::*;

#[cfg(feature = "fs")]
mod fs;
#[cfg(feature = "fs")]
pub use fs::*;


/// The first eight bytes of a PNG datastream.
pub const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks for the [`SIGNATURE`] and gives the bytes after it.
///
/// ## Failure
/// * The bytes don't start with the signature.
#[inline]
pub fn strip_signature(bytes: &[u8]) -> PngResult<&[u8]> {
  match try_split_off_byte_array::<8>(bytes) {
    Some((sig, rest)) if sig == SIGNATURE => Ok(rest),
    _ => Err(PngError::Signature),
  }
}
