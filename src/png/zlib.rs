//! The DEFLATE side of PNG image data, handled by `miniz_oxide`.

use super::*;

/// Zlib-compresses `raw` at the given level (0 to 10, higher is smaller and
/// slower).
#[inline]
#[must_use]
pub fn compress(raw: &[u8], level: u8) -> Vec<u8> {
  miniz_oxide::deflate::compress_to_vec_zlib(raw, level)
}

/// Inflates a zlib stream, never producing more than `limit` bytes.
///
/// ## Failure
/// * The stream is corrupt, ends early, or would inflate past `limit`.
pub fn decompress(zlib: &[u8], limit: usize) -> PngResult<Vec<u8>> {
  miniz_oxide::inflate::decompress_to_vec_zlib_with_limit(zlib, limit).map_err(|e| {
    debug!("inflate failed: {:?} after {} bytes", e.status, e.output.len());
    PngError::Decompress
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_compress_then_decompress() {
    let raw: Vec<u8> = (0..1000_u32).map(|i| (i % 7) as u8).collect();
    for level in [0, 1, 6, 10] {
      let z = compress(&raw, level);
      assert_eq!(decompress(&z, raw.len()).unwrap(), raw);
    }
  }

  #[test]
  fn test_decompress_respects_limit() {
    let raw = [7_u8; 100];
    let z = compress(&raw, 6);
    assert!(matches!(decompress(&z, 50), Err(PngError::Decompress)));
  }

  #[test]
  fn test_decompress_garbage() {
    assert!(matches!(decompress(&[1, 2, 3, 4, 5], 100), Err(PngError::Decompress)));
  }
}
