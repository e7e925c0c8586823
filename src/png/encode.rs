use super::*;

/// Settings for writing a [`Canvas`] as PNG bytes.
///
/// The output is always 8-bit RGBA with one `IDAT` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PngEncoder {
  /// The filter used on every scanline.
  pub filter: FilterType,
  /// The zlib compression level, 0 to 10.
  pub compression_level: u8,
}
impl Default for PngEncoder {
  #[inline]
  fn default() -> Self {
    Self { filter: FilterType::None, compression_level: 6 }
  }
}
impl PngEncoder {
  /// Encodes the canvas: signature, `IHDR`, one `IDAT`, then `IEND`.
  ///
  /// ## Failure
  /// * The compressed image data is too big for one chunk.
  pub fn encode(&self, canvas: &Canvas) -> PngResult<Vec<u8>> {
    let header = ImageHeader::rgba8(canvas.width(), canvas.height());
    let bpp = ColorType::RGBA.channel_count();
    let bytes_per_row = canvas.width() as usize * bpp;

    let mut filtered = Vec::with_capacity((bytes_per_row + 1) * canvas.height() as usize);
    let mut previous: &[u8] = &[];
    for row in canvas.rows_top_down() {
      let raw: &[u8] = bytemuck::cast_slice(row);
      filter_scanline(self.filter, raw, previous, bpp, &mut filtered);
      previous = raw;
    }
    let compressed = compress(&filtered, self.compression_level);
    debug!(
      "encoding {}x{} canvas: {} filtered bytes, {} compressed ({:?}, level {})",
      header.width,
      header.height,
      filtered.len(),
      compressed.len(),
      self.filter,
      self.compression_level
    );

    let mut out = Vec::with_capacity(SIGNATURE.len() + 3 * 12 + 13 + compressed.len());
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, ChunkType::IHDR, &header.to_bytes())?;
    write_chunk(&mut out, ChunkType::IDAT, &compressed)?;
    write_chunk(&mut out, ChunkType::IEND, &[])?;
    Ok(out)
  }
}

/// Encodes the canvas with the default [`PngEncoder`].
///
/// ## Failure
/// * Same as [`PngEncoder::encode`].
#[inline]
pub fn encode(canvas: &Canvas) -> PngResult<Vec<u8>> {
  PngEncoder::default().encode(canvas)
}
