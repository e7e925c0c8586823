use super::*;

/// Decodes PNG bytes into a canvas.
///
/// The bytes must be: the signature, an `IHDR` chunk, any number of ancillary
/// chunks (which are skipped), exactly one `IDAT` chunk, then `IEND`. Only
/// 8-bit RGB and RGBA images without interlacing are accepted. RGB pixels get
/// an alpha of 255.
///
/// ## Failure
/// * Any structural problem with the bytes, see [`PngError`].
pub fn decode(bytes: &[u8]) -> PngResult<Canvas> {
  let mut chunks = ChunkIter::from_png_bytes(bytes)?;
  let header = read_header(&mut chunks)?;
  let color_type = header.validate()?;
  let count = pixel_count(header.width, header.height)?;
  debug!("decoding {header:?}");

  let idat = loop {
    match chunks.next().transpose()? {
      Some(chunk) if chunk.chunk_type == ChunkType::IDAT => break chunk,
      Some(chunk) if chunk.chunk_type.is_ancillary() => {
        debug!("skipping ancillary {:?} chunk ({} bytes)", chunk.chunk_type, chunk.data.len());
      }
      other => {
        return Err(PngError::ChunkOrder {
          expected: ChunkType::IDAT,
          found: other.map(|c| c.chunk_type),
        })
      }
    }
  };

  let bpp = color_type.channel_count();
  let bytes_per_row = header.width as usize * bpp;
  let expected = (bytes_per_row + 1)
    .checked_mul(header.height as usize)
    .ok_or(PngError::InvalidDimensions { width: header.width, height: header.height })?;
  let mut data = decompress(idat.data, expected)?;
  if data.len() < expected {
    return Err(PngError::ImageDataLength { expected, actual: data.len() });
  }
  unfilter_scanlines(&mut data, bpp, bytes_per_row)?;

  let mut pixels: Vec<Color> = Vec::with_capacity(count);
  for line in data.chunks_exact(bytes_per_row + 1) {
    let line = &line[1..];
    match color_type {
      ColorType::RGBA => pixels.extend_from_slice(bytemuck::cast_slice(line)),
      ColorType::RGB => {
        pixels.extend(line.chunks_exact(3).map(|rgb| Color::rgb_opaque(rgb[0], rgb[1], rgb[2])))
      }
    }
  }

  match chunks.next().transpose()? {
    Some(chunk) if chunk.chunk_type == ChunkType::IEND => (),
    other => {
      return Err(PngError::ChunkOrder {
        expected: ChunkType::IEND,
        found: other.map(|c| c.chunk_type),
      })
    }
  }
  Canvas::from_top_down_pixels(header.width, header.height, pixels)
}

/// Reads just the size and bit depth from PNG bytes.
///
/// Only the signature and the `IHDR` chunk (including its CRC) are checked.
/// The header's format fields aren't validated and nothing after the header is
/// read.
///
/// ## Failure
/// * Bad signature, a missing or corrupt `IHDR`, or a header that isn't 13
///   bytes.
pub fn decode_metadata(bytes: &[u8]) -> PngResult<Metadata> {
  let mut chunks = ChunkIter::from_png_bytes(bytes)?;
  read_header(&mut chunks).map(|header| header.metadata())
}

fn read_header(chunks: &mut ChunkIter<'_>) -> PngResult<ImageHeader> {
  match chunks.next().transpose()? {
    Some(chunk) if chunk.chunk_type == ChunkType::IHDR => ImageHeader::try_from(chunk.data),
    other => {
      Err(PngError::ChunkOrder { expected: ChunkType::IHDR, found: other.map(|c| c.chunk_type) })
    }
  }
}
