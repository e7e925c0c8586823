use super::*;

/// The four byte tag naming a chunk's type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
#[allow(missing_docs)]
impl ChunkType {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const iCCP: Self = Self(*b"iCCP");
  pub const sRGB: Self = Self(*b"sRGB");
  pub const gAMA: Self = Self(*b"gAMA");
  pub const tEXt: Self = Self(*b"tEXt");

  /// Ancillary chunks have a lowercase first letter. Decoders may skip them.
  #[inline]
  #[must_use]
  pub const fn is_ancillary(self) -> bool {
    (self.0[0] & 0x20) != 0
  }
}
impl Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char(self.0[0] as char)?;
    f.write_char(self.0[1] as char)?;
    f.write_char(self.0[2] as char)?;
    f.write_char(self.0[3] as char)?;
    Ok(())
  }
}
impl From<[u8; 4]> for ChunkType {
  #[inline]
  fn from(tag: [u8; 4]) -> Self {
    Self(tag)
  }
}

/// A chunk whose CRC has already been checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk<'b> {
  pub chunk_type: ChunkType,
  pub data: &'b [u8],
}
impl Debug for Chunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Chunk")
      .field("chunk_type", &self.chunk_type)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .finish()
  }
}

/// Reads one chunk off the front of `bytes`, giving the chunk and the bytes
/// after it.
///
/// The layout is: data length (`u32` BE), type tag, data, then the CRC of the
/// tag and data (`u32` BE).
///
/// ## Failure
/// * Fewer bytes remain than the chunk needs.
/// * The stored CRC doesn't match the computed CRC.
pub fn read_chunk(bytes: &[u8]) -> PngResult<(Chunk<'_>, &[u8])> {
  let truncated = |needed: usize| PngError::Truncated { needed, remaining: bytes.len() };
  let (len_bytes, rest) = try_split_off_byte_array::<4>(bytes).ok_or(truncated(12))?;
  let len = u32_be(len_bytes) as usize;
  let needed = len.saturating_add(12);
  let (tag, rest) = try_split_off_byte_array::<4>(rest).ok_or(truncated(needed))?;
  let (data, rest) = try_split_off_slice(rest, len).ok_or(truncated(needed))?;
  let (crc_bytes, rest) = try_split_off_byte_array::<4>(rest).ok_or(truncated(needed))?;

  let chunk_type = ChunkType(tag);
  let declared = u32_be(crc_bytes);
  let actual = chunk_crc(tag, data);
  trace!("read {chunk_type:?} chunk: {len} bytes, crc {declared:#010x}");
  if declared != actual {
    return Err(PngError::Checksum { chunk: chunk_type, declared, actual });
  }
  Ok((Chunk { chunk_type, data }, rest))
}

/// Appends a complete chunk (length, tag, data, CRC) to `out`.
///
/// ## Failure
/// * `data` is longer than `u32::MAX` bytes. Nothing is written.
pub fn write_chunk(out: &mut Vec<u8>, chunk_type: ChunkType, data: &[u8]) -> PngResult<()> {
  let len = u32::try_from(data.len()).map_err(|_| PngError::ChunkTooLong { len: data.len() })?;
  let crc = chunk_crc(chunk_type.0, data);
  trace!("write {chunk_type:?} chunk: {len} bytes, crc {crc:#010x}");
  out.reserve(data.len() + 12);
  out.extend_from_slice(&len.to_be_bytes());
  out.extend_from_slice(&chunk_type.0);
  out.extend_from_slice(data);
  out.extend_from_slice(&crc.to_be_bytes());
  Ok(())
}

/// Builds a complete chunk as its own byte vec.
///
/// ## Failure
/// * Same as [`write_chunk`].
#[inline]
pub fn chunk_bytes(chunk_type: ChunkType, data: &[u8]) -> PngResult<Vec<u8>> {
  let mut out = Vec::with_capacity(data.len() + 12);
  write_chunk(&mut out, chunk_type, data)?;
  Ok(out)
}

/// An iterator over the checked chunks of some PNG bytes.
///
/// After the first error the iterator is fused and only gives `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ChunkIter<'b>(&'b [u8]);
impl<'b> ChunkIter<'b> {
  /// Checks the signature, then iterates the chunks after it.
  ///
  /// ## Failure
  /// * The first 8 bytes aren't the PNG signature.
  #[inline]
  pub fn from_png_bytes(bytes: &'b [u8]) -> PngResult<Self> {
    strip_signature(bytes).map(Self)
  }

  /// Iterates chunks starting directly at the front of `bytes`, with no
  /// signature.
  #[inline]
  #[must_use]
  pub const fn from_chunk_bytes(bytes: &'b [u8]) -> Self {
    Self(bytes)
  }
}
impl<'b> Iterator for ChunkIter<'b> {
  type Item = PngResult<Chunk<'b>>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.0.is_empty() {
      return None;
    }
    match read_chunk(self.0) {
      Ok((chunk, rest)) => {
        self.0 = rest;
        Some(Ok(chunk))
      }
      Err(e) => {
        self.0 = &[];
        Some(Err(e))
      }
    }
  }
}
impl core::iter::FusedIterator for ChunkIter<'_> {}
