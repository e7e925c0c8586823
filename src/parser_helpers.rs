#![forbid(unsafe_code)]

//! Just has shorthands for the big-endian slicing that PNG chunks need.

#[inline]
#[must_use]
pub(crate) fn u32_be(bytes: [u8; 4]) -> u32 {
  u32::from_be_bytes(bytes)
}

/// Splits `N` bytes off the front of `bytes`, if there are that many.
#[inline]
pub(crate) fn try_split_off_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    Some((head.try_into().ok()?, tail))
  } else {
    None
  }
}

/// Splits `n` bytes off the front of `bytes`, if there are that many.
#[inline]
pub(crate) fn try_split_off_slice(bytes: &[u8], n: usize) -> Option<(&[u8], &[u8])> {
  if bytes.len() >= n {
    Some(bytes.split_at(n))
  } else {
    None
  }
}
