//! The CRC-32 used to sign every PNG chunk.
//!
//! This is the reflected CRC with polynomial `0xEDB88320`, initial value
//! `0xFFFFFFFF`, and a final XOR of `0xFFFFFFFF` (the same CRC that zip and
//! ethernet use).

/// Lookup table for every possible byte value.
///
/// Built at compile time, so there's no lazy init and no shared mutable
/// state at runtime.
pub const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Feeds more bytes into a running (not yet finalized) CRC value.
///
/// Start from `u32::MAX` and XOR the final result with `u32::MAX`, or just use
/// [`png_crc`] if you have all the bytes at once.
#[inline]
#[must_use]
pub fn update_crc(mut crc: u32, bytes: impl IntoIterator<Item = u8>) -> u32 {
  for byte in bytes {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc
}

/// Computes the CRC of all the bytes given.
#[inline]
#[must_use]
pub fn png_crc(bytes: &[u8]) -> u32 {
  update_crc(u32::MAX, bytes.iter().copied()) ^ u32::MAX
}

/// Computes the CRC of a chunk, which covers the type tag and then the data.
#[inline]
#[must_use]
pub fn chunk_crc(chunk_type: [u8; 4], data: &[u8]) -> u32 {
  let running = update_crc(u32::MAX, chunk_type);
  update_crc(running, data.iter().copied()) ^ u32::MAX
}
