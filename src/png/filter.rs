//! Scanline filtering.
//!
//! Filters are applied to **bytes**, not to pixels. For each byte `x` the
//! filters look at `a` (the matching byte of the pixel to the left), `b` (the
//! matching byte of the row above), and `c` (the matching byte of the pixel up
//! and to the left). Any of those that would be off the image counts as 0.

use super::*;

/// The per-scanline filter tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FilterType {
  /// The bytes are stored as-is.
  #[default]
  None = 0,
  /// Each byte minus `a`
  Sub = 1,
  /// Each byte minus `b`
  Up = 2,
  /// Each byte minus the floored average of `a` and `b`
  Average = 3,
  /// Each byte minus the [Paeth predictor](paeth_predictor) of `a`, `b`, `c`
  Paeth = 4,
}
impl FilterType {
  /// Every filter, in tag order.
  pub const ALL: [Self; 5] = [Self::None, Self::Sub, Self::Up, Self::Average, Self::Paeth];

  #[inline]
  #[must_use]
  const fn predict(self, a: u8, b: u8, c: u8) -> u8 {
    match self {
      Self::None => 0,
      Self::Sub => a,
      Self::Up => b,
      Self::Average => ((a as u16 + b as u16) / 2) as u8,
      Self::Paeth => paeth_predictor(a, b, c),
    }
  }
}
impl TryFrom<u8> for FilterType {
  type Error = UnsupportedFormat;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::None,
      1 => Self::Sub,
      2 => Self::Up,
      3 => Self::Average,
      4 => Self::Paeth,
      _ => return Err(UnsupportedFormat::FilterType(value)),
    })
  }
}

/// Reverses the filtering of every scanline, in place.
///
/// * `data` is the decompressed image data: each scanline is one filter tag
///   byte followed by `bytes_per_row` filtered bytes.
/// * `bpp` is the number of bytes per pixel.
///
/// Afterwards every tag byte is 0, since each line is now unfiltered.
///
/// ## Failure
/// * A scanline has a tag outside of `0..=4`.
pub fn unfilter_scanlines(data: &mut [u8], bpp: usize, bytes_per_row: usize) -> PngResult<()> {
  debug_assert!(bpp > 0);
  let mut previous: &[u8] = &[];
  for (y, scanline) in data.chunks_exact_mut(bytes_per_row + 1).enumerate() {
    let (tag, line) = match scanline.split_first_mut() {
      Some(split) => split,
      None => continue,
    };
    let filter = FilterType::try_from(*tag)?;
    trace!("unfilter row {y} with {filter:?}");
    if filter != FilterType::None {
      for i in 0..line.len() {
        let a = if i >= bpp { line[i - bpp] } else { 0 };
        let b = previous.get(i).copied().unwrap_or(0);
        let c = if i >= bpp { previous.get(i - bpp).copied().unwrap_or(0) } else { 0 };
        line[i] = line[i].wrapping_add(filter.predict(a, b, c));
      }
      *tag = FilterType::None as u8;
    }
    previous = line;
  }
  Ok(())
}

/// Appends one filtered scanline (tag byte, then the filtered bytes) to `out`.
///
/// `previous` is the raw (unfiltered) row above, or empty for the top row.
pub fn filter_scanline(
  filter: FilterType, raw: &[u8], previous: &[u8], bpp: usize, out: &mut Vec<u8>,
) {
  out.reserve(raw.len() + 1);
  out.push(filter as u8);
  out.extend(raw.iter().enumerate().map(|(i, x)| {
    let a = if i >= bpp { raw[i - bpp] } else { 0 };
    let b = previous.get(i).copied().unwrap_or(0);
    let c = if i >= bpp { previous.get(i - bpp).copied().unwrap_or(0) } else { 0 };
    x.wrapping_sub(filter.predict(a, b, c))
  }));
}

/// The Paeth filter function computes a simple linear function of the three
/// neighboring bytes (left `a`, above `b`, upper left `c`), then picks
/// whichever neighbor is closest to that value.
///
/// Ties go to `a`, then `b`, then `c`.
#[inline]
#[must_use]
pub const fn paeth_predictor(a: u8, b: u8, c: u8) -> u8 {
  // i32 math means `a + b - c` can't overflow for any u8 inputs.
  let a = a as i32;
  let b = b as i32;
  let c = c as i32;
  let p = a + b - c;
  let pa = (p - a).abs();
  let pb = (p - b).abs();
  let pc = (p - c).abs();
  if pa <= pb && pa <= pc {
    a as u8
  } else if pb <= pc {
    b as u8
  } else {
    c as u8
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_paeth_predictor() {
    assert_eq!(paeth_predictor(0, 0, 0), 0);
    // p = 10, closest is a
    assert_eq!(paeth_predictor(10, 20, 20), 10);
    // p = 20, closest is b
    assert_eq!(paeth_predictor(10, 20, 10), 20);
    // p = 0 + 0 - 5 = -5, pa = pb = 5, pc = 10: tie goes to a
    assert_eq!(paeth_predictor(0, 0, 5), 0);
    // p = 100 + 50 - 200 = -50, pa = 150, pb = 100, pc = 250
    assert_eq!(paeth_predictor(100, 50, 200), 50);
    // p = 200 + 10 - 100 = 110, pa = 90, pb = 100, pc = 10
    assert_eq!(paeth_predictor(200, 10, 100), 100);
  }

  #[test]
  fn test_filter_type_tags() {
    for (i, f) in FilterType::ALL.iter().enumerate() {
      assert_eq!(FilterType::try_from(i as u8), Ok(*f));
      assert_eq!(*f as u8, i as u8);
    }
    assert_eq!(FilterType::try_from(5), Err(UnsupportedFormat::FilterType(5)));
  }

  #[test]
  fn test_filter_none_is_identity() {
    let raw = [1, 2, 3, 4, 5, 6, 7, 8];
    let mut out = Vec::new();
    filter_scanline(FilterType::None, &raw, &[], 4, &mut out);
    assert_eq!(out, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
  }

  #[test]
  fn test_filter_sub_top_row() {
    let raw = [10, 20, 30, 40, 15, 25, 35, 45];
    let mut out = Vec::new();
    filter_scanline(FilterType::Sub, &raw, &[], 4, &mut out);
    assert_eq!(out, [1, 10, 20, 30, 40, 5, 5, 5, 5]);
  }

  #[test]
  fn test_filter_average_uses_wide_sum() {
    // a + b = 400 here, which must not wrap before halving
    let previous = [0, 0, 0, 0, 200, 200, 200, 200];
    let raw = [200, 200, 200, 200, 200, 200, 200, 200];
    let mut out = Vec::new();
    filter_scanline(FilterType::Average, &raw, &previous, 4, &mut out);
    assert_eq!(out, [3, 200, 200, 200, 200, 0, 0, 0, 0]);
  }

  #[test]
  fn test_each_filter_round_trips() {
    let bpp = 4;
    let width = 5;
    let height = 4;
    let bytes_per_row = bpp * width;
    let raw: Vec<u8> =
      (0..(bytes_per_row * height)).map(|i| (i * 37 + (i / 3) * 101) as u8).collect();
    for filter in FilterType::ALL {
      let mut filtered = Vec::new();
      let mut previous: &[u8] = &[];
      for row in raw.chunks_exact(bytes_per_row) {
        filter_scanline(filter, row, previous, bpp, &mut filtered);
        previous = row;
      }
      assert_eq!(filtered.len(), (bytes_per_row + 1) * height);
      unfilter_scanlines(&mut filtered, bpp, bytes_per_row).unwrap();
      let unfiltered: Vec<u8> =
        filtered.chunks_exact(bytes_per_row + 1).flat_map(|line| line[1..].iter().copied()).collect();
      assert_eq!(unfiltered, raw, "{filter:?}");
      assert!(filtered.chunks_exact(bytes_per_row + 1).all(|line| line[0] == 0));
    }
  }

  #[test]
  fn test_unfilter_rejects_unknown_tag() {
    let mut data = [0, 1, 2, 3, 5, 4, 5, 6];
    assert!(matches!(
      unfilter_scanlines(&mut data, 3, 3),
      Err(PngError::Unsupported(UnsupportedFormat::FilterType(5)))
    ));
  }
}
