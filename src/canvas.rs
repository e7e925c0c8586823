#![forbid(unsafe_code)]

//! The drawing surface: a fixed size grid of [`Color`] values.
//!
//! ## Coordinates
//! The origin is the **bottom left** pixel. `x` grows to the right and `y`
//! grows upward. This is the convention for every method: [`get`](Canvas::get),
//! [`set`](Canvas::set), [`each`](Canvas::each), [`line`](Canvas::line), and so
//! on.
//!
//! Internally the rows are kept top to bottom, which is the order PNG stores
//! them in, so encoding is a straight copy of the pixel memory.

use core::{fmt, str::FromStr};

use crate::{Axis, Color, PngError, PngResult};

mod line;


/// How [`Canvas::composite`] combines each incoming pixel with the pixel
/// already there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompositeMode {
  /// The incoming pixel replaces the existing one.
  #[default]
  Overwrite,
  /// The existing pixel wins unless it's [`Color::BACKGROUND`].
  ///
  /// Parsed from either `"add"` or `"underlay"`.
  Underlay,
  /// The incoming pixel wins unless it's [`Color::BACKGROUND`].
  Overlay,
  /// The incoming pixel is blended in with [`Canvas::point`].
  Blend,
}
impl FromStr for CompositeMode {
  type Err = PngError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s {
      "overwrite" => Self::Overwrite,
      "add" | "underlay" => Self::Underlay,
      "overlay" => Self::Overlay,
      "blend" => Self::Blend,
      _ => return Err(PngError::UnknownCompositeMode(String::from(s))),
    })
  }
}

/// A grid of colors with the origin in the bottom left.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Canvas {
  width: u32,
  height: u32,
  /// rows top to bottom, `width * height` entries
  pixels: Vec<Color>,
}

impl Canvas {
  /// Makes a canvas with every pixel set to `background`.
  ///
  /// ## Failure
  /// * Either dimension is 0.
  /// * `width * height` overflows `usize`.
  pub fn new(width: u32, height: u32, background: Color) -> PngResult<Self> {
    let count = pixel_count(width, height)?;
    Ok(Self { width, height, pixels: vec![background; count] })
  }

  /// Makes a canvas from pixels in PNG order: rows top to bottom, each row
  /// left to right.
  ///
  /// ## Failure
  /// * Either dimension is 0, or `pixels.len()` isn't `width * height`.
  pub fn from_top_down_pixels(width: u32, height: u32, pixels: Vec<Color>) -> PngResult<Self> {
    if pixel_count(width, height)? != pixels.len() {
      return Err(PngError::InvalidDimensions { width, height });
    }
    Ok(Self { width, height, pixels })
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// The pixels in PNG order: rows top to bottom, each row left to right.
  #[inline]
  #[must_use]
  pub fn as_top_down_pixels(&self) -> &[Color] {
    &self.pixels
  }

  /// Iterates the rows from the top of the image down.
  #[inline]
  pub fn rows_top_down(&self) -> impl Iterator<Item = &[Color]> + '_ {
    self.pixels.chunks_exact(self.width as usize)
  }

  /// Converts a bottom-left-origin position into an index into `pixels`.
  #[inline]
  fn index_of(&self, x: u32, y: u32) -> PngResult<usize> {
    if x >= self.width {
      return Err(PngError::OutOfBounds { axis: Axis::X, value: x.into(), bound: self.width });
    }
    if y >= self.height {
      return Err(PngError::OutOfBounds { axis: Axis::Y, value: y.into(), bound: self.height });
    }
    let row = (self.height - 1 - y) as usize;
    Ok(row * self.width as usize + x as usize)
  }

  /// Gets the color at `(x, y)`.
  ///
  /// ## Failure
  /// * `x >= width` or `y >= height`.
  #[inline]
  pub fn get(&self, x: u32, y: u32) -> PngResult<Color> {
    self.index_of(x, y).map(|i| self.pixels[i])
  }

  /// Replaces the color at `(x, y)`.
  ///
  /// ## Failure
  /// * `x >= width` or `y >= height`.
  #[inline]
  pub fn set(&mut self, x: u32, y: u32, color: Color) -> PngResult<()> {
    let i = self.index_of(x, y)?;
    self.pixels[i] = color;
    Ok(())
  }

  /// Blends `color` onto the color at `(x, y)`, returning the new color.
  ///
  /// This always reads and blends, it never simply overwrites.
  ///
  /// ## Failure
  /// * `x >= width` or `y >= height`.
  #[inline]
  pub fn point(&mut self, x: u32, y: u32, color: Color) -> PngResult<Color> {
    let i = self.index_of(x, y)?;
    let blended = self.pixels[i].blend(color);
    self.pixels[i] = blended;
    Ok(blended)
  }

  /// Visits every pixel once as `(x, y, color)`.
  ///
  /// Goes row by row starting from the bottom row (`y == 0`), left to right
  /// within each row.
  pub fn each(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
    (0..self.height).flat_map(move |y| {
      let row_start = (self.height - 1 - y) as usize * self.width as usize;
      let row = &self.pixels[row_start..row_start + self.width as usize];
      row.iter().copied().enumerate().map(move |(x, c)| (x as u32, y, c))
    })
  }

  /// Copies the region from `(x0, y0)` to `(x1, y1)`, both corners inclusive,
  /// into a new canvas.
  ///
  /// ## Failure
  /// * Either far corner coordinate is out of bounds.
  /// * `x1 < x0` or `y1 < y0`.
  pub fn extract(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> PngResult<Canvas> {
    self.index_of(x1, y1)?;
    if x1 < x0 || y1 < y0 {
      return Err(PngError::InvalidDimensions {
        width: (x1 + 1).saturating_sub(x0),
        height: (y1 + 1).saturating_sub(y0),
      });
    }
    let (width, height) = (x1 - x0 + 1, y1 - y0 + 1);
    let mut pixels = Vec::with_capacity(pixel_count(width, height)?);
    // our storage is top down, so start from the highest row of the region
    for y in (y0..=y1).rev() {
      let start = self.index_of(x0, y)?;
      pixels.extend_from_slice(&self.pixels[start..start + width as usize]);
    }
    Ok(Canvas { width, height, pixels })
  }

  /// Draws `other` onto this canvas with its bottom left corner at `(x, y)`.
  ///
  /// ## Failure
  /// * Part of `other` would land outside this canvas. Nothing is drawn in
  ///   that case.
  pub fn composite(
    &mut self, other: &Canvas, x: u32, y: u32, mode: CompositeMode,
  ) -> PngResult<()> {
    let far_x = u64::from(x) + u64::from(other.width) - 1;
    let far_y = u64::from(y) + u64::from(other.height) - 1;
    if far_x >= u64::from(self.width) {
      return Err(PngError::OutOfBounds { axis: Axis::X, value: far_x as i64, bound: self.width });
    }
    if far_y >= u64::from(self.height) {
      return Err(PngError::OutOfBounds { axis: Axis::Y, value: far_y as i64, bound: self.height });
    }
    for (x1, y1, incoming) in other.each() {
      let (tx, ty) = (x + x1, y + y1);
      match mode {
        CompositeMode::Overwrite => self.set(tx, ty, incoming)?,
        CompositeMode::Underlay => {
          let existing = self.get(tx, ty)?;
          self.set(tx, ty, existing.or_else(incoming))?
        }
        CompositeMode::Overlay => {
          let existing = self.get(tx, ty)?;
          self.set(tx, ty, incoming.or_else(existing))?
        }
        CompositeMode::Blend => {
          self.point(tx, ty, incoming)?;
        }
      }
    }
    Ok(())
  }
}

/// Checks that the dimensions are usable, and gives the pixel count.
pub(crate) fn pixel_count(width: u32, height: u32) -> PngResult<usize> {
  if width == 0 || height == 0 {
    return Err(PngError::InvalidDimensions { width, height });
  }
  (width as usize)
    .checked_mul(height as usize)
    .filter(|count| count.checked_mul(core::mem::size_of::<Color>()).is_some())
    .ok_or(PngError::InvalidDimensions { width, height })
}

impl fmt::Debug for Canvas {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Canvas")
      .field("width", &self.width)
      .field("height", &self.height)
      .field("pixels", &(&self.pixels[..self.pixels.len().min(4)], self.pixels.len()))
      .finish()
  }
}

/// ASCII art of the canvas, two characters per pixel (see
/// [`Color::to_ascii`]), top row first.
///
/// Canvases wider than 39 pixels are scaled down by only printing every Nth
/// row and column, where `N = width / 39 + 1`.
impl fmt::Display for Canvas {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let scale = (self.width as usize / 39) + 1;
    for row in self.rows_top_down().step_by(scale) {
      for color in row.iter().step_by(scale) {
        f.write_str(color.to_ascii())?;
      }
      f.write_str("\n")?;
    }
    Ok(())
  }
}
