use super::*;

impl Canvas {
  /// Draws an antialiased line from `(x0, y0)` to `(x1, y1)`, both ends
  /// inclusive.
  ///
  /// Horizontal, vertical, and exact 45° lines are drawn as solid runs of
  /// [`point`](Canvas::point) calls. Every other line uses a 16-bit fixed
  /// point error accumulator in the style of Xiaolin Wu's algorithm: each step
  /// along the longer axis blends two neighboring pixels with complementary
  /// alpha, and the two endpoints are blended at full strength.
  ///
  /// ## Failure
  /// * A pixel the line needs is outside the canvas. Pixels before that one
  ///   have already been drawn.
  /// * On sloped lines the partner pixel of the last step can land one step
  ///   past the far end along the minor axis. For a mostly horizontal line
  ///   whose slope divides evenly that is the row above `max(y0, y1)`, drawn
  ///   with zero alpha. When that row is off the canvas the line fails there
  ///   even though both endpoints are inside.
  pub fn line(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Color) -> PngResult<()> {
    let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
    let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
    // always draw upward
    if y0 > y1 {
      core::mem::swap(&mut x0, &mut x1);
      core::mem::swap(&mut y0, &mut y1);
    }
    let dx = x1 - x0;
    let sx: i64 = if dx < 0 { -1 } else { 1 };
    let dx = dx * sx;
    let dy = y1 - y0;

    if dy == 0 {
      for x in x0.min(x1)..=x0.max(x1) {
        self.plot(x, y0, color)?;
      }
      return Ok(());
    }
    if dx == 0 {
      for y in y0..=y1 {
        self.plot(x0, y, color)?;
      }
      return Ok(());
    }
    if dx == dy {
      let (mut x, mut y) = (x0, y0);
      for _ in 0..=dx {
        self.plot(x, y, color)?;
        x += sx;
        y += 1;
      }
      return Ok(());
    }

    self.plot(x0, y0, color)?;
    let mut e_acc: u32 = 0;
    if dy > dx {
      // mostly vertical: step y, occasionally step x
      let e = ((dx << 16) / dy) as u32;
      for _ in y0..(y1 - 1) {
        let e_acc_prev = e_acc;
        e_acc = (e_acc + e) & 0xFFFF;
        if e_acc <= e_acc_prev {
          x0 += sx;
        }
        let w = 0xFF - (e_acc >> 8);
        self.plot(x0, y0, color.intensity(w))?;
        y0 += 1;
        self.plot(x0 + sx, y0, color.intensity(0xFF - w))?;
      }
    } else {
      // mostly horizontal: step x, occasionally step y
      let e = ((dy << 16) / dx) as u32;
      for _ in 0..dx {
        let e_acc_prev = e_acc;
        e_acc = (e_acc + e) & 0xFFFF;
        if e_acc <= e_acc_prev {
          y0 += 1;
        }
        let w = 0xFF - (e_acc >> 8);
        self.plot(x0, y0, color.intensity(w))?;
        x0 += sx;
        self.plot(x0, y0 + 1, color.intensity(0xFF - w))?;
      }
    }
    self.plot(x1, y1, color)
  }

  /// [`point`](Canvas::point), but for the signed positions that the line
  /// stepping can produce.
  fn plot(&mut self, x: i64, y: i64, color: Color) -> PngResult<()> {
    let x = u32::try_from(x).map_err(|_| PngError::OutOfBounds {
      axis: Axis::X,
      value: x,
      bound: self.width,
    })?;
    let y = u32::try_from(y).map_err(|_| PngError::OutOfBounds {
      axis: Axis::Y,
      value: y,
      bound: self.height,
    })?;
    self.point(x, y, color).map(drop)
  }
}
