use png_canvas::{
  png::{decode, encode},
  Axis, Canvas, Color, CompositeMode, PngError,
};

#[test]
fn test_draw_extract_composite_round_trip() {
  let mut art = Canvas::new(16, 16, Color::BACKGROUND).unwrap();
  art.line(0, 0, 15, 15, Color::RED).unwrap();
  art.line(0, 15, 15, 3, Color::from_hex_str("#3366ccff").unwrap()).unwrap();
  art.line(2, 1, 5, 14, Color::GREEN).unwrap();

  let corner = art.extract(0, 0, 7, 7).unwrap();
  assert_eq!((corner.width(), corner.height()), (8, 8));
  for (x, y, c) in corner.each() {
    assert_eq!(art.get(x, y).unwrap(), c);
  }

  let mut poster = Canvas::new(20, 20, Color::WHITE).unwrap();
  poster.composite(&corner, 12, 12, CompositeMode::Overlay).unwrap();
  for (x, y, c) in corner.each() {
    let expected = if c == Color::BACKGROUND { Color::WHITE } else { c };
    assert_eq!(poster.get(x + 12, y + 12).unwrap(), expected);
  }

  let decoded = decode(&encode(&poster).unwrap()).unwrap();
  assert_eq!(decoded, poster);
  assert_eq!(decoded.to_string(), poster.to_string());
}

#[test]
fn test_composite_mode_names() {
  let names = ["overwrite", "add", "underlay", "overlay", "blend"];
  let modes: Vec<CompositeMode> = names.iter().map(|n| n.parse().unwrap()).collect();
  assert_eq!(
    modes,
    [
      CompositeMode::Overwrite,
      CompositeMode::Underlay,
      CompositeMode::Underlay,
      CompositeMode::Overlay,
      CompositeMode::Blend
    ]
  );
  assert!(matches!(
    "multiply".parse::<CompositeMode>(),
    Err(PngError::UnknownCompositeMode(s)) if s == "multiply"
  ));
}

#[test]
fn test_errors_display() {
  let canvas = Canvas::new(3, 4, Color::BLACK).unwrap();
  let err = canvas.get(3, 0).unwrap_err();
  assert!(matches!(err, PngError::OutOfBounds { axis: Axis::X, value: 3, bound: 3 }));
  assert_eq!(err.to_string(), "bad x value 3 >= 3");
  assert_eq!(canvas.get(0, 9).unwrap_err().to_string(), "bad y value 9 >= 4");
}

#[test]
fn test_line_across_whole_canvas() {
  let mut canvas = Canvas::new(30, 7, Color::BLACK).unwrap();
  canvas.line(29, 6, 0, 0, Color::WHITE).unwrap();
  assert_ne!(canvas.get(0, 0).unwrap(), Color::BLACK);
  assert_ne!(canvas.get(29, 6).unwrap(), Color::BLACK);
  // nothing lands far from the ideal line
  for (x, y, c) in canvas.each() {
    if c != Color::BLACK {
      let ideal = x as f64 * 6.0 / 29.0;
      assert!((y as f64 - ideal).abs() < 2.0, "({x}, {y})");
    }
  }
}
