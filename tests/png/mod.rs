use png_canvas::{
  png::{decode, decode_metadata, encode, ChunkIter, FilterType, Metadata, PngEncoder},
  Canvas, Color, PngError, UnsupportedFormat,
};
use walkdir::WalkDir;

fn fixture(name: &str) -> Vec<u8> {
  std::fs::read(format!("tests/png_files/{name}")).unwrap()
}

#[test]
fn test_ChunkIter_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if entry.file_type().is_dir() {
      continue;
    }
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    if let Ok(iter) = ChunkIter::from_png_bytes(&v) {
      for _ in iter {
        //
      }
    }
    // Hostile files should fail to decode, but never panic.
    let _ = decode(&v);
    let _ = decode_metadata(&v);
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in ChunkIter::from_chunk_bytes(&v) {
      //
    }
    let _ = decode(&v);
  }
}

#[test]
fn test_random_bytes_after_signature() {
  for _ in 0..10 {
    let mut v = png_canvas::png::SIGNATURE.to_vec();
    v.extend(super::rand_bytes(256));
    assert!(decode(&v).is_err());
  }
}

#[test]
fn test_white_5x10() {
  let canvas = decode(&fixture("white_5x10.png")).unwrap();
  assert_eq!(canvas, Canvas::new(5, 10, Color::WHITE).unwrap());
}

#[test]
fn test_rgb_3x2() {
  let canvas = decode(&fixture("rgb_3x2.png")).unwrap();
  assert_eq!((canvas.width(), canvas.height()), (3, 2));
  assert_eq!(canvas.get(0, 1).unwrap(), Color::RED);
  assert_eq!(canvas.get(1, 1).unwrap(), Color::new(0, 255, 0, 255));
  assert_eq!(canvas.get(2, 1).unwrap(), Color::new(0, 0, 255, 255));
  assert_eq!(canvas.get(0, 0).unwrap(), Color::WHITE);
  assert_eq!(canvas.get(1, 0).unwrap(), Color::BLACK);
  assert_eq!(canvas.get(2, 0).unwrap(), Color::new(128, 128, 128, 255));
}

#[test]
fn test_ancillary_2x2() {
  let canvas = decode(&fixture("ancillary_2x2.png")).unwrap();
  assert_eq!(canvas.get(0, 1).unwrap(), Color::new(10, 20, 30, 40));
  assert_eq!(canvas.get(1, 1).unwrap(), Color::new(50, 60, 70, 80));
  assert_eq!(canvas.get(0, 0).unwrap(), Color::new(11, 21, 31, 41));
  assert_eq!(canvas.get(1, 0).unwrap(), Color::new(52, 62, 72, 82));
}

#[test]
fn test_hostile_fixtures() {
  assert!(matches!(
    decode(&fixture("depth16_1x1.png")),
    Err(PngError::Unsupported(UnsupportedFormat::BitDepth(16)))
  ));
  assert_eq!(
    decode_metadata(&fixture("depth16_1x1.png")).unwrap(),
    Metadata { width: 1, height: 1, bit_depth: 16 }
  );
  assert!(matches!(
    decode(&fixture("interlaced_1x1.png")),
    Err(PngError::Unsupported(UnsupportedFormat::InterlaceMethod(1)))
  ));
  assert!(matches!(decode(&fixture("bad_crc_1x1.png")), Err(PngError::Checksum { .. })));
  assert!(matches!(decode(&fixture("truncated_1x1.png")), Err(PngError::Truncated { .. })));
}

#[test]
fn test_random_canvas_round_trip() {
  let (width, height) = (13, 9);
  let bytes = super::rand_bytes(width * height * 4);
  let pixels: Vec<Color> =
    bytes.chunks_exact(4).map(|c| Color::new(c[0], c[1], c[2], c[3])).collect();
  let canvas = Canvas::from_top_down_pixels(width as u32, height as u32, pixels).unwrap();
  for filter in FilterType::ALL {
    for compression_level in [0, 1, 6, 9] {
      let encoder = PngEncoder { filter, compression_level };
      let round_trip = decode(&encoder.encode(&canvas).unwrap()).unwrap();
      assert_eq!(round_trip, canvas, "{encoder:?}");
    }
  }
}

#[test]
fn test_encode_is_deterministic() {
  let mut canvas = Canvas::new(20, 20, Color::BACKGROUND).unwrap();
  canvas.line(0, 0, 19, 13, Color::BUBBLEGUM).unwrap();
  assert_eq!(encode(&canvas).unwrap(), encode(&canvas).unwrap());
}

#[test]
#[cfg(feature = "fs")]
fn test_save_then_load() {
  use png_canvas::png::{load, load_metadata, save};

  let mut canvas = Canvas::new(8, 6, Color::BLACK).unwrap();
  canvas.line(0, 5, 7, 0, Color::YELLOW).unwrap();
  let path = std::env::temp_dir().join(format!("png_canvas_{}.png", std::process::id()));
  save(&canvas, &path).unwrap();
  assert_eq!(load_metadata(&path).unwrap(), Metadata { width: 8, height: 6, bit_depth: 8 });
  assert_eq!(load(&path).unwrap(), canvas);
  std::fs::remove_file(&path).unwrap();

  assert!(matches!(load(&path), Err(PngError::Io(_))));
}
