#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_debug_implementations)]

//! An RGBA drawing canvas, with a PNG encoder and decoder for it.
//!
//! * [`Canvas`] is a grid of [`Color`] values with the origin in the bottom
//!   left. It supports blending single points, antialiased lines, and cutting
//!   out or pasting in whole regions.
//! * The [`png`] module turns a canvas into PNG bytes and back again. Only
//!   8-bit RGB/RGBA images are handled, which is what the encoder writes.
//!
//! ```
//! use png_canvas::{png, Canvas, Color};
//!
//! let mut canvas = Canvas::new(16, 16, Color::WHITE)?;
//! canvas.line(0, 0, 15, 9, Color::BLUE)?;
//! let bytes = png::encode(&canvas)?;
//! assert_eq!(png::decode(&bytes)?, canvas);
//! # Ok::<(), png_canvas::PngError>(())
//! ```
//!
//! ## Logging
//!
//! Chunk level details are emitted through the `log` crate at `trace` level,
//! and per-image summaries at `debug` level. Nothing is logged above `debug`:
//! every problem is reported as a [`PngError`] instead.

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod parser_helpers;

pub mod crc32;

mod color;
pub use color::*;

mod canvas;
pub use canvas::{Canvas, CompositeMode};

pub mod png;
