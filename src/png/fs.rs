//! Saving and loading canvases by file path.

use std::path::Path;

use super::*;

/// Encodes the canvas and writes it to `path`, replacing any existing file.
///
/// ## Failure
/// * Encoding fails, or the file can't be written.
#[cfg_attr(docs_rs, doc(cfg(feature = "fs")))]
pub fn save(canvas: &Canvas, path: impl AsRef<Path>) -> PngResult<()> {
  let path = path.as_ref();
  let bytes = encode(canvas)?;
  debug!("saving {} bytes to {}", bytes.len(), path.display());
  std::fs::write(path, bytes)?;
  Ok(())
}

/// Reads and decodes the PNG file at `path`.
///
/// ## Failure
/// * The file can't be read, or [`decode`] fails.
#[cfg_attr(docs_rs, doc(cfg(feature = "fs")))]
pub fn load(path: impl AsRef<Path>) -> PngResult<Canvas> {
  let path = path.as_ref();
  debug!("loading {}", path.display());
  decode(&std::fs::read(path)?)
}

/// Reads the file at `path` and gives its [`Metadata`].
///
/// ## Failure
/// * The file can't be read, or [`decode_metadata`] fails.
#[cfg_attr(docs_rs, doc(cfg(feature = "fs")))]
pub fn load_metadata(path: impl AsRef<Path>) -> PngResult<Metadata> {
  decode_metadata(&std::fs::read(path)?)
}
