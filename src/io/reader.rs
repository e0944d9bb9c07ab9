use std::path::Path;

use image::{ImageError, ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

fn decode(path: &Path) -> std::result::Result<image::DynamicImage, ImageError> {
    let reader = ImageReader::open(path)
        .map_err(ImageError::IoError)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?;
    reader.decode()
}

/// Decode `path` and convert to RGBA8. The format is sniffed from the file's
/// leading bytes; the extension is only a fallback for unrecognised content.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = decode(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {:?}: {}x{} {:?}", path, img.width(), img.height(), img.color());
    Ok(img.to_rgba8())
}
