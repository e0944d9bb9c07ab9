//! Crate-level error type and `Result` alias.
//! Wraps I/O, decode/encode and resampler failures, and provides semantic
//! variants for invalid geometry and configuration.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load image {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Target size must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("Source image is empty: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid fade band: start={start}, end={end} (need 0 <= start <= end <= 1)")]
    InvalidFade { start: f64, end: f64 },

    #[error("Dimension mismatch: expected {expected:?}, got {actual:?} for {what}")]
    DimensionMismatch {
        what: &'static str,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}

impl From<fast_image_resize::ResizeError> for Error {
    fn from(e: fast_image_resize::ResizeError) -> Self {
        Error::resize(e)
    }
}

impl From<fast_image_resize::ImageBufferError> for Error {
    fn from(e: fast_image_resize::ImageBufferError) -> Self {
        Error::resize(e)
    }
}
