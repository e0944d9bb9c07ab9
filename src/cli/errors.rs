use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be WIDTHxHEIGHT, e.g. 1200x630")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: String },

    #[error(transparent)]
    Preview(#[from] splitpreview::Error),
}
