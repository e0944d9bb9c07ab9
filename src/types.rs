//! Shared value types: `TargetSize`, `FadeBand`, `OutputFormat`.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output dimensions in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Default for TargetSize {
    /// Common social-preview size.
    fn default() -> Self {
        Self::new(1200, 630)
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Horizontal band, as fractions of the width, over which the mask ramps
/// from 0 (left image) to 255 (right image).
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FadeBand {
    pub start: f64,
    pub end: f64,
}

impl FadeBand {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.start)
            && (0.0..=1.0).contains(&self.end)
            && self.start <= self.end
    }

    /// Column range `[start, end)` of the ramp for a given width. Both ends
    /// are truncated toward zero, never rounded.
    pub fn columns(&self, width: u32) -> (usize, usize) {
        let start = (width as f64 * self.start) as usize;
        let end = (width as f64 * self.end) as usize;
        (start, end)
    }
}

impl Default for FadeBand {
    fn default() -> Self {
        Self::new(0.4, 0.6)
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg, // Lossy, drops alpha
}

impl OutputFormat {
    /// Guess the format from a file extension; `None` if unrecognised.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}
