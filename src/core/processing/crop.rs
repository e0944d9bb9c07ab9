use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::processing::resize::resize_rgba_image;
use crate::error::{Error, Result};
use crate::types::TargetSize;

/// Region of a source image, in source pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropBox {
    pub fn is_full(&self, cols: u32, rows: u32) -> bool {
        self.left == 0 && self.top == 0 && self.width == cols && self.height == rows
    }
}

/// Centered crop of a `cols x rows` image matching the aspect ratio of `target`.
///
/// A relatively wider source loses columns, anything else (ties included)
/// loses rows. Extents are truncated toward zero and offsets use integer
/// division, so the box is reproducible pixel for pixel.
pub fn calculate_crop_box(cols: u32, rows: u32, target: TargetSize) -> CropBox {
    let img_ratio = cols as f64 / rows as f64;
    let target_ratio = target.ratio();

    if img_ratio > target_ratio {
        let new_cols = ((rows as f64 * target_ratio) as u32).max(1).min(cols);
        let left = (cols - new_cols) / 2;
        CropBox {
            left,
            top: 0,
            width: new_cols,
            height: rows,
        }
    } else {
        let new_rows = ((cols as f64 / target_ratio) as u32).max(1).min(rows);
        let top = (rows - new_rows) / 2;
        CropBox {
            left: 0,
            top,
            width: cols,
            height: new_rows,
        }
    }
}

/// Center-crop `img` to the aspect ratio of `target`, then resample to exactly `target`.
pub fn crop_to_fit(img: &RgbaImage, target: TargetSize) -> Result<(RgbaImage, CropBox)> {
    if target.width == 0 || target.height == 0 {
        return Err(Error::ZeroSize {
            width: target.width,
            height: target.height,
        });
    }
    let (cols, rows) = img.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::EmptyImage {
            width: cols,
            height: rows,
        });
    }

    let crop = calculate_crop_box(cols, rows, target);
    debug!(
        "Crop {}x{} -> box left={} top={} {}x{}",
        cols, rows, crop.left, crop.top, crop.width, crop.height
    );

    let resized = resize_rgba_image(img, crop, target)?;
    Ok((resized, crop))
}
