use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, warn};

use crate::core::processing::crop::CropBox;
use crate::error::{Error, Result};
use crate::types::TargetSize;

/// Resample the `crop` region of an interleaved RGBA8 buffer to
/// `target_cols x target_rows` with Lanczos3. Alpha is premultiplied
/// during convolution so transparent edges do not bleed colour.
pub fn resize_rgba_region(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    crop: CropBox,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .crop(
            crop.left as f64,
            crop.top as f64,
            crop.width as f64,
            crop.height as f64,
        );
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

/// Crop `img` to `crop` and resample the region to exactly `target`.
pub fn resize_rgba_image(img: &RgbaImage, crop: CropBox, target: TargetSize) -> Result<RgbaImage> {
    let (cols, rows) = img.dimensions();

    if crop.width < target.width || crop.height < target.height {
        warn!(
            "Upscaling crop {}x{} to {}; expect softness",
            crop.width, crop.height, target
        );
    }

    // Nothing to crop and already at size: skip resampling
    if crop.is_full(cols, rows) && cols == target.width && rows == target.height {
        debug!("Source already {}, skipping resize", target);
        return Ok(img.clone());
    }

    let resized = resize_rgba_region(
        img.as_raw(),
        cols,
        rows,
        crop,
        target.width,
        target.height,
    )?;

    RgbaImage::from_raw(target.width, target.height, resized).ok_or_else(|| {
        Error::Processing(format!("Resized buffer does not match {}", target))
    })
}
