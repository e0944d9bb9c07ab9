use image::RgbaImage;
use ndarray::Array2;
use tracing::info;

use crate::core::params::CompositeParams;
use crate::core::processing::composite::composite;
use crate::core::processing::crop::{CropBox, crop_to_fit};
use crate::core::processing::mask::gradient_mask;
use crate::error::Result;

/// Result of in-memory composition
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub image: RgbaImage,
    pub mask: Array2<u8>,
    pub left_source: (u32, u32),
    pub right_source: (u32, u32),
    pub left_crop: CropBox,
    pub right_crop: CropBox,
}

/// Crop and resize both sources to `params.size`, then blend them through
/// the gradient mask described by `params.fade`.
pub fn compose_preview(
    left: &RgbaImage,
    right: &RgbaImage,
    params: &CompositeParams,
) -> Result<PreviewImage> {
    params.validate()?;
    let size = params.size;

    info!("Cropping left {}x{} to {}", left.width(), left.height(), size);
    let (left_fit, left_crop) = crop_to_fit(left, size)?;
    info!("Cropping right {}x{} to {}", right.width(), right.height(), size);
    let (right_fit, right_crop) = crop_to_fit(right, size)?;

    let mask = gradient_mask(size, params.fade);
    info!("Compositing through gradient mask");
    let image = composite(&left_fit, &right_fit, &mask)?;

    Ok(PreviewImage {
        image,
        mask,
        left_source: left.dimensions(),
        right_source: right.dimensions(),
        left_crop,
        right_crop,
    })
}
