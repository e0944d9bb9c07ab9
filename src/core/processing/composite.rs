use image::RgbaImage;
use ndarray::{Array2, Array3, ArrayView3, Axis, Zip};

use crate::error::{Error, Result};

/// Rounded division by 255 for products of two bytes.
#[inline]
fn div255(v: u32) -> u8 {
    let tmp = v + 128;
    (((tmp >> 8) + tmp) >> 8) as u8
}

/// Blend one channel: weight `m` of `right`, `255 - m` of `left`.
#[inline]
pub fn blend_channel(left: u8, right: u8, m: u8) -> u8 {
    div255(left as u32 * (255 - m as u32) + right as u32 * m as u32)
}

fn as_view(img: &RgbaImage) -> Result<ArrayView3<'_, u8>> {
    let (w, h) = img.dimensions();
    ArrayView3::from_shape((h as usize, w as usize, 4), img.as_raw().as_slice())
        .map_err(|e| Error::Processing(format!("RGBA view: {}", e)))
}

/// Composite `right` over `left` through `mask` (shape `(height, width)`).
/// Mask 0 keeps `left`, 255 keeps `right`; all four channels are interpolated.
pub fn composite(left: &RgbaImage, right: &RgbaImage, mask: &Array2<u8>) -> Result<RgbaImage> {
    let (w, h) = left.dimensions();
    if right.dimensions() != (w, h) {
        return Err(Error::DimensionMismatch {
            what: "right image",
            expected: (w, h),
            actual: right.dimensions(),
        });
    }
    let (mask_rows, mask_cols) = mask.dim();
    if (mask_cols, mask_rows) != (w as usize, h as usize) {
        return Err(Error::DimensionMismatch {
            what: "mask",
            expected: (w, h),
            actual: (mask_cols as u32, mask_rows as u32),
        });
    }

    let left_view = as_view(left)?;
    let right_view = as_view(right)?;
    let mut out = Array3::<u8>::zeros((h as usize, w as usize, 4));

    Zip::from(out.lanes_mut(Axis(2)))
        .and(left_view.lanes(Axis(2)))
        .and(right_view.lanes(Axis(2)))
        .and(mask)
        .for_each(|mut px, l, r, &m| match m {
            0 => px.assign(&l),
            255 => px.assign(&r),
            _ => {
                for c in 0..4 {
                    px[c] = blend_channel(l[c], r[c], m);
                }
            }
        });

    RgbaImage::from_raw(w, h, out.into_raw_vec())
        .ok_or_else(|| Error::Processing("Composite buffer size mismatch".to_string()))
}
