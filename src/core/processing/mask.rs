use ndarray::{Array1, Array2};
use tracing::debug;

use crate::types::{FadeBand, TargetSize};

/// `n` evenly spaced bytes from 0 to 255 inclusive, truncated toward zero.
/// The last sample is pinned to 255; a single sample is 0.
pub fn linspace_u8(n: usize) -> Array1<u8> {
    if n == 0 {
        return Array1::zeros(0);
    }
    if n == 1 {
        return Array1::zeros(1);
    }
    let step = 255.0 / (n - 1) as f64;
    let mut ramp = Array1::from_shape_fn(n, |i| (i as f64 * step) as u8);
    ramp[n - 1] = 255;
    ramp
}

/// One row of the blend mask: 0 before the fade band, a linear 0..=255 ramp
/// across it, 255 after it.
pub fn gradient_row(width: u32, fade: FadeBand) -> Array1<u8> {
    let (start, end) = fade.columns(width);
    let width = width as usize;
    let start = start.min(width);
    let end = end.clamp(start, width);
    let mut row = Array1::<u8>::zeros(width);

    row.slice_mut(ndarray::s![start..end]).assign(&linspace_u8(end - start));
    row.slice_mut(ndarray::s![end..]).fill(255);
    row
}

/// Full `(height, width)` mask; every row is the same gradient row.
pub fn gradient_mask(size: TargetSize, fade: FadeBand) -> Array2<u8> {
    let row = gradient_row(size.width, fade);
    let (start, end) = fade.columns(size.width);
    debug!(
        "Gradient mask {}: fade columns {}..{} ({} px)",
        size,
        start,
        end,
        end.saturating_sub(start)
    );
    Array2::from_shape_fn((size.height as usize, size.width as usize), |(_, x)| row[x])
}
