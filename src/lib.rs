#![doc = r#"
splitpreview — compose a social-media preview image from two sources.

Each source is center-cropped to the target aspect ratio, resampled with
Lanczos3 to the target size (1200×630 by default), and the two results are
blended through a horizontal gradient mask: the left image fills the first
40% of the width, the right image the last 40%, with a linear fade between.

Quick start: compose to a file
------------------------------
```rust,no_run
use std::path::Path;
use splitpreview::{compose_preview_to_path, CompositeParams};

fn main() -> splitpreview::Result<()> {
    let report = compose_preview_to_path(
        Path::new("left.png"),
        Path::new("right.png"),
        Path::new("preview.png"),
        &CompositeParams::default(),
    )?;
    println!("fade columns: {:?}", report.fade_columns);
    Ok(())
}
```

Compose in memory
-----------------
```rust
use image::{Rgba, RgbaImage};
use splitpreview::{compose_preview, CompositeParams, FadeBand, TargetSize};

fn main() -> splitpreview::Result<()> {
    let left = RgbaImage::from_pixel(800, 600, Rgba([255, 0, 0, 255]));
    let right = RgbaImage::from_pixel(800, 600, Rgba([0, 0, 255, 255]));
    let params = CompositeParams {
        size: TargetSize::new(600, 315),
        fade: FadeBand::new(0.3, 0.7),
        format: None,
    };
    let preview = compose_preview(&left, &right, &params)?;
    assert_eq!(preview.image.dimensions(), (600, 315));
    Ok(())
}
```

Error handling
--------------
All public functions return `splitpreview::Result<T>`; match on
`splitpreview::Error` to tell decode failures from bad parameters.

Useful modules
--------------
- [`api`] — file-to-file and file-to-memory entry points.
- [`core`] — crop geometry, resize, gradient mask, composite.
- [`io`] — RGBA loading, PNG/JPEG writers, JSON sidecar.
- [`types`] — `TargetSize`, `FadeBand`, `OutputFormat`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::CompositeParams;
pub use crate::core::processing::crop::{CropBox, calculate_crop_box, crop_to_fit};
pub use crate::core::processing::composite::composite;
pub use crate::core::processing::mask::{gradient_mask, gradient_row};
pub use crate::core::processing::pipeline::{PreviewImage, compose_preview};
pub use error::{Error, Result};
pub use types::{FadeBand, OutputFormat, TargetSize};

pub use io::load_rgba;
pub use io::writers::{PreviewReport, write_image, write_sidecar};

pub use api::{compose_preview_to_buffer, compose_preview_to_path, compose_preview_with_sidecar};
