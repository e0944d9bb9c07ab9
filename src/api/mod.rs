//! High-level library API: compose a preview from two files into memory or
//! onto disk. Prefer these entrypoints over the low-level processing modules.
use std::path::Path;

use tracing::info;

use crate::core::params::CompositeParams;
use crate::core::processing::pipeline::{PreviewImage, compose_preview};
use crate::error::Result;
use crate::io::load_rgba;
use crate::io::writers::{PreviewReport, write_image, write_sidecar};

/// Load both sources and compose in memory (no output written)
pub fn compose_preview_to_buffer(
    left: &Path,
    right: &Path,
    params: &CompositeParams,
) -> Result<PreviewImage> {
    params.validate()?;
    let left_img = load_rgba(left)?;
    let right_img = load_rgba(right)?;
    compose_preview(&left_img, &right_img, params)
}

/// Load, compose and write the encoded preview to `output`.
/// The format comes from `params.format`, else from the output extension.
pub fn compose_preview_to_path(
    left: &Path,
    right: &Path,
    output: &Path,
    params: &CompositeParams,
) -> Result<PreviewReport> {
    let preview = compose_preview_to_buffer(left, right, params)?;
    let format = params.resolve_format(output);
    write_image(output, &preview.image, format)?;
    Ok(PreviewReport::new(left, right, output, format, params, &preview))
}

/// Same as [`compose_preview_to_path`], plus a JSON sidecar next to the output.
pub fn compose_preview_with_sidecar(
    left: &Path,
    right: &Path,
    output: &Path,
    params: &CompositeParams,
) -> Result<PreviewReport> {
    let report = compose_preview_to_path(left, right, output, params)?;
    let path = write_sidecar(output, &report)?;
    info!("Sidecar: {:?}", path);
    Ok(report)
}
