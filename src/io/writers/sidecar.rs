use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::CompositeParams;
use crate::core::processing::crop::CropBox;
use crate::core::processing::pipeline::PreviewImage;
use crate::error::Result;
use crate::types::{FadeBand, OutputFormat, TargetSize};

/// Summary of one composition run, written next to the output on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewReport {
    pub left: PathBuf,
    pub right: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub size: TargetSize,
    pub fade: FadeBand,
    /// `[start, end)` columns of the ramp after truncation
    pub fade_columns: (usize, usize),
    pub left_source: (u32, u32),
    pub right_source: (u32, u32),
    pub left_crop: CropBox,
    pub right_crop: CropBox,
}

impl PreviewReport {
    pub fn new(
        left: &Path,
        right: &Path,
        output: &Path,
        format: OutputFormat,
        params: &CompositeParams,
        preview: &PreviewImage,
    ) -> Self {
        Self {
            left: left.to_path_buf(),
            right: right.to_path_buf(),
            output: output.to_path_buf(),
            format,
            size: params.size,
            fade: params.fade,
            fade_columns: params.fade.columns(params.size.width),
            left_source: preview.left_source,
            right_source: preview.right_source,
            left_crop: preview.left_crop,
            right_crop: preview.right_crop,
        }
    }
}

/// `preview.png` -> `preview.json`; never the output path itself.
pub fn sidecar_path(output: &Path) -> PathBuf {
    let candidate = output.with_extension("json");
    if candidate == output {
        output.with_extension("sidecar.json")
    } else {
        candidate
    }
}

pub fn write_sidecar(output: &Path, report: &PreviewReport) -> Result<PathBuf> {
    let path = sidecar_path(output);
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json_string)?;
    info!("Created preview sidecar: {:?}", path);
    Ok(path)
}
