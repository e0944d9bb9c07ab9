use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{FadeBand, OutputFormat, TargetSize};

/// Composition parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeParams {
    pub size: TargetSize,
    pub fade: FadeBand,
    /// None means infer from the output extension
    pub format: Option<OutputFormat>,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            size: TargetSize::default(),
            fade: FadeBand::default(),
            format: None,
        }
    }
}

impl CompositeParams {
    /// Load parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: CompositeParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(Error::ZeroSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if !self.fade.is_valid() {
            return Err(Error::InvalidFade {
                start: self.fade.start,
                end: self.fade.end,
            });
        }
        Ok(())
    }

    /// Explicit format if set, else the one implied by `output`, else PNG.
    pub fn resolve_format(&self, output: &Path) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(output))
            .unwrap_or(OutputFormat::Png)
    }
}
