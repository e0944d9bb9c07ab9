pub mod raster;
pub mod sidecar;

pub use raster::{encode_image, write_image};
pub use sidecar::{PreviewReport, sidecar_path, write_sidecar};
