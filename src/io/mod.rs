//! I/O layer: decode source images to RGBA and `writers` for the encoded
//! composite and its optional JSON sidecar.
pub mod reader;
pub use reader::load_rgba;

pub mod writers;
