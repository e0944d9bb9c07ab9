//! Core building blocks: crop-to-fit geometry, Lanczos resize, gradient mask,
//! masked composite, and the in-memory pipeline tying them together. These
//! are primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
