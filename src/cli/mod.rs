//! Command Line Interface (CLI) layer for splitpreview.
//!
//! Defines argument parsing (`args`), CLI error types (`errors`), and the
//! orchestration logic (`runner`) that merges flags, config file and
//! defaults before calling `splitpreview::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
