use clap::Parser;
use std::path::PathBuf;

use splitpreview::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "splitpreview", version, about = "Blend two images into a social preview")]
pub struct CliArgs {
    /// Image shown on the left side
    #[arg(long, default_value = "left.png")]
    pub left: PathBuf,

    /// Image shown on the right side
    #[arg(long, default_value = "right.png")]
    pub right: PathBuf,

    /// Output filename
    #[arg(short, long, default_value = "preview.png")]
    pub output: PathBuf,

    /// Output format (png or jpeg); inferred from the output extension if omitted
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output size as WIDTHxHEIGHT (default 1200x630)
    #[arg(long)]
    pub size: Option<String>,

    /// Fraction of the width where the fade begins (default 0.4)
    #[arg(long)]
    pub fade_start: Option<f64>,

    /// Fraction of the width where the fade ends (default 0.6)
    #[arg(long)]
    pub fade_end: Option<f64>,

    /// JSON file with composition parameters; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write a JSON sidecar describing the run next to the output
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
