use tracing::info;
use tracing_subscriber::EnvFilter;

use splitpreview::{CompositeParams, TargetSize};

use super::args::CliArgs;
use super::errors::AppError;

/// Parse `WIDTHxHEIGHT` (also accepts `X` and `×`).
pub fn parse_size(size: &str) -> Result<TargetSize, AppError> {
    let invalid = || AppError::InvalidSize {
        size: size.to_string(),
    };
    let (w, h) = size
        .trim()
        .split_once(['x', 'X', '×'])
        .ok_or_else(invalid)?;
    let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = h.trim().parse::<u32>().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(AppError::ZeroSize {
            size: size.to_string(),
        });
    }
    Ok(TargetSize::new(width, height))
}

/// Defaults, then the config file, then explicit flags.
pub fn resolve_params(args: &CliArgs) -> Result<CompositeParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading parameters from {:?}", path);
            CompositeParams::from_json_file(path)?
        }
        None => CompositeParams::default(),
    };

    if let Some(size) = &args.size {
        params.size = parse_size(size)?;
    }
    if let Some(start) = args.fade_start {
        params.fade.start = start;
    }
    if let Some(end) = args.fade_end {
        params.fade.end = end;
    }
    if let Some(format) = args.format {
        params.format = Some(format);
    }

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = resolve_params(&args)?;
    info!(
        "Composing {:?} + {:?} -> {:?} at {} (fade {}..{})",
        args.left, args.right, args.output, params.size, params.fade.start, params.fade.end
    );

    let report = if args.sidecar {
        splitpreview::compose_preview_with_sidecar(&args.left, &args.right, &args.output, &params)
    } else {
        splitpreview::compose_preview_to_path(&args.left, &args.right, &args.output, &params)
    }
    .map_err(AppError::from)?;

    info!(
        "Successfully composed: {:?} ({})",
        report.output, report.format
    );
    Ok(())
}
