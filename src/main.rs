use std::path::PathBuf;

use clap::Parser;
use mandelbrot_explorer::{ExplorerConfig, MandelbrotExplorer, write_ppm};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Render one Mandelbrot frame to a PPM file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML config file; built-in defaults are used when omitted.
    config: Option<PathBuf>,

    /// Overrides `output_path` from the config.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    debug: bool,
}

fn init_tracing(args: &Args) {
    let log_level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(args: Args) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };
    let output_path = args.output.unwrap_or_else(|| config.output_path.clone());

    let explorer =
        MandelbrotExplorer::with_settings(config.pixel_rect()?, config.render_settings())?;

    if let Some(stats) = explorer.cache_stats() {
        info!(hits = stats.hits, misses = stats.misses, "cache stats");
    }

    write_ppm(explorer.image(), &output_path)?;

    Ok(output_path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args);

    let output_path = run(args)?;
    eprintln!("wrote {}", output_path.display());

    Ok(())
}
