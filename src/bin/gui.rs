use std::path::PathBuf;

use clap::Parser;
use mandelbrot_explorer::ExplorerConfig;
use mandelbrot_explorer::input::gui::run_gui;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Explore the Mandelbrot set in a window.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML config file; built-in defaults are used when omitted.
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match &args.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };

    run_gui(&config)?;

    Ok(())
}
