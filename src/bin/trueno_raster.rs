//! trueno-raster - run a drawing command script.
//!
//! Run: `trueno-raster input.txt out/`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use trueno_raster::config::Config;
use trueno_raster::script::Interpreter;

/// trueno-raster: render drawing command scripts to PNG
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize line, polygon, ellipse and curve scripts to PNG", long_about = None)]
struct Cli {
    /// Command script to run
    input: PathBuf,

    /// Directory for saved canvases (overrides the config file)
    output_dir: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log to stderr at the level chosen by `-v`; `RUST_LOG` refines it.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_or_default(
            dirs::config_dir()
                .map(|p| p.join("trueno-raster/config.yaml"))
                .unwrap_or_default(),
        ),
    };
    if let Some(dir) = &cli.output_dir {
        config.output.directory = Some(dir.clone());
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let output_dir = config.output_dir();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let mut interp = Interpreter::from_config(&config)?;
    let executed = interp
        .run_file(&cli.input)
        .with_context(|| format!("failed to run {}", cli.input.display()))?;

    log::info!(
        "{executed} commands executed, {} canvases saved",
        interp.saved().len()
    );
    Ok(())
}
