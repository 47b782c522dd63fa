use anyhow::{anyhow, bail};
use asset_manifest_core::{logging, AssetManifest, Config, LogLevel, ScanReport};
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asset-manifest")]
#[command(about = "Group icon files into assets and write an assets.json manifest")]
#[command(version)]
struct Cli {
    /// Directory to scan for images
    directory: PathBuf,

    /// Where to write the manifest (defaults to <DIRECTORY>/assets.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to a rotating file in this directory instead of the console
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Set up configuration
    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };

    // Override config with command line arguments
    if let Some(output) = cli.output {
        config.output_path = Some(output);
    }
    config.log_level = match cli.verbose {
        0 => config.log_level,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    config.validate()?;

    // Initialize logger
    let level: log::LevelFilter = config.log_level.into();
    match &cli.log_dir {
        Some(log_dir) => logging::init_logger(log_dir, level)
            .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?,
        None => env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init(),
    }

    if !cli.directory.is_dir() {
        bail!("The provided directory does not exist.");
    }

    let manifest = AssetManifest::new(config);
    let report = manifest.run(&cli.directory)?;
    info!("Scan complete");

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &ScanReport) {
    let stats = &report.outcome.stats;

    println!("Manifest generated at: {}", report.manifest_path.display());
    println!("Summary:");
    println!("Total images found: {}", stats.total_images);
    println!("Total SVG files: {}", stats.svg_files);
    println!("Total PNG files: {}", stats.png_files);
    println!("Total unique file types: {}", stats.unique_file_types());
    println!("Elapsed time: {} seconds", stats.elapsed.as_secs_f64());
}
