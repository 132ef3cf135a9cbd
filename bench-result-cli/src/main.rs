//! Bench Result Reader CLI Application
//!
//! Reads the binary result file written by the benchmark server and prints every
//! cached entry as a table of measurements. Decoding is done by the
//! bench-result-decoder library; this crate adds:
//! - Configuration (TOML file + command-line overrides)
//! - Logging setup
//! - Report generation (TXT/JSON)

use anyhow::{Context, Result};
use bench_result_decoder::{Decoder, TrailingGroupPolicy};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// Bench Result Reader - Print benchmark result caches
#[derive(Parser, Debug)]
#[command(name = "bench-result-cli")]
#[command(about = "Print the cached entries of a benchmark result file", long_about = None)]
#[command(version)]
struct Args {
    /// Result file to read (default: result.bin in the current directory)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Fail if the file ends inside an unterminated group
    #[arg(long)]
    reject_unterminated: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Bench Result Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using decoder library v{}", bench_result_decoder::VERSION);

    let config = resolve_config(&args)?;
    run(&config)
}

/// Load the config file (if any) and apply command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input.file = input.clone();
    }
    if let Some(output) = &args.output {
        config.output.output_file = Some(output.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.reject_unterminated {
        config.decoder.trailing_group = TrailingGroupPolicy::Reject;
    }

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Decode the input file and write the report
fn run(config: &AppConfig) -> Result<()> {
    let decoder = Decoder::with_config(config.decoder.clone());
    let input = &config.input.file;

    let result_set = decoder
        .decode_file(input)
        .with_context(|| format!("Failed to decode result file: {:?}", input))?;

    if result_set.is_empty() {
        log::info!("No cached entries in {:?}", input);
    }

    match &config.output.output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            let mut writer = BufWriter::new(file);
            report::write_report(&result_set, config.output.format, &mut writer)?;
            writer.flush()?;
            log::info!("Report written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            report::write_report(&result_set, config.output.format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
