// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use remates::config::DEFAULT_CONFIG_PATH;
use remates::utils::logging::{format_error, format_success, init_logger};
use remates::{Config, PriceStrategy, pipeline};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "remates")]
#[command(version = "0.1.0")]
#[command(about = "Extract judicial auction notices (remates) from legal-notice HTML", long_about = None)]
struct Cli {
    /// Legal-notice HTML document
    #[arg(value_name = "INPUT.html")]
    input: Option<PathBuf>,

    /// Output file; the extension picks the format (.xlsx or .json)
    #[arg(value_name = "OUTPUT.xlsx")]
    output: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base price extraction strategy
    #[arg(short, long, value_enum)]
    strategy: Option<PriceStrategy>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let Some(input) = cli.input.clone() else {
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    };

    init_logger(cli.color, cli.verbose);

    if let Err(e) = run(&cli, &input) {
        eprintln!("{}", format_error(&format!("{:#}", e)));
        process::exit(1);
    }
}

fn run(cli: &Cli, input: &Path) -> Result<()> {
    let start_time = Instant::now();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(strategy) = cli.strategy {
        config = config.with_price_strategy(strategy);
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.export.default_output.clone());

    let summary = pipeline::run(&config, input, &output)
        .with_context(|| format!("Failed to extract remates from {}", input.display()))?;

    info!(
        "Completed in {:.2}s ({:.0} paragraphs/s)",
        start_time.elapsed().as_secs_f64(),
        summary.stats.paragraphs_per_second()
    );

    println!(
        "{}",
        format_success(&format!(
            "Saved {} remates to {}",
            summary.records_written,
            output.display()
        ))
    );

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        info!("Loading configuration from: {}", path.display());
        return Config::load(Some(path)).context("Failed to load configuration");
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        info!("Loading configuration from: {}", DEFAULT_CONFIG_PATH);
        Config::load(None).context("Failed to load configuration")
    } else {
        warn!(
            "Config file {} not found, using built-in defaults",
            DEFAULT_CONFIG_PATH
        );
        Ok(Config::default_config())
    }
}
