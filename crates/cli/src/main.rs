//! Lote CLI - Lot metrics, cost breakdowns and dashboard summaries.
//!
//! # Usage
//!
//! ```bash
//! # Derived figures for every lot in an export
//! lote-cli metrics lots.json
//!
//! # Dashboard summary, margin at a custom client price
//! lote-cli summary lots.json --client-price 400
//!
//! # Unit-cost table for one lot, as text
//! lote-cli breakdown lots.json --lot-number L-17
//!
//! # YAML instead of JSON
//! lote-cli --format yaml summary lots.json
//! ```
//!
//! # Commands
//!
//! - `metrics` - Per-lot yields, packaging output and costs
//! - `summary` - Status counts, supplier shares, average cost and margin
//! - `breakdown` - Fillet/packaging/service cost table per lot

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "lote-cli")]
#[command(author, version, about = "Lot cost and yield tools")]
struct Cli {
    /// Output format (overrides `LOTE_OUTPUT_FORMAT`)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print derived figures for each lot
    Metrics {
        /// JSON file with one lot or an array of lots
        file: PathBuf,
    },
    /// Print dashboard aggregates for the lots in a file
    Summary {
        /// JSON file with one lot or an array of lots
        file: PathBuf,

        /// Client price per box (overrides `LOTE_CLIENT_PRICE_PER_BOX`)
        #[arg(long)]
        client_price: Option<Decimal>,
    },
    /// Print the unit-cost table for each lot
    Breakdown {
        /// JSON file with one lot or an array of lots
        file: PathBuf,

        /// Only show the lot with this number
        #[arg(short, long)]
        lot_number: Option<String>,
    },
}

fn main() {
    // Logs go to stderr so command output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    let format = cli.format.unwrap_or(config.output_format);

    let output = match cli.command {
        Commands::Metrics { file } => commands::metrics::run(&file, format)?,
        Commands::Summary { file, client_price } => {
            let price = client_price.unwrap_or(config.client_price_per_box);
            commands::summary::run(&file, price, format)?
        }
        Commands::Breakdown { file, lot_number } => {
            commands::breakdown::run(&file, lot_number.as_deref())?
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    Ok(())
}
