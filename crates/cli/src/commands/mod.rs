//! Command implementations.
//!
//! Each command reads lots from a JSON export of the lot-tracking API and
//! returns the text to print. Nothing is written back.

use std::path::{Path, PathBuf};

use lote_core::Lot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::OutputFormat;

pub mod breakdown;
pub mod metrics;
pub mod summary;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file is not a lot or a list of lots.
    #[error("Invalid lot data in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// JSON output failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML output failed.
    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No lot matched the requested lot number.
    #[error("Lot not found: {0}")]
    LotNotFound(String),

    /// The client price used for the margin is zero or negative.
    #[error("Client price per box must be positive, got {0}")]
    InvalidClientPrice(Decimal),
}

/// A file holds either one lot or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum LotFile {
    Many(Vec<Lot>),
    One(Box<Lot>),
}

/// Load lots from a JSON file and log any validation problems.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_lots(path: &Path) -> Result<Vec<Lot>, CommandError> {
    let content = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lots = parse_lots(&content).map_err(|source| CommandError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), lots = lots.len(), "Loaded lots");
    warn_invalid(&lots);

    Ok(lots)
}

fn parse_lots(content: &str) -> Result<Vec<Lot>, serde_json::Error> {
    Ok(match serde_json::from_str(content)? {
        LotFile::Many(lots) => lots,
        LotFile::One(lot) => vec![*lot],
    })
}

fn warn_invalid(lots: &[Lot]) {
    for lot in lots {
        for error in lot.validate() {
            warn!(lot_number = %lot.lot_number, "{error}");
        }
    }
}

/// Serialize a value in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CommandError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}
