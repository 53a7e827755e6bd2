//! Per-lot derived figures.
//!
//! # Usage
//!
//! ```bash
//! lote-cli metrics lots.json
//! lote-cli --format yaml metrics lots.json
//! ```

use std::path::Path;

use lote_core::LotMetrics;

use super::{CommandError, load_lots, render};
use crate::config::OutputFormat;

/// Compute [`LotMetrics`] for every lot in the file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the output rendered.
pub fn run(path: &Path, format: OutputFormat) -> Result<String, CommandError> {
    let lots = load_lots(path)?;
    let metrics: Vec<LotMetrics> = lots.iter().map(LotMetrics::compute).collect();
    render(&metrics, format)
}
