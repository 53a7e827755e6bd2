//! Unit-cost table per lot.
//!
//! # Usage
//!
//! ```bash
//! # Every lot in the file
//! lote-cli breakdown lots.json
//!
//! # A single lot
//! lote-cli breakdown lots.json --lot-number L-17
//! ```
//!
//! Lots without an invoice value or packaging output print `-` in every cell.

use std::fmt::Write as _;
use std::path::Path;

use lote_core::{CostCategory, Lot, UnitCostBreakdown, UnitCostInput};
use rust_decimal::Decimal;

use super::{CommandError, load_lots};

const COLUMN_WIDTH: usize = 12;

/// Render the cost table of every lot, or of the one matching `lot_number`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or no lot matches.
pub fn run(path: &Path, lot_number: Option<&str>) -> Result<String, CommandError> {
    let lots = load_lots(path)?;

    let selected: Vec<&Lot> = match lot_number {
        Some(number) => {
            let matching: Vec<&Lot> = lots.iter().filter(|l| l.lot_number == number).collect();
            if matching.is_empty() {
                return Err(CommandError::LotNotFound(number.to_owned()));
            }
            matching
        }
        None => lots.iter().collect(),
    };

    Ok(selected
        .into_iter()
        .map(render_lot)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_lot(lot: &Lot) -> String {
    let breakdown = UnitCostBreakdown::compute(&UnitCostInput::from_lot(lot));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Lot {} ({}, {})",
        display_or_dash(&lot.lot_number),
        display_or_dash(&lot.supplier),
        lot.fillet_type
    );
    let _ = writeln!(
        out,
        "{:<10}{:>w$}{:>w$}{:>w$}",
        "",
        "per packet",
        "per kg",
        "per box",
        w = COLUMN_WIDTH
    );

    for category in CostCategory::ALL {
        let row = breakdown.map(|b| b.row(category));
        let _ = writeln!(
            out,
            "{:<10}{:>w$}{:>w$}{:>w$}",
            category.to_string(),
            cell(row.map(|r| r.per_packet)),
            cell(row.map(|r| r.per_kg)),
            cell(row.map(|r| r.per_box)),
            w = COLUMN_WIDTH
        );
    }

    out
}

fn cell(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
