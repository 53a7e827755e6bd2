//! End-to-end tests for the lot cost and yield engine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lote-integration-tests
//! ```
//!
//! # Fixtures
//!
//! `fixtures/lots.json` is an export of four lots in the shape the
//! lot-tracking API produces, mixing current and legacy keys:
//!
//! | Lot   | Supplier | Status        | Notes                                  |
//! |-------|----------|---------------|----------------------------------------|
//! | L-100 | VALEFISH | finalized     | 10 boxes of 400 g packets, R$ 3840     |
//! | L-101 | NORFISH  | finalized     | 10 boxes of 800 g packets, legacy keys |
//! | L-102 | CARLITO  | in production | loose packets, no invoice value        |
//! | L-103 | VALEFISH | open          | nothing entered yet                    |

use std::path::PathBuf;

use lote_core::Lot;
use rust_decimal::Decimal;

/// Path of a file under `fixtures/`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Load the lots stored in a fixture file.
///
/// # Panics
///
/// Panics if the fixture is missing or is not an array of lots.
#[must_use]
pub fn load_lots(name: &str) -> Vec<Lot> {
    let path = fixture_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid lots in {}: {e}", path.display()))
}

/// Find a lot by its lot number.
///
/// # Panics
///
/// Panics if no lot has that number.
#[must_use]
pub fn lot<'a>(lots: &'a [Lot], lot_number: &str) -> &'a Lot {
    lots.iter()
        .find(|lot| lot.lot_number == lot_number)
        .unwrap_or_else(|| panic!("no lot numbered {lot_number}"))
}

/// Parse a decimal literal.
///
/// # Panics
///
/// Panics if `s` is not a decimal number.
#[must_use]
pub fn d(s: &str) -> Decimal {
    s.parse()
        .unwrap_or_else(|e| panic!("invalid decimal {s}: {e}"))
}
