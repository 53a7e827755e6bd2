//! Dashboard summary over a file of lots.
//!
//! # Usage
//!
//! ```bash
//! lote-cli summary lots.json
//! lote-cli summary lots.json --client-price 400
//! ```

use std::path::Path;

use lote_core::DashboardSummary;
use rust_decimal::Decimal;
use tracing::info;

use super::{CommandError, load_lots, render};
use crate::config::OutputFormat;

/// Summarise every lot in the file.
///
/// # Errors
///
/// Returns an error if the client price is not positive, or if the file
/// cannot be loaded or the output rendered.
pub fn run(
    path: &Path,
    client_price_per_box: Decimal,
    format: OutputFormat,
) -> Result<String, CommandError> {
    if client_price_per_box <= Decimal::ZERO {
        return Err(CommandError::InvalidClientPrice(client_price_per_box));
    }
    let lots = load_lots(path)?;
    let summary = DashboardSummary::with_client_price(&lots, client_price_per_box);

    info!(
        finalized = summary.lots.finalized,
        margin_percent = %summary.margin_percent,
        "Summary computed"
    );

    render(&summary, format)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_client_price() {
        let path = Path::new("/nonexistent/lots.json");
        for price in [Decimal::ZERO, Decimal::NEGATIVE_ONE] {
            let err = run(path, price, OutputFormat::Json).unwrap_err();
            assert!(matches!(err, CommandError::InvalidClientPrice(p) if p == price));
        }
        let err = run(path, Decimal::ZERO, OutputFormat::Json).unwrap_err();
        assert_eq!(err.to_string(), "Client price per box must be positive, got 0");
    }

    #[test]
    fn test_valid_price_reaches_the_file() {
        let path = Path::new("/nonexistent/lots.json");
        let err = run(path, Decimal::ONE, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, CommandError::Read { .. }));
    }
}
