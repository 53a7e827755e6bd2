//! Cost and yield calculations.
//!
//! Everything here is a pure function of its arguments. Derived values are
//! never stored on the [`Lot`](crate::Lot); callers recompute them whenever an
//! input changes.
//!
//! # Rounding
//!
//! Intermediate values (box totals, the packaging per-packet/per-kg/per-box
//! chain, unit-cost cells before totalling) are carried at full precision.
//! Values are rounded half away from zero with [`round_money`] in exactly two
//! places:
//!
//! - when a [`UnitCostBreakdown`] is built, each cell once, with totals taken
//!   from the full-precision sum;
//! - when [`LotMetrics`] and [`DashboardSummary`] are built for display.
//!
//! The average cost per box is taken over the rounded per-box totals, which
//! are the values persisted alongside a lot.

use rust_decimal::{Decimal, RoundingStrategy};

pub mod dashboard;
pub mod filleting;
pub mod margin;
pub mod metrics;
pub mod packaging;
pub mod unit_cost;
pub mod weights;
pub mod yields;

pub use dashboard::{DashboardSummary, StatusCounts, SupplierShare};
pub use margin::{CLIENT_PRICE_PER_BOX, average_cost_per_box, margin_percent, margin_percent_at};
pub use metrics::LotMetrics;
pub use unit_cost::{CostCategory, UnitCostBreakdown, UnitCostInput, UnitCosts};
pub use weights::sum_buckets;

pub(crate) const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Round to cents, half away from zero.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    round_to(value, 2)
}

/// Round to `dp` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `numerator / denominator`, or `None` when the denominator is not positive
/// or the quotient does not fit.
pub(crate) fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator <= Decimal::ZERO {
        return None;
    }
    numerator.checked_div(denominator)
}

/// `part / whole × 100`, or zero when `whole` is not positive.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    ratio(part, whole)
        .and_then(|r| r.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}
