//! Operating margin against the client price.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::unit_cost::{UnitCostBreakdown, UnitCostInput};
use super::{percent_of, ratio};
use crate::types::Lot;

/// Price the downstream client pays per master box.
pub const CLIENT_PRICE_PER_BOX: Decimal = Decimal::from_parts(38400, 0, 0, false, 2);

/// Margin at [`CLIENT_PRICE_PER_BOX`], as a percentage.
///
/// ```
/// use lote_core::margin_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(margin_percent(Decimal::from(192)), Decimal::from(50));
/// assert_eq!(margin_percent(Decimal::ZERO), Decimal::ZERO);
/// ```
#[must_use]
pub fn margin_percent(average_cost_per_box: Decimal) -> Decimal {
    margin_percent_at(CLIENT_PRICE_PER_BOX, average_cost_per_box)
}

/// Margin at an arbitrary client price, as a percentage.
///
/// Zero when either the price or the cost is not positive. A cost above the
/// price gives a negative margin.
#[must_use]
pub fn margin_percent_at(client_price_per_box: Decimal, average_cost_per_box: Decimal) -> Decimal {
    if average_cost_per_box <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    client_price_per_box
        .checked_sub(average_cost_per_box)
        .map_or(Decimal::ZERO, |gap| percent_of(gap, client_price_per_box))
}

/// Mean per-box total cost over the finalized lots whose breakdown can be
/// computed.
///
/// Lots that are not finalized, or whose breakdown is not computable, are left
/// out of the mean entirely, as is a lot whose cost would overflow the running
/// sum. `None` when no lot qualifies.
pub fn average_cost_per_box<'a, I>(lots: I) -> Option<Decimal>
where
    I: IntoIterator<Item = &'a Lot>,
{
    let mut sum = Decimal::ZERO;
    let mut count: u64 = 0;

    for lot in lots {
        if !lot.is_finalized() {
            continue;
        }
        let Some(breakdown) = UnitCostBreakdown::compute(&UnitCostInput::from_lot(lot)) else {
            debug!(
                lot_id = %lot.id,
                lot_number = %lot.lot_number,
                "Skipping finalized lot without a computable cost per box"
            );
            continue;
        };
        let Some(next) = sum.checked_add(breakdown.total.per_box) else {
            warn!(
                lot_id = %lot.id,
                lot_number = %lot.lot_number,
                "Skipping lot whose cost per box overflows the average"
            );
            continue;
        };
        sum = next;
        count += 1;
    }

    ratio(sum, Decimal::from(count))
}
