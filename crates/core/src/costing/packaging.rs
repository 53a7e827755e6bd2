//! Running packaging totals for a lot.
//!
//! These are the simple packet and box material costs shown next to each
//! other on the packaging form. The per-unit packaging cost used in the
//! cost breakdown lives in [`unit_cost`](super::unit_cost).

use rust_decimal::Decimal;

use super::{ratio, round_to};
use crate::types::FilletType;

/// Cost of one master box (the cardboard, not its contents).
pub const BOX_FEE: Decimal = Decimal::from_parts(605, 0, 0, false, 2);

/// Material cost of every packet produced.
#[must_use]
pub fn packet_cost(total_packets_produced: u64, fillet_type: FilletType) -> Decimal {
    Decimal::from(total_packets_produced) * fillet_type.per_packet_base_cost()
}

/// Material cost of every box produced, partial boxes included. Saturates
/// at [`Decimal::MAX`].
#[must_use]
pub fn box_cost(total_boxes_produced: Decimal) -> Decimal {
    total_boxes_produced.saturating_mul(BOX_FEE)
}

/// A packaging cost spread over the packaged output, to 4 decimal places.
///
/// `None` when nothing has been packaged yet.
#[must_use]
pub fn packaging_cost_per_kg(cost: Decimal, packaged_output_kg: Decimal) -> Option<Decimal> {
    ratio(cost, packaged_output_kg).map(|value| round_to(value, 4))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::costing::yields::total_boxes_produced;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_packet_cost_by_fillet_type() {
        assert_eq!(packet_cost(240, FilletType::LightPack), d("103.08"));
        assert_eq!(packet_cost(120, FilletType::HeavyPack), d("66.18"));
        assert_eq!(packet_cost(0, FilletType::HeavyPack), Decimal::ZERO);
    }

    #[test]
    fn test_box_cost_counts_partial_boxes() {
        assert_eq!(box_cost(d("10")), d("60.5"));
        let boxes = total_boxes_produced(1, 12, FilletType::LightPack);
        assert_eq!(box_cost(boxes), d("9.075"));
        assert_eq!(box_cost(Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn test_packaging_cost_per_kg() {
        assert_eq!(packaging_cost_per_kg(d("103.08"), d("96")), Some(d("1.0738")));
        assert_eq!(packaging_cost_per_kg(d("103.08"), Decimal::ZERO), None);
    }
}
