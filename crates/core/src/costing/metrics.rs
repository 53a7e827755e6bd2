//! Every derived figure of a single lot.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::filleting::{filleting_difference_kg, freezing_gain_percent, intake_gap_kg};
use super::packaging::{box_cost, packaging_cost_per_kg, packet_cost};
use super::unit_cost::{UnitCostBreakdown, UnitCostInput};
use super::weights::sum_buckets;
use super::yields::{
    box_output_kg, packet_output_kg, total_boxes_produced, total_packets_produced, yield_percent,
};
use super::round_money;
use crate::types::{FilletType, Lot, LotStatus};

/// Derived fields of a lot, ready for display or persistence.
///
/// Built fresh from the lot on every call; nothing here is cached. Money,
/// weights and percentages are rounded to cents, per-kg packaging costs to
/// four places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotMetrics {
    pub lot_id: Uuid,
    pub lot_number: String,
    pub supplier: String,
    pub status: LotStatus,
    pub fillet_type: FilletType,

    pub invoice_weight_kg: Decimal,
    pub showroom_weight_kg: Decimal,
    pub intake_gap_kg: Decimal,

    pub fresh_fillet_kg: Decimal,
    pub frozen_fillet_kg: Decimal,
    pub filleting_difference_kg: Decimal,
    pub freezing_gain_percent: Decimal,
    pub packaged_fillet_kg: Decimal,
    pub discard_kg: Decimal,

    pub box_output_kg: Decimal,
    pub packet_output_kg: Decimal,
    pub packaged_output_kg: Decimal,
    pub total_packets_produced: u64,
    pub total_boxes_produced: Decimal,

    pub yield_vs_invoice: Decimal,
    pub yield_vs_showroom: Decimal,

    pub packet_cost: Decimal,
    pub box_cost: Decimal,
    pub packet_cost_per_kg: Option<Decimal>,
    pub box_cost_per_kg: Option<Decimal>,

    /// `None` when the lot lacks an invoice value or packaging output.
    pub unit_costs: Option<UnitCostBreakdown>,

    pub expiry_date: Option<NaiveDate>,
}

impl LotMetrics {
    #[must_use]
    pub fn compute(lot: &Lot) -> Self {
        let invoice_weight_kg = sum_buckets(lot.invoice_weight.as_ref());
        let showroom_weight_kg = sum_buckets(lot.showroom_weight.as_ref());
        let fresh_fillet_kg = sum_buckets(lot.fresh_fillet_weight.as_ref());
        let frozen_fillet_kg = sum_buckets(lot.frozen_fillet_weight.as_ref());

        let box_kg = box_output_kg(lot.box_count);
        let packet_kg = packet_output_kg(lot.packet_count, lot.fillet_type);
        let output_kg = box_kg + packet_kg;
        let packets = total_packets_produced(lot.box_count, lot.packet_count, lot.fillet_type);
        let boxes = total_boxes_produced(lot.box_count, lot.packet_count, lot.fillet_type);

        let packets_cost = packet_cost(packets, lot.fillet_type);
        let boxes_cost = box_cost(boxes);

        Self {
            lot_id: lot.id,
            lot_number: lot.lot_number.clone(),
            supplier: lot.supplier.clone(),
            status: lot.status,
            fillet_type: lot.fillet_type,

            invoice_weight_kg: round_money(invoice_weight_kg),
            showroom_weight_kg: round_money(showroom_weight_kg),
            intake_gap_kg: round_money(intake_gap_kg(lot)),

            fresh_fillet_kg: round_money(fresh_fillet_kg),
            frozen_fillet_kg: round_money(frozen_fillet_kg),
            filleting_difference_kg: round_money(filleting_difference_kg(lot)),
            freezing_gain_percent: round_money(freezing_gain_percent(
                fresh_fillet_kg,
                frozen_fillet_kg,
            )),
            packaged_fillet_kg: round_money(sum_buckets(lot.packaged_fillet_weight.as_ref())),
            discard_kg: round_money(sum_buckets(lot.discard_weight.as_ref())),

            box_output_kg: round_money(box_kg),
            packet_output_kg: round_money(packet_kg),
            packaged_output_kg: round_money(output_kg),
            total_packets_produced: packets,
            total_boxes_produced: round_money(boxes),

            yield_vs_invoice: round_money(yield_percent(output_kg, invoice_weight_kg)),
            yield_vs_showroom: round_money(yield_percent(output_kg, showroom_weight_kg)),

            packet_cost: round_money(packets_cost),
            box_cost: round_money(boxes_cost),
            packet_cost_per_kg: packaging_cost_per_kg(packets_cost, output_kg),
            box_cost_per_kg: packaging_cost_per_kg(boxes_cost, output_kg),

            unit_costs: UnitCostBreakdown::compute(&UnitCostInput::from_lot(lot)),

            expiry_date: lot.effective_expiry_date(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{SizeBucket, SizeBucketedWeight};

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_lot_metrics() {
        let metrics = LotMetrics::compute(&Lot::new());
        assert_eq!(metrics.packaged_output_kg, Decimal::ZERO);
        assert_eq!(metrics.yield_vs_invoice, Decimal::ZERO);
        assert_eq!(metrics.packet_cost_per_kg, None);
        assert_eq!(metrics.unit_costs, None);
        assert_eq!(metrics.expiry_date, None);
    }

    #[test]
    fn test_partial_boxes_are_rounded_for_display() {
        let mut lot = Lot::new();
        lot.packet_count = 5;
        let metrics = LotMetrics::compute(&lot);
        assert_eq!(metrics.total_packets_produced, 5);
        assert_eq!(metrics.total_boxes_produced, d("0.21"));
        assert_eq!(metrics.packet_output_kg, d("2"));
        // 5/24 boxes × 6.05
        assert_eq!(metrics.box_cost, d("1.26"));
    }

    #[test]
    fn test_metrics_recomputed_after_edit() {
        let mut lot = Lot::new();
        lot.invoice_weight = Some(SizeBucketedWeight::single(SizeBucket::Small, d("100")));
        lot.box_count = 5;
        assert_eq!(LotMetrics::compute(&lot).yield_vs_invoice, d("48"));

        lot.box_count = 10;
        assert_eq!(LotMetrics::compute(&lot).yield_vs_invoice, d("96"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(LotMetrics::compute(&Lot::new())).unwrap();
        assert!(json.get("yieldVsShowroom").is_some());
        assert!(json.get("unitCosts").unwrap().is_null());
    }
}
