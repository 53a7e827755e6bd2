//! Aggregates over a window of lots.
//!
//! The caller decides which lots form the window (a day, a supplier, a
//! report filter); this module only summarises what it is given. A lot whose
//! figures cannot be computed is skipped for that figure and still counted
//! everywhere else.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::margin::{CLIENT_PRICE_PER_BOX, average_cost_per_box, margin_percent_at};
use super::weights::sum_buckets;
use super::yields::{packaged_output_kg, yield_percent};
use super::{percent_of, ratio, round_money};
use crate::types::{Lot, LotStatus, SizeBucketedWeight};

/// Number of lots in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub open: usize,
    pub in_production: usize,
    pub finalized: usize,
    pub total: usize,
}

impl StatusCounts {
    fn record(&mut self, status: LotStatus) {
        match status {
            LotStatus::Open => self.open += 1,
            LotStatus::InProduction => self.in_production += 1,
            LotStatus::Finalized => self.finalized += 1,
        }
        self.total += 1;
    }
}

/// One supplier's share of the finalized lots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierShare {
    pub supplier: String,
    pub lots: usize,
    pub packaged_kg: Decimal,
    /// Invoice weight of the supplier's finalized lots.
    pub invoice_kg: Decimal,
    /// Mean yield against invoice weight, over lots with an invoice weight.
    pub average_yield_vs_invoice: Option<Decimal>,
}

/// Dashboard figures for a window of lots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub lots: StatusCounts,
    /// Packaged fillet weight of finalized lots.
    pub finalized_packaged_kg: Decimal,
    /// Invoice value of finalized lots.
    pub finalized_invoice_value: Decimal,
    /// Distinct suppliers with at least one lot in the window.
    pub active_suppliers: usize,
    /// Finalized lots per supplier, heaviest first.
    pub by_supplier: Vec<SupplierShare>,
    /// Mean per-lot yield over lots with an invoice weight.
    pub average_yield_vs_invoice: Option<Decimal>,
    /// Mean per-lot yield over lots with a showroom weight.
    pub average_yield_vs_showroom: Option<Decimal>,
    /// Total packaged output over total showroom weight.
    pub overall_showroom_yield: Decimal,
    pub invoice_weight_by_size: SizeBucketedWeight,
    pub packaged_fillet_by_size: SizeBucketedWeight,
    pub client_price_per_box: Decimal,
    /// Mean per-box total cost of finalized lots; `None` when none is computable.
    pub average_cost_per_box: Option<Decimal>,
    pub margin_percent: Decimal,
}

#[derive(Default)]
struct Mean {
    sum: Decimal,
    count: u64,
}

impl Mean {
    /// Add a value; one that would overflow the running sum is dropped.
    fn push(&mut self, value: Decimal) {
        if let Some(sum) = self.sum.checked_add(value) {
            self.sum = sum;
            self.count += 1;
        } else {
            debug!(%value, "Dropping value that overflows the mean");
        }
    }

    fn value(&self) -> Option<Decimal> {
        ratio(self.sum, Decimal::from(self.count))
    }
}

#[derive(Default)]
struct SupplierTotals {
    lots: usize,
    packaged_kg: Decimal,
    invoice_kg: Decimal,
    yield_vs_invoice: Mean,
}

impl DashboardSummary {
    /// Summarise `lots` at [`CLIENT_PRICE_PER_BOX`].
    #[must_use]
    pub fn from_lots(lots: &[Lot]) -> Self {
        Self::with_client_price(lots, CLIENT_PRICE_PER_BOX)
    }

    /// Summarise `lots`, computing the margin at `client_price_per_box`.
    #[must_use]
    pub fn with_client_price(lots: &[Lot], client_price_per_box: Decimal) -> Self {
        let mut counts = StatusCounts::default();
        let mut finalized_packaged_kg = Decimal::ZERO;
        let mut finalized_invoice_value = Decimal::ZERO;
        let mut suppliers: BTreeMap<&str, SupplierTotals> = BTreeMap::new();
        let mut active_suppliers: BTreeSet<&str> = BTreeSet::new();
        let mut yield_vs_invoice = Mean::default();
        let mut yield_vs_showroom = Mean::default();
        let mut total_output_kg = Decimal::ZERO;
        let mut total_showroom_kg = Decimal::ZERO;
        let mut invoice_weight_by_size = SizeBucketedWeight::ZERO;
        let mut packaged_fillet_by_size = SizeBucketedWeight::ZERO;

        for lot in lots {
            counts.record(lot.status);
            if !lot.supplier.is_empty() {
                active_suppliers.insert(lot.supplier.as_str());
            }

            let invoice_kg = sum_buckets(lot.invoice_weight.as_ref());
            let showroom_kg = sum_buckets(lot.showroom_weight.as_ref());
            let packaged_kg = sum_buckets(lot.packaged_fillet_weight.as_ref());
            let output_kg = packaged_output_kg(lot.box_count, lot.packet_count, lot.fillet_type);

            let lot_yield_vs_invoice =
                (invoice_kg > Decimal::ZERO).then(|| yield_percent(output_kg, invoice_kg));
            if let Some(value) = lot_yield_vs_invoice {
                yield_vs_invoice.push(value);
            }
            if showroom_kg > Decimal::ZERO {
                yield_vs_showroom.push(yield_percent(output_kg, showroom_kg));
            }
            total_output_kg = total_output_kg.saturating_add(output_kg);
            total_showroom_kg = total_showroom_kg.saturating_add(showroom_kg);

            if let Some(weight) = &lot.invoice_weight {
                invoice_weight_by_size = invoice_weight_by_size.combined(weight);
            }
            if let Some(weight) = &lot.packaged_fillet_weight {
                packaged_fillet_by_size = packaged_fillet_by_size.combined(weight);
            }

            if lot.is_finalized() {
                finalized_packaged_kg = finalized_packaged_kg.saturating_add(packaged_kg);
                finalized_invoice_value = finalized_invoice_value
                    .saturating_add(lot.invoice_value.unwrap_or(Decimal::ZERO));
                let entry = suppliers.entry(lot.supplier.as_str()).or_default();
                entry.lots += 1;
                entry.packaged_kg = entry.packaged_kg.saturating_add(packaged_kg);
                entry.invoice_kg = entry.invoice_kg.saturating_add(invoice_kg);
                if let Some(value) = lot_yield_vs_invoice {
                    entry.yield_vs_invoice.push(value);
                }
            }
        }

        let mut by_supplier: Vec<SupplierShare> = suppliers
            .into_iter()
            .map(|(supplier, totals)| SupplierShare {
                supplier: supplier.to_owned(),
                lots: totals.lots,
                packaged_kg: round_money(totals.packaged_kg),
                invoice_kg: round_money(totals.invoice_kg),
                average_yield_vs_invoice: totals.yield_vs_invoice.value().map(round_money),
            })
            .collect();
        // BTreeMap order breaks ties by name; sort_by is stable.
        by_supplier.sort_by(|a, b| b.packaged_kg.cmp(&a.packaged_kg));

        let average_cost = average_cost_per_box(lots);
        let margin = average_cost.map_or(Decimal::ZERO, |cost| {
            margin_percent_at(client_price_per_box, cost)
        });

        Self {
            lots: counts,
            finalized_packaged_kg: round_money(finalized_packaged_kg),
            finalized_invoice_value: round_money(finalized_invoice_value),
            active_suppliers: active_suppliers.len(),
            by_supplier,
            average_yield_vs_invoice: yield_vs_invoice.value().map(round_money),
            average_yield_vs_showroom: yield_vs_showroom.value().map(round_money),
            overall_showroom_yield: round_money(percent_of(total_output_kg, total_showroom_kg)),
            invoice_weight_by_size,
            packaged_fillet_by_size,
            client_price_per_box,
            average_cost_per_box: average_cost.map(round_money),
            margin_percent: round_money(margin),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::SizeBucket;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn lot(supplier: &str, status: LotStatus, invoice_value: &str, box_count: u32) -> Lot {
        let mut lot = Lot::new();
        lot.supplier = supplier.to_owned();
        lot.status = status;
        lot.invoice_value = Some(d(invoice_value));
        lot.box_count = box_count;
        lot.invoice_weight = Some(SizeBucketedWeight::single(SizeBucket::Medium, d("120")));
        lot.showroom_weight = Some(SizeBucketedWeight::single(SizeBucket::Medium, d("110")));
        lot.packaged_fillet_weight = Some(SizeBucketedWeight::single(
            SizeBucket::Small,
            Decimal::from(box_count) * d("9.6"),
        ));
        lot
    }

    #[test]
    fn test_empty_window() {
        let summary = DashboardSummary::from_lots(&[]);
        assert_eq!(summary.lots, StatusCounts::default());
        assert_eq!(summary.average_cost_per_box, None);
        assert_eq!(summary.average_yield_vs_invoice, None);
        assert_eq!(summary.margin_percent, Decimal::ZERO);
        assert_eq!(summary.overall_showroom_yield, Decimal::ZERO);
        assert!(summary.by_supplier.is_empty());
    }

    #[test]
    fn test_status_counts_and_suppliers() {
        let lots = [
            lot("VALEFISH", LotStatus::Finalized, "3840", 10),
            lot("NORFISH", LotStatus::Finalized, "1920", 20),
            lot("NORFISH", LotStatus::Open, "100", 1),
            lot("CARLITO", LotStatus::InProduction, "100", 1),
        ];
        let summary = DashboardSummary::from_lots(&lots);

        assert_eq!(
            summary.lots,
            StatusCounts {
                open: 1,
                in_production: 1,
                finalized: 2,
                total: 4
            }
        );
        assert_eq!(summary.active_suppliers, 3);
        assert_eq!(summary.finalized_packaged_kg, d("288"));
        assert_eq!(summary.finalized_invoice_value, d("5760"));
        assert_eq!(summary.by_supplier.len(), 2);
        assert_eq!(summary.by_supplier[0].supplier, "NORFISH");
        assert_eq!(summary.by_supplier[0].packaged_kg, d("192"));
        assert_eq!(summary.by_supplier[1].supplier, "VALEFISH");
    }

    #[test]
    fn test_yields_and_size_totals() {
        let lots = [
            lot("VALEFISH", LotStatus::Finalized, "3840", 10),
            lot("VALEFISH", LotStatus::Open, "0", 0),
        ];
        let summary = DashboardSummary::from_lots(&lots);

        // (80 + 0) / 2
        assert_eq!(summary.average_yield_vs_invoice, Some(d("40")));
        // 96 / 220
        assert_eq!(summary.overall_showroom_yield, d("43.64"));
        assert_eq!(summary.invoice_weight_by_size.medium, d("240"));
        assert_eq!(summary.packaged_fillet_by_size.total(), d("96"));
    }

    #[test]
    fn test_average_cost_and_margin() {
        let lots = [
            lot("VALEFISH", LotStatus::Finalized, "3840", 10),
            lot("VALEFISH", LotStatus::Finalized, "1920", 10),
        ];
        let summary = DashboardSummary::from_lots(&lots);
        assert_eq!(summary.average_cost_per_box, Some(d("361.96")));
        // (384 - 361.96) / 384 × 100
        assert_eq!(summary.margin_percent, d("5.74"));
    }

    #[test]
    fn test_custom_client_price() {
        let lots = [lot("VALEFISH", LotStatus::Finalized, "3840", 10)];
        let summary = DashboardSummary::with_client_price(&lots, d("915.92"));
        assert_eq!(summary.client_price_per_box, d("915.92"));
        assert_eq!(summary.margin_percent, d("50"));
    }

    #[test]
    fn test_supplier_invoice_weight_and_yield() {
        let lots = [
            lot("VALEFISH", LotStatus::Finalized, "3840", 10),
            lot("VALEFISH", LotStatus::Finalized, "1920", 5),
            lot("VALEFISH", LotStatus::Open, "100", 1),
        ];
        let summary = DashboardSummary::from_lots(&lots);
        let share = &summary.by_supplier[0];

        assert_eq!(share.lots, 2);
        assert_eq!(share.invoice_kg, d("240"));
        // (96 / 120 + 48 / 120) / 2 × 100
        assert_eq!(share.average_yield_vs_invoice, Some(d("60")));
    }

    #[test]
    fn test_supplier_without_invoice_weight_has_no_yield() {
        let mut no_weight = lot("CARLITO", LotStatus::Finalized, "100", 1);
        no_weight.invoice_weight = None;
        let summary = DashboardSummary::from_lots(&[no_weight]);
        assert_eq!(summary.by_supplier[0].invoice_kg, Decimal::ZERO);
        assert_eq!(summary.by_supplier[0].average_yield_vs_invoice, None);
    }

    #[test]
    fn test_extreme_lot_does_not_abort_the_window() {
        let mut huge = lot("NORFISH", LotStatus::Finalized, "1", 1);
        huge.invoice_value = Some(Decimal::MAX);
        huge.showroom_weight = Some(SizeBucketedWeight::new(
            Decimal::MAX,
            Decimal::MAX,
            Decimal::ZERO,
            Decimal::ZERO,
        ));
        let lots = [huge.clone(), huge, lot("VALEFISH", LotStatus::Finalized, "3840", 10)];
        let summary = DashboardSummary::from_lots(&lots);

        assert_eq!(summary.lots.finalized, 3);
        assert_eq!(summary.finalized_invoice_value, Decimal::MAX);
        assert_eq!(summary.average_cost_per_box, Some(d("457.96")));
        assert_eq!(summary.by_supplier.len(), 2);
    }

    #[test]
    fn test_non_computable_lot_still_counted() {
        let mut broken = lot("VALEFISH", LotStatus::Finalized, "3840", 10);
        broken.invoice_value = None;
        let lots = [broken, lot("NORFISH", LotStatus::Finalized, "3840", 10)];
        let summary = DashboardSummary::from_lots(&lots);
        assert_eq!(summary.lots.finalized, 2);
        assert_eq!(summary.average_cost_per_box, Some(d("457.96")));
    }
}
