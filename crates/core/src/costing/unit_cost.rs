//! Fillet/packaging/service cost breakdown per packet, per kg and per box.
//!
//! The breakdown is a 4×3 table:
//!
//! | row       | per packet                  | per kg                     | per box           |
//! |-----------|-----------------------------|----------------------------|-------------------|
//! | fillet    | invoice / packets           | invoice / packaged kg      | invoice / boxes   |
//! | packaging | base + box fee / pkts/box   | per packet / divisor × 10  | per kg × 9.6      |
//! | service   | 0.6 × divisor               | 6.00                       | 57.60             |
//! | total     | column sum                  | column sum                 | column sum        |
//!
//! `divisor` is 4 for 400 g packets and 8 for 800 g packets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::packaging::BOX_FEE;
use super::weights::sum_buckets;
use super::yields::{BOX_NET_KG, total_boxes_produced, total_packets_produced};
use super::{ratio, round_money};
use crate::types::{FilletType, Lot};

/// Service charge per kilogram of fillet.
pub const SERVICE_PER_KG: Decimal = Decimal::from_parts(600, 0, 0, false, 2);
/// Service charge per master box.
pub const SERVICE_PER_BOX: Decimal = Decimal::from_parts(5760, 0, 0, false, 2);

const SERVICE_PER_PACKET_FACTOR: Decimal = Decimal::from_parts(6, 0, 0, false, 1);
const PACKAGING_KG_SCALE: Decimal = Decimal::TEN;

/// Inputs to the breakdown, taken from a lot and its packaging totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCostInput {
    pub invoice_value: Decimal,
    pub total_packets_produced: u64,
    pub packaged_fillet_kg: Decimal,
    pub total_boxes_produced: Decimal,
    pub fillet_type: FilletType,
}

impl UnitCostInput {
    /// Collect the inputs from a lot. A missing invoice value counts as zero,
    /// which makes the breakdown not computable.
    #[must_use]
    pub fn from_lot(lot: &Lot) -> Self {
        Self {
            invoice_value: lot.invoice_value.unwrap_or(Decimal::ZERO),
            total_packets_produced: total_packets_produced(
                lot.box_count,
                lot.packet_count,
                lot.fillet_type,
            ),
            packaged_fillet_kg: sum_buckets(lot.packaged_fillet_weight.as_ref()),
            total_boxes_produced: total_boxes_produced(
                lot.box_count,
                lot.packet_count,
                lot.fillet_type,
            ),
            fillet_type: lot.fillet_type,
        }
    }
}

/// Row labels of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Fillet,
    Packaging,
    Service,
    Total,
}

impl CostCategory {
    /// Rows in table order.
    pub const ALL: [Self; 4] = [Self::Fillet, Self::Packaging, Self::Service, Self::Total];
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fillet => write!(f, "fillet"),
            Self::Packaging => write!(f, "packaging"),
            Self::Service => write!(f, "service"),
            Self::Total => write!(f, "total"),
        }
    }
}

/// One row of the breakdown: a cost per packet, per kilogram and per box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCosts {
    pub per_packet: Decimal,
    pub per_kg: Decimal,
    pub per_box: Decimal,
}

impl UnitCosts {
    /// Column sums, `None` if any column overflows.
    fn checked_sum(rows: [&Self; 3]) -> Option<Self> {
        rows.into_iter().try_fold(
            Self {
                per_packet: Decimal::ZERO,
                per_kg: Decimal::ZERO,
                per_box: Decimal::ZERO,
            },
            |acc, row| {
                Some(Self {
                    per_packet: acc.per_packet.checked_add(row.per_packet)?,
                    per_kg: acc.per_kg.checked_add(row.per_kg)?,
                    per_box: acc.per_box.checked_add(row.per_box)?,
                })
            },
        )
    }

    fn rounded(&self) -> Self {
        Self {
            per_packet: round_money(self.per_packet),
            per_kg: round_money(self.per_kg),
            per_box: round_money(self.per_box),
        }
    }
}

/// The fillet/packaging/service cost table of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCostBreakdown {
    pub fillet: UnitCosts,
    pub packaging: UnitCosts,
    pub service: UnitCosts,
    pub total: UnitCosts,
}

impl UnitCostBreakdown {
    #[must_use]
    pub const fn row(&self, category: CostCategory) -> UnitCosts {
        match category {
            CostCategory::Fillet => self.fillet,
            CostCategory::Packaging => self.packaging,
            CostCategory::Service => self.service,
            CostCategory::Total => self.total,
        }
    }

    /// Rows in table order.
    #[must_use]
    pub fn rows(&self) -> [(CostCategory, UnitCosts); 4] {
        CostCategory::ALL.map(|category| (category, self.row(category)))
    }

    /// Compute the breakdown with every cell rounded to cents.
    ///
    /// Totals are the rounded full-precision sums, so a total can differ by
    /// a cent from the sum of the rounded cells above it. Returns `None`
    /// (not computable) unless packets, packaged kg, boxes and invoice value
    /// are all positive, and when a cell does not fit in a `Decimal`.
    ///
    /// ```
    /// use lote_core::{FilletType, UnitCostBreakdown, UnitCostInput};
    /// use rust_decimal::Decimal;
    ///
    /// let input = UnitCostInput {
    ///     invoice_value: Decimal::from(3840),
    ///     total_packets_produced: 240,
    ///     packaged_fillet_kg: Decimal::from(96),
    ///     total_boxes_produced: Decimal::from(10),
    ///     fillet_type: FilletType::LightPack,
    /// };
    /// let breakdown = UnitCostBreakdown::compute(&input).unwrap();
    /// assert_eq!(breakdown.fillet.per_box, Decimal::from(384));
    ///
    /// let unpaid = UnitCostInput { invoice_value: Decimal::ZERO, ..input };
    /// assert!(UnitCostBreakdown::compute(&unpaid).is_none());
    /// ```
    #[must_use]
    pub fn compute(input: &UnitCostInput) -> Option<Self> {
        Self::compute_exact(input).map(|exact| Self {
            fillet: exact.fillet.rounded(),
            packaging: exact.packaging.rounded(),
            service: exact.service.rounded(),
            total: exact.total.rounded(),
        })
    }

    /// Compute the breakdown without rounding any cell.
    #[must_use]
    pub fn compute_exact(input: &UnitCostInput) -> Option<Self> {
        if input.total_packets_produced == 0 || input.invoice_value <= Decimal::ZERO {
            return None;
        }

        let fillet = UnitCosts {
            per_packet: ratio(input.invoice_value, Decimal::from(input.total_packets_produced))?,
            per_kg: ratio(input.invoice_value, input.packaged_fillet_kg)?,
            per_box: ratio(input.invoice_value, input.total_boxes_produced)?,
        };

        let fillet_type = input.fillet_type;
        let kg_divisor = Decimal::from(fillet_type.kg_divisor());
        let packaging_per_packet = ratio(BOX_FEE, Decimal::from(fillet_type.packets_per_box()))?
            .checked_add(fillet_type.per_packet_base_cost())?;
        let packaging_per_kg =
            ratio(packaging_per_packet, kg_divisor)?.checked_mul(PACKAGING_KG_SCALE)?;
        let packaging = UnitCosts {
            per_packet: packaging_per_packet,
            per_kg: packaging_per_kg,
            per_box: packaging_per_kg.checked_mul(BOX_NET_KG)?,
        };

        let service = UnitCosts {
            per_packet: SERVICE_PER_PACKET_FACTOR.checked_mul(kg_divisor)?,
            per_kg: SERVICE_PER_KG,
            per_box: SERVICE_PER_BOX,
        };

        let total = UnitCosts::checked_sum([&fillet, &packaging, &service])?;

        Some(Self {
            fillet,
            packaging,
            service,
            total,
        })
    }
}
