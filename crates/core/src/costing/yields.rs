//! Packaging output and yield percentages.
//!
//! Output is measured in kilograms of packaged fillet: full master boxes at
//! [`BOX_NET_KG`] each, plus loose packets at the fillet type's gram weight.

use rust_decimal::Decimal;

use super::percent_of;
use crate::types::FilletType;

/// Net fillet content of one master box, whatever the packet size.
pub const BOX_NET_KG: Decimal = Decimal::from_parts(96, 0, 0, false, 1);

const GRAMS_PER_KG: Decimal = Decimal::ONE_THOUSAND;

/// Kilograms packed in full master boxes.
#[must_use]
pub fn box_output_kg(box_count: u32) -> Decimal {
    Decimal::from(box_count) * BOX_NET_KG
}

/// Kilograms packed in loose packets.
#[must_use]
pub fn packet_output_kg(packet_count: u32, fillet_type: FilletType) -> Decimal {
    Decimal::from(packet_count) * Decimal::from(fillet_type.gram_weight()) / GRAMS_PER_KG
}

/// Total packaged output in kilograms.
///
/// ```
/// use lote_core::FilletType;
/// use lote_core::costing::yields::packaged_output_kg;
///
/// // One box worth of loose packets weighs the same for both formats.
/// let light = packaged_output_kg(0, 24, FilletType::LightPack);
/// let heavy = packaged_output_kg(0, 12, FilletType::HeavyPack);
/// assert_eq!(light, heavy);
/// assert_eq!(light, rust_decimal::Decimal::new(96, 1));
/// ```
#[must_use]
pub fn packaged_output_kg(box_count: u32, packet_count: u32, fillet_type: FilletType) -> Decimal {
    box_output_kg(box_count) + packet_output_kg(packet_count, fillet_type)
}

/// Packets produced, counting each full box as `packets_per_box` packets.
#[must_use]
pub fn total_packets_produced(box_count: u32, packet_count: u32, fillet_type: FilletType) -> u64 {
    u64::from(box_count) * u64::from(fillet_type.packets_per_box()) + u64::from(packet_count)
}

/// Boxes produced, counting loose packets as a fraction of a box.
///
/// Returned at full precision; it is used as a divisor for per-box costs and
/// must not be rounded before that.
#[must_use]
pub fn total_boxes_produced(box_count: u32, packet_count: u32, fillet_type: FilletType) -> Decimal {
    Decimal::from(packet_count) / Decimal::from(fillet_type.packets_per_box())
        + Decimal::from(box_count)
}

/// Packaged output as a percentage of a reference intake weight.
///
/// A reference of zero (or less) yields `0`, not an error.
#[must_use]
pub fn yield_percent(packaged_output_kg: Decimal, reference_weight_total: Decimal) -> Decimal {
    percent_of(packaged_output_kg, reference_weight_total)
}
