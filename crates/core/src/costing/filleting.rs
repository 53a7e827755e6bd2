//! Intake and filleting-stage figures.

use rust_decimal::Decimal;

use super::weights::sum_buckets;
use super::{HUNDRED, ratio};
use crate::types::{Lot, SizeBucket, SizeBucketedWeight};

/// Showroom weight minus invoice weight. Negative when fish went missing
/// between the invoice and the showroom scale.
#[must_use]
pub fn intake_gap_kg(lot: &Lot) -> Decimal {
    sum_buckets(lot.showroom_weight.as_ref())
        .saturating_sub(sum_buckets(lot.invoice_weight.as_ref()))
}

/// Frozen fillet weight minus fresh fillet weight.
#[must_use]
pub fn filleting_difference_kg(lot: &Lot) -> Decimal {
    sum_buckets(lot.frozen_fillet_weight.as_ref())
        .saturating_sub(sum_buckets(lot.fresh_fillet_weight.as_ref()))
}

/// Weight gained (or lost) in freezing, as a percentage of the fresh weight.
///
/// Zero when no fresh fillet has been weighed.
#[must_use]
pub fn freezing_gain_percent(fresh_kg: Decimal, frozen_kg: Decimal) -> Decimal {
    ratio(frozen_kg, fresh_kg)
        .and_then(|r| r.checked_sub(Decimal::ONE))
        .and_then(|r| r.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Packaged fillet weight implied by the filleting stage: fresh plus frozen,
/// booked in the small bucket.
///
/// `None` while nothing has been filleted.
#[must_use]
pub fn suggested_packaged_fillet(lot: &Lot) -> Option<SizeBucketedWeight> {
    let total = sum_buckets(lot.fresh_fillet_weight.as_ref())
        .saturating_add(sum_buckets(lot.frozen_fillet_weight.as_ref()));
    (total > Decimal::ZERO).then(|| SizeBucketedWeight::single(SizeBucket::Small, total))
}
