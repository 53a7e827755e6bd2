//! Weight totals.

use rust_decimal::Decimal;

use crate::types::SizeBucketedWeight;

/// Total of the four size buckets; a missing weight counts as zero.
///
/// Every weight total in the crate goes through here so that yields, costs
/// and dashboard figures agree on the same number.
///
/// ```
/// use lote_core::{SizeBucketedWeight, sum_buckets};
/// use rust_decimal::Decimal;
///
/// assert_eq!(sum_buckets(None), Decimal::ZERO);
///
/// let weight = SizeBucketedWeight::new(10.into(), 5.into(), Decimal::ZERO, Decimal::ZERO);
/// assert_eq!(sum_buckets(Some(&weight)), Decimal::from(15));
/// ```
#[must_use]
pub fn sum_buckets(weight: Option<&SizeBucketedWeight>) -> Decimal {
    weight.map_or(Decimal::ZERO, SizeBucketedWeight::total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_buckets_none_is_zero() {
        assert_eq!(sum_buckets(None), Decimal::ZERO);
    }

    #[test]
    fn test_sum_buckets_partial_record() {
        let weight: SizeBucketedWeight = serde_json::from_str(r#"{"P": 10, "M": 5}"#).unwrap();
        assert_eq!(sum_buckets(Some(&weight)), Decimal::from(15));
    }

    #[test]
    fn test_sum_buckets_fractional() {
        let weight: SizeBucketedWeight =
            serde_json::from_str(r#"{"P": "0.1", "M": "0.2", "G": "0.3", "GG": "0.4"}"#).unwrap();
        assert_eq!(sum_buckets(Some(&weight)), Decimal::ONE);
    }

    #[test]
    fn test_sum_buckets_saturates() {
        let huge: Decimal = "30000000000000000000000000000".parse().unwrap();
        let weight = SizeBucketedWeight::new(huge, huge, huge, huge);
        assert_eq!(sum_buckets(Some(&weight)), Decimal::MAX);
    }
}
