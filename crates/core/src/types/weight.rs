//! Weights split by fish-size classification.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fish-size classification used to split weights and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeBucket {
    /// Small fish (`P`).
    #[serde(rename = "P")]
    Small,
    /// Medium fish (`M`).
    #[serde(rename = "M")]
    Medium,
    /// Large fish (`G`).
    #[serde(rename = "G")]
    Large,
    /// Extra-large fish (`GG`).
    #[serde(rename = "GG")]
    ExtraLarge,
}

impl SizeBucket {
    /// All buckets in display order.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::ExtraLarge];

    /// Short label used on forms and in stored records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "P",
            Self::Medium => "M",
            Self::Large => "G",
            Self::ExtraLarge => "GG",
        }
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A weight (kg) or count split across the four size buckets.
///
/// Missing buckets deserialize as zero, so a partially filled record from the
/// entry form is always usable.
///
/// ```
/// use lote_core::SizeBucketedWeight;
///
/// let weight: SizeBucketedWeight = serde_json::from_str(r#"{"P": 10, "M": 5}"#).unwrap();
/// assert_eq!(weight.total(), rust_decimal::Decimal::from(15));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBucketedWeight {
    #[serde(rename = "P")]
    pub small: Decimal,
    #[serde(rename = "M")]
    pub medium: Decimal,
    #[serde(rename = "G")]
    pub large: Decimal,
    #[serde(rename = "GG")]
    pub extra_large: Decimal,
}

impl SizeBucketedWeight {
    /// All four buckets at zero.
    pub const ZERO: Self = Self {
        small: Decimal::ZERO,
        medium: Decimal::ZERO,
        large: Decimal::ZERO,
        extra_large: Decimal::ZERO,
    };

    #[must_use]
    pub const fn new(small: Decimal, medium: Decimal, large: Decimal, extra_large: Decimal) -> Self {
        Self {
            small,
            medium,
            large,
            extra_large,
        }
    }

    /// A weight with everything in a single bucket.
    #[must_use]
    pub fn single(bucket: SizeBucket, value: Decimal) -> Self {
        let mut weight = Self::ZERO;
        weight.set(bucket, value);
        weight
    }

    #[must_use]
    pub const fn get(&self, bucket: SizeBucket) -> Decimal {
        match bucket {
            SizeBucket::Small => self.small,
            SizeBucket::Medium => self.medium,
            SizeBucket::Large => self.large,
            SizeBucket::ExtraLarge => self.extra_large,
        }
    }

    pub const fn set(&mut self, bucket: SizeBucket, value: Decimal) {
        match bucket {
            SizeBucket::Small => self.small = value,
            SizeBucket::Medium => self.medium = value,
            SizeBucket::Large => self.large = value,
            SizeBucket::ExtraLarge => self.extra_large = value,
        }
    }

    /// Iterate `(bucket, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SizeBucket, Decimal)> + '_ {
        SizeBucket::ALL.into_iter().map(|bucket| (bucket, self.get(bucket)))
    }

    /// Sum of the four buckets, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.small
            .saturating_add(self.medium)
            .saturating_add(self.large)
            .saturating_add(self.extra_large)
    }

    /// Bucket-wise sum, used when aggregating several lots. Saturates like
    /// [`total`](Self::total).
    #[must_use]
    pub fn combined(&self, other: &Self) -> Self {
        Self {
            small: self.small.saturating_add(other.small),
            medium: self.medium.saturating_add(other.medium),
            large: self.large.saturating_add(other.large),
            extra_large: self.extra_large.saturating_add(other.extra_large),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_total_sums_all_buckets() {
        let weight = SizeBucketedWeight::new(d("10.5"), d("5"), d("2.25"), d("0.25"));
        assert_eq!(weight.total(), d("18"));
    }

    #[test]
    fn test_missing_buckets_default_to_zero() {
        let weight: SizeBucketedWeight = serde_json::from_str(r#"{"G": 7}"#).unwrap();
        assert_eq!(weight.small, Decimal::ZERO);
        assert_eq!(weight.large, d("7"));
        assert_eq!(weight.total(), d("7"));
    }

    #[test]
    fn test_accepts_string_and_number_values() {
        let weight: SizeBucketedWeight =
            serde_json::from_str(r#"{"P": "1.5", "M": 2.5, "G": 0, "GG": 1}"#).unwrap();
        assert_eq!(weight.total(), d("5"));
    }

    #[test]
    fn test_single_bucket() {
        let weight = SizeBucketedWeight::single(SizeBucket::ExtraLarge, d("3"));
        assert_eq!(weight.get(SizeBucket::ExtraLarge), d("3"));
        assert_eq!(weight.total(), d("3"));
    }

    #[test]
    fn test_combined_is_bucket_wise() {
        let a = SizeBucketedWeight::new(d("1"), d("2"), d("3"), d("4"));
        let b = SizeBucketedWeight::new(d("10"), d("20"), d("30"), d("40"));
        let sum = a.combined(&b);
        assert_eq!(sum, SizeBucketedWeight::new(d("11"), d("22"), d("33"), d("44")));
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let huge = d("30000000000000000000000000000");
        let weight = SizeBucketedWeight::new(huge, huge, huge, huge);
        assert_eq!(weight.total(), Decimal::MAX);

        let sum = weight.combined(&weight);
        assert_eq!(sum.small, huge + huge);
        assert_eq!(sum.combined(&sum).small, Decimal::MAX);
    }

    #[test]
    fn test_iter_order_and_labels() {
        let weight = SizeBucketedWeight::new(d("1"), d("2"), d("3"), d("4"));
        let labels: Vec<String> = weight.iter().map(|(b, _)| b.to_string()).collect();
        assert_eq!(labels, ["P", "M", "G", "GG"]);
    }

    #[test]
    fn test_serializes_with_bucket_labels() {
        let weight = SizeBucketedWeight::single(SizeBucket::Small, d("1.5"));
        let json = serde_json::to_value(weight).unwrap();
        assert_eq!(json["P"], "1.5");
        assert_eq!(json["GG"], "0");
    }
}
