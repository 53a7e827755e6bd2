//! Lot types.
//!
//! This module provides the lot record and the value types it is built from.

pub mod lot;
pub mod status;
pub mod weight;

pub use lot::{Lot, LotValidationError, SHELF_LIFE_DAYS};
pub use status::{FilletType, LotStatus};
pub use weight::{SizeBucket, SizeBucketedWeight};
