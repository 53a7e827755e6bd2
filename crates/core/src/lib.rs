//! Lote Core - Lot types and the cost/yield calculation engine.
//!
//! This crate provides everything the lot tracker derives from raw lot data:
//! - weight totals across the four fish-size buckets
//! - packaging output and yield percentages
//! - packaging costs and the fillet/packaging/service unit-cost breakdown
//! - margin against the fixed client price, and dashboard aggregates
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. Every derived value is recomputed from the [`Lot`]
//! passed in; nothing is cached between calls.
//!
//! # Modules
//!
//! - [`types`] - Lot record, size-bucketed weights, fillet type and status
//! - [`costing`] - Yield, packaging, unit-cost, margin and dashboard calculations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod costing;
pub mod types;

pub use costing::{
    CostCategory, DashboardSummary, LotMetrics, UnitCostBreakdown, UnitCostInput, UnitCosts,
    average_cost_per_box, margin_percent, round_money, sum_buckets,
};
pub use types::*;
