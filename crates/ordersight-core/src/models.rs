//! Domain models for ordersight.
//!
//! These are the core types shared across all crates.

pub mod activity;
pub mod audit;
pub mod order;
pub mod status;
pub mod timeline;
