//! ordersight-core — domain models and collaborator contracts for the
//! fulfillment operations dashboard.
//!
//! This crate owns:
//! - the wire-facing feed models ([`models`])
//! - the canonical status vocabulary ([`models::status`])
//! - the async read contracts the engine consumes ([`feeds`])
//! - the workspace error taxonomy ([`error`])

pub mod error;
pub mod feeds;
pub mod models;
pub mod time;

pub use error::{OrdersightError, OrdersightResult};
