//! ordersight-engine — timeline reconciliation and status-path engine.
//!
//! This crate merges the two operational event feeds into one
//! deduplicated, time-descending timeline ([`timeline`]), resolves
//! user-entered order identifiers ([`resolver`]), computes per-state
//! dwell durations for a single order ([`status_path`]), and
//! coordinates sequence-fenced snapshot refreshes ([`refresh`]).
//!
//! All computation is synchronous and O(n) in feed size; only feed
//! retrieval is async, via the `ordersight-core` collaborator traits.

pub mod config;
pub mod dedup;
pub mod inspector;
pub mod refresh;
pub mod resolver;
pub mod status_path;
pub mod timeline;

pub use config::{DedupConfig, MergeOptions, RefreshConfig};
pub use inspector::{OrderInspection, OrderInspector};
pub use refresh::{DashboardState, RefreshCoordinator, TimelineSnapshot};
pub use resolver::OrderResolver;
pub use status_path::{StatusPath, compute_status_path};
pub use timeline::TimelineMerger;
