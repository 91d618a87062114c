//! Order lookup and resolution models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of an exact-match order-number lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: Uuid,
    pub order_number: String,
}

/// Order detail record, as returned by the detail lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: Uuid,
    pub order_number: String,
    /// Identifier of the originating record in the upstream ingestion
    /// system, when this order was imported rather than created here.
    #[serde(default)]
    pub inflow_order_id: Option<String>,
    /// Remaining detail fields the dashboard does not interpret.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// A resolved order reference.
///
/// `canonical_id` is the only identifier safe to use for subsequent
/// audit-log lookups; `display_number` is best-effort and may be
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedOrderRef {
    pub canonical_id: Uuid,
    pub display_number: Option<String>,
}
