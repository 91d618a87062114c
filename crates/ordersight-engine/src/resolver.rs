//! Order identifier resolution.

use ordersight_core::error::{OrdersightError, OrdersightResult};
use ordersight_core::feeds::OrderDirectory;
use ordersight_core::models::order::ResolvedOrderRef;
use tracing::debug;
use uuid::Uuid;

/// Resolves a user-entered token — canonical id or human-facing order
/// number — to a canonical order reference.
///
/// Generic over the directory implementation so the engine has no
/// dependency on the HTTP client crate.
pub struct OrderResolver<D: OrderDirectory> {
    directory: D,
}

impl<D: OrderDirectory> OrderResolver<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Resolve `token` to a canonical order reference.
    ///
    /// A token shaped like a canonical id (a version 1–5 UUID, any
    /// case) is used directly; its display number is enriched
    /// best-effort via the detail lookup and a failed enrichment is
    /// non-fatal. Any other token is treated as an order number and
    /// resolved through the exact-match lookup, where a miss is fatal
    /// to this resolution.
    ///
    /// Empty or whitespace-only tokens fail validation before any
    /// lookup is attempted.
    pub async fn resolve(&self, token: &str) -> OrdersightResult<ResolvedOrderRef> {
        let token = token.trim();
        if token.is_empty() {
            return Err(OrdersightError::Validation {
                message: "order identifier must not be empty".into(),
            });
        }

        if let Some(id) = parse_canonical_id(token) {
            let display_number = match self.directory.get_detail(id).await {
                Ok(detail) => Some(detail.order_number),
                Err(err) => {
                    debug!(order_id = %id, error = %err, "order number enrichment failed");
                    None
                }
            };
            return Ok(ResolvedOrderRef {
                canonical_id: id,
                display_number,
            });
        }

        match self.directory.find_by_number(token).await? {
            Some(summary) => Ok(ResolvedOrderRef {
                canonical_id: summary.id,
                display_number: Some(summary.order_number),
            }),
            None => Err(OrdersightError::NotFound {
                entity: "order".into(),
                id: token.into(),
            }),
        }
    }
}

/// Parse a canonical-id-shaped token: a textual UUID of version 1–5.
fn parse_canonical_id(token: &str) -> Option<Uuid> {
    let id = Uuid::parse_str(token).ok()?;
    (1..=5).contains(&id.get_version_num()).then_some(id)
}
