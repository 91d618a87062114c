//! Integration tests for order identifier resolution and inspection.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ordersight_core::error::{OrdersightError, OrdersightResult};
use ordersight_core::feeds::OrderDirectory;
use ordersight_core::models::audit::AuditLogEntry;
use ordersight_core::models::order::{OrderDetail, OrderSummary};
use ordersight_core::models::status::CanonicalStatus;
use ordersight_engine::{OrderInspector, OrderResolver};
use uuid::Uuid;

/// In-memory directory that records how each lookup path is used.
#[derive(Clone, Default)]
struct FakeDirectory {
    by_number: HashMap<String, OrderSummary>,
    details: HashMap<Uuid, OrderDetail>,
    audit_logs: HashMap<Uuid, Vec<AuditLogEntry>>,
    number_lookups: Arc<AtomicUsize>,
    detail_lookups: Arc<AtomicUsize>,
}

impl OrderDirectory for FakeDirectory {
    async fn find_by_number(&self, number: &str) -> OrdersightResult<Option<OrderSummary>> {
        self.number_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.by_number.get(number).cloned())
    }

    async fn get_detail(&self, id: Uuid) -> OrdersightResult<OrderDetail> {
        self.detail_lookups.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| OrdersightError::NotFound {
                entity: "order".into(),
                id: id.to_string(),
            })
    }

    async fn fetch_audit_log(&self, id: Uuid) -> OrdersightResult<Vec<AuditLogEntry>> {
        Ok(self.audit_logs.get(&id).cloned().unwrap_or_default())
    }
}

fn known_order() -> (Uuid, FakeDirectory) {
    let id = Uuid::new_v4();
    let mut dir = FakeDirectory::default();
    dir.by_number.insert(
        "TH3270".into(),
        OrderSummary {
            id,
            order_number: "TH3270".into(),
        },
    );
    dir.details.insert(
        id,
        OrderDetail {
            id,
            order_number: "TH3270".into(),
            inflow_order_id: Some("IF-9".into()),
            metadata: serde_json::Value::Null,
        },
    );
    (id, dir)
}

#[tokio::test]
async fn id_shaped_token_skips_number_lookup() {
    let (id, dir) = known_order();
    let resolver = OrderResolver::new(dir.clone());

    let resolved = resolver.resolve(&id.to_string()).await.unwrap();
    assert_eq!(resolved.canonical_id, id);
    assert_eq!(resolved.display_number.as_deref(), Some("TH3270"));
    assert_eq!(dir.number_lookups.load(Ordering::SeqCst), 0);
    assert_eq!(dir.detail_lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn id_token_is_case_insensitive() {
    let (id, dir) = known_order();
    let resolver = OrderResolver::new(dir.clone());

    let token = id.to_string().to_uppercase();
    let resolved = resolver.resolve(&token).await.unwrap();
    assert_eq!(resolved.canonical_id, id);
    assert_eq!(dir.number_lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_enrichment_is_not_fatal() {
    // An id-shaped token for an order the detail endpoint cannot serve.
    let dir = FakeDirectory::default();
    let resolver = OrderResolver::new(dir.clone());

    let id = Uuid::new_v4();
    let resolved = resolver.resolve(&id.to_string()).await.unwrap();
    assert_eq!(resolved.canonical_id, id);
    assert_eq!(resolved.display_number, None);
}

#[tokio::test]
async fn order_number_token_uses_exact_match_lookup() {
    let (id, dir) = known_order();
    let resolver = OrderResolver::new(dir.clone());

    let resolved = resolver.resolve("TH3270").await.unwrap();
    assert_eq!(resolved.canonical_id, id);
    assert_eq!(resolved.display_number.as_deref(), Some("TH3270"));
    assert_eq!(dir.number_lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unknown_order_number_is_fatal() {
    let dir = FakeDirectory::default();
    let resolver = OrderResolver::new(dir);

    let err = resolver.resolve("TH9999").await.unwrap_err();
    assert!(matches!(err, OrdersightError::NotFound { .. }));
}

#[tokio::test]
async fn empty_token_fails_before_any_lookup() {
    let dir = FakeDirectory::default();
    let resolver = OrderResolver::new(dir.clone());

    for token in ["", "   ", "\t"] {
        let err = resolver.resolve(token).await.unwrap_err();
        assert!(matches!(err, OrdersightError::Validation { .. }));
    }
    assert_eq!(dir.number_lookups.load(Ordering::SeqCst), 0);
    assert_eq!(dir.detail_lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn inspector_resolves_and_computes_path() {
    let (id, mut dir) = known_order();
    dir.audit_logs.insert(
        id,
        vec![
            AuditLogEntry {
                id: Uuid::new_v4(),
                timestamp: "2026-03-01T10:00:00Z".into(),
                from_status: None,
                to_status: "picked".into(),
                reason: None,
                changed_by: Some("system".into()),
            },
            AuditLogEntry {
                id: Uuid::new_v4(),
                timestamp: "2026-03-01T10:30:00Z".into(),
                from_status: Some("picked".into()),
                to_status: "qa".into(),
                reason: None,
                changed_by: Some("bob".into()),
            },
        ],
    );

    let inspector = OrderInspector::new(dir);
    let inspection = inspector.inspect("TH3270").await.unwrap();

    assert_eq!(inspection.order.canonical_id, id);
    assert!(inspection.path.reached.contains(&CanonicalStatus::Qa));
    assert_eq!(
        inspection
            .path
            .duration_by_arrival
            .get(&CanonicalStatus::Qa),
        Some(&(30 * 60 * 1000))
    );
}
