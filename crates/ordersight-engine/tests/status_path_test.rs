//! Integration tests for status path and dwell duration computation.

use ordersight_core::models::audit::AuditLogEntry;
use ordersight_core::models::status::CanonicalStatus;
use ordersight_engine::compute_status_path;
use uuid::Uuid;

fn entry(timestamp: &str, from: Option<&str>, to: &str) -> AuditLogEntry {
    AuditLogEntry {
        id: Uuid::new_v4(),
        timestamp: timestamp.into(),
        from_status: from.map(Into::into),
        to_status: to.into(),
        reason: None,
        changed_by: None,
    }
}

#[test]
fn dwell_durations_assigned_to_arrival_state() {
    // t=0, t=600000ms, t=900000ms from the epoch.
    let log = vec![
        entry("1970-01-01T00:00:00Z", None, "picked"),
        entry("1970-01-01T00:10:00Z", Some("picked"), "qa"),
        entry("1970-01-01T00:15:00Z", Some("qa"), "delivered"),
    ];

    let path = compute_status_path(&log);

    assert_eq!(
        path.reached.iter().copied().collect::<Vec<_>>(),
        vec![
            CanonicalStatus::Picked,
            CanonicalStatus::Qa,
            CanonicalStatus::Delivered
        ]
    );
    assert_eq!(path.duration_by_arrival.get(&CanonicalStatus::Qa), Some(&600_000));
    assert_eq!(
        path.duration_by_arrival.get(&CanonicalStatus::Delivered),
        Some(&300_000)
    );
    // The first transition has no predecessor.
    assert_eq!(path.duration_by_arrival.get(&CanonicalStatus::Picked), None);
}

#[test]
fn input_order_is_irrelevant() {
    let log = vec![
        entry("1970-01-01T00:15:00Z", Some("qa"), "delivered"),
        entry("1970-01-01T00:00:00Z", None, "picked"),
        entry("1970-01-01T00:10:00Z", Some("picked"), "qa"),
    ];

    let path = compute_status_path(&log);
    assert_eq!(path.duration_by_arrival.get(&CanonicalStatus::Qa), Some(&600_000));
    assert_eq!(
        path.duration_by_arrival.get(&CanonicalStatus::Delivered),
        Some(&300_000)
    );
}

#[test]
fn unrecognized_labels_are_dropped_from_path_and_durations() {
    let log = vec![
        entry("2026-03-01T10:00:00Z", None, "picked"),
        entry("2026-03-01T10:05:00Z", Some("picked"), "mystery_state"),
        entry("2026-03-01T10:20:00Z", Some("mystery_state"), "qa"),
    ];

    let path = compute_status_path(&log);
    assert!(!path
        .reached
        .iter()
        .any(|s| s.to_string().contains("mystery")));
    assert_eq!(path.transitions.len(), 2);
    // QA's dwell spans from the last recognized transition.
    assert_eq!(
        path.duration_by_arrival.get(&CanonicalStatus::Qa),
        Some(&(20 * 60 * 1000))
    );
}

#[test]
fn backward_timestamps_clamp_to_zero() {
    // Same instant and an earlier-than-previous instant after sorting:
    // the Shipping arrival lands at the same time as QA.
    let log = vec![
        entry("2026-03-01T10:00:00Z", None, "picked"),
        entry("2026-03-01T10:05:00Z", Some("picked"), "qa"),
        entry("2026-03-01T10:05:00Z", Some("qa"), "shipping"),
    ];

    let path = compute_status_path(&log);
    assert_eq!(
        path.duration_by_arrival.get(&CanonicalStatus::Shipping),
        Some(&0)
    );
}

#[test]
fn from_statuses_count_as_reached() {
    // The first row's source state was never a target but was observed.
    let log = vec![entry("2026-03-01T10:00:00Z", Some("picked"), "qa")];

    let path = compute_status_path(&log);
    assert!(path.reached.contains(&CanonicalStatus::Picked));
    assert!(path.reached.contains(&CanonicalStatus::Qa));
}

#[test]
fn empty_log_produces_empty_path() {
    let path = compute_status_path(&[]);
    assert!(path.transitions.is_empty());
    assert!(path.reached.is_empty());
    assert!(path.duration_by_arrival.is_empty());
}

#[test]
fn separator_variants_in_log_entries_canonicalize() {
    let log = vec![
        entry("2026-03-01T10:00:00Z", None, "Pre-Delivery"),
        entry("2026-03-01T10:01:00Z", Some("PRE DELIVERY"), "in_delivery"),
    ];

    let path = compute_status_path(&log);
    assert!(path.reached.contains(&CanonicalStatus::PreDelivery));
    assert!(path.reached.contains(&CanonicalStatus::InDelivery));
}
