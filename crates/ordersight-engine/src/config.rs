//! Engine configuration.

use chrono::{DateTime, Duration, Utc};

/// Configuration for the cross-feed deduplication policy.
///
/// The window and the matching phrases are deliberately configuration
/// rather than buried literals: if the upstream ingestion wording or
/// clock skew changes, this is the one place to adjust.
#[derive(Debug, Clone)]
pub struct DedupConfig {
    /// Tolerance around the activity event's timestamp within which a
    /// system import fact is considered the same real-world occurrence.
    pub window: Duration,
    /// System audit action recorded when an order is ingested from the
    /// upstream system.
    pub import_action: String,
    /// Phrase (matched case-insensitively) the synthetic activity
    /// event's reason carries for the same ingestion.
    pub ingestion_phrase: String,
    /// Replacement description for a candidate that survives dedup.
    pub relabel: String,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            window: Duration::minutes(10),
            import_action: "imported_from_inflow".into(),
            ingestion_phrase: "order ingested from inflow".into(),
            relabel: "Imported from source system (Picked)".into(),
        }
    }
}

/// Options for one timeline merge pass.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Events strictly before this instant are discarded.
    pub since: DateTime<Utc>,
    /// When false, system audit events are excluded entirely and the
    /// dedup step is skipped (the signal it depends on is absent).
    pub include_system_audit: bool,
    /// Free-text filter; empty means no filtering.
    pub search: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            since: DateTime::UNIX_EPOCH,
            include_system_audit: true,
            search: String::new(),
        }
    }
}

/// Configuration for snapshot refreshes.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Per-feed fetch timeout. A feed that exceeds it contributes an
    /// empty result and a user-visible banner instead of hanging the
    /// refresh forever.
    pub fetch_timeout: std::time::Duration,
    /// Page size requested from the audit feed.
    pub audit_page_limit: u32,
    /// Upper bound on cursor-following per refresh.
    pub max_audit_pages: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: std::time::Duration::from_secs(30),
            audit_page_limit: 200,
            max_audit_pages: 10,
        }
    }
}
