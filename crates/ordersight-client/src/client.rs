//! HTTP client for the fulfillment operations API.

use chrono::{DateTime, Utc};
use ordersight_core::error::{OrdersightError, OrdersightResult};
use ordersight_core::feeds::{ActivityFeed, OrderDirectory, SystemAuditFeed};
use ordersight_core::models::activity::ActivityEvent;
use ordersight_core::models::audit::{AuditLogEntry, AuditPage, AuditQuery};
use ordersight_core::models::order::{OrderDetail, OrderSummary};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// API client for the fulfillment operations read endpoints.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct OpsApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl OpsApiClient {
    /// Creates a new API client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::InvalidBaseUrl("empty base URL".into()));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            token: config.api_token.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");

        let mut req = self.client.get(&url).query(query);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status { status, body })
        }
    }
}

impl ActivityFeed for OpsApiClient {
    async fn fetch_recent(&self, since: DateTime<Utc>) -> OrdersightResult<Vec<ActivityEvent>> {
        let events = self
            .get_json("/api/v1/activity", &[("since", since.to_rfc3339())])
            .await
            .map_err(OrdersightError::from)?;
        Ok(events)
    }
}

impl SystemAuditFeed for OpsApiClient {
    async fn fetch(&self, query: &AuditQuery) -> OrdersightResult<AuditPage> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(since) = query.since {
            params.push(("since", since.to_rfc3339()));
        }
        if let Some(entity_type) = &query.entity_type {
            params.push(("entity_type", entity_type.clone()));
        }
        if let Some(entity_id) = &query.entity_id {
            params.push(("entity_id", entity_id.clone()));
        }
        if let Some(action) = &query.action {
            params.push(("action", action.clone()));
        }
        if let Some(cursor) = &query.cursor {
            params.push(("cursor", cursor.clone()));
        }

        let page = self
            .get_json("/api/v1/audit-events", &params)
            .await
            .map_err(OrdersightError::from)?;
        Ok(page)
    }
}

impl OrderDirectory for OpsApiClient {
    async fn find_by_number(&self, number: &str) -> OrdersightResult<Option<OrderSummary>> {
        let result: Result<OrderSummary, ClientError> = self
            .get_json("/api/v1/orders/lookup", &[("number", number.to_owned())])
            .await;
        match result {
            Ok(summary) => Ok(Some(summary)),
            // An unknown order number is a miss, not a transport failure.
            Err(ClientError::Status { status: 404, .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn get_detail(&self, id: Uuid) -> OrdersightResult<OrderDetail> {
        let detail = self
            .get_json(&format!("/api/v1/orders/{id}"), &[])
            .await
            .map_err(OrdersightError::from)?;
        Ok(detail)
    }

    async fn fetch_audit_log(&self, id: Uuid) -> OrdersightResult<Vec<AuditLogEntry>> {
        let log = self
            .get_json(&format!("/api/v1/orders/{id}/audit-log"), &[])
            .await
            .map_err(OrdersightError::from)?;
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = OpsApiClient::new(&ClientConfig {
            base_url: "https://ops.example.com/".into(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.base_url, "https://ops.example.com");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = OpsApiClient::new(&ClientConfig {
            base_url: "   ".into(),
            ..ClientConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }
}
