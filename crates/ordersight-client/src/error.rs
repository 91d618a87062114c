//! Client-specific error types and conversions.

use ordersight_core::error::OrdersightError;

/// HTTP-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<ClientError> for OrdersightError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::Http(inner) if inner.is_timeout() => OrdersightError::Timeout {
                what: "operations API request".into(),
            },
            _ => OrdersightError::Upstream(err.to_string()),
        }
    }
}
