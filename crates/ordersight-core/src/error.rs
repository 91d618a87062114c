//! Error types for the ordersight system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersightError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Timed out waiting for {what}")]
    Timeout { what: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OrdersightResult<T> = Result<T, OrdersightError>;
