//! ordersight-client — reqwest implementations of the ordersight-core
//! collaborator traits against the fulfillment operations API.

mod client;
mod config;
mod error;

pub use client::OpsApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
