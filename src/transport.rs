//! # GraphQL Transport
//!
//! Sends a query document plus variables to a subgraph endpoint and hands back the
//! `data` object of the response.
//!
//! The [`GraphQlTransport`] trait is the seam between the pool data service and
//! the network, so tests (or callers with their own HTTP stack) can plug in a
//! different implementation. [`HttpTransport`] is the default one, built on
//! `reqwest`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};

/// Errors raised while querying a subgraph.
#[derive(Debug, thiserror::Error)]
pub enum SubgraphError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("GraphQL error: {0}")]
    GraphQl(String),
    #[error("Response has no data")]
    MissingData,
    #[error("Invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything able to execute a GraphQL query against an HTTP endpoint.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Executes `query` with `variables` against `endpoint`.
    ///
    /// Returns the `data` object of the response. Transport failures, non-2xx
    /// statuses and GraphQL `errors` are all reported as [`SubgraphError`].
    async fn request(
        &self,
        endpoint: &str,
        query: &str,
        variables: Value,
    ) -> Result<Value, SubgraphError>;
}

#[async_trait]
impl<T: GraphQlTransport + ?Sized> GraphQlTransport for Arc<T> {
    async fn request(
        &self,
        endpoint: &str,
        query: &str,
        variables: Value,
    ) -> Result<Value, SubgraphError> {
        (**self).request(endpoint, query, variables).await
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

/// GraphQL-over-HTTP transport (POST, JSON body).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, SubgraphError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn request(
        &self,
        endpoint: &str,
        query: &str,
        variables: Value,
    ) -> Result<Value, SubgraphError> {
        debug!("POST {} (variables: {})", endpoint, variables);

        let response = self
            .client
            .post(endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(SubgraphError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: GraphQlResponse = serde_json::from_slice(&bytes)?;

        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SubgraphError::GraphQl(message));
        }

        envelope.data.ok_or(SubgraphError::MissingData)
    }
}
