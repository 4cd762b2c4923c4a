//! # Balancer Subgraph Pools
//!
//! Data-access adapter that pulls the top Balancer V2 pools by liquidity from a
//! chain's subgraph and hands them to a pool-routing/pricing engine.
//!
//! ## Overview
//!
//! - **Query selection**: each supported chain maps to one GraphQL document,
//!   resolved once when the service is built (see [`network`]).
//! - **Transport**: GraphQL-over-HTTP behind the [`GraphQlTransport`] trait.
//! - **Service**: [`SubgraphPoolDataService`] issues one request per call and turns
//!   every failure into an empty pool list, so routing keeps working when an index
//!   is down.

/// Subgraph pool and token records
pub mod pools;
/// GraphQL documents and query constants
pub mod queries;
/// Chain id to query mapping
pub mod network;
/// GraphQL-over-HTTP transport
pub mod transport;
/// Pool data service consumed by routing engines
pub mod pool_data_service;
/// Configuration management
pub mod settings;

// Re-exports for convenience
pub use pool_data_service::{PoolDataService, SubgraphConfig, SubgraphPoolDataService};
pub use pools::{SubgraphPool, SubgraphToken};
pub use queries::DEFAULT_MAX_POOLS_FETCHED;
pub use settings::Settings;
pub use transport::{GraphQlTransport, HttpTransport, SubgraphError};
