//! # Subgraph Pool Data Service
//!
//! Fetches the top Balancer V2 pools by liquidity from a chain's subgraph and hands
//! them to a routing engine through the [`PoolDataService`] trait.
//!
//! ## Failure model
//!
//! The routing engine treats an empty pool list as "this venue is unavailable", so
//! [`SubgraphPoolDataService::fetch_top_pools`] never fails:
//!
//! - No subgraph URL, or a chain without a known query: empty list, nothing logged.
//! - Any request or decode error: warning logged, empty list.
//!
//! Each call issues exactly one request. There is no retry and no cache; callers that
//! want either wrap the service.
//!
//! ## Example
//!
//! ```rust,no_run
//! use balancer_subgraph_pools::{SubgraphConfig, SubgraphPoolDataService};
//!
//! # async fn run() {
//! let service = SubgraphPoolDataService::new(SubgraphConfig {
//!     chain_id: 1,
//!     subgraph_url: Some("https://api.thegraph.com/subgraphs/name/balancer-labs/balancer-v2".into()),
//!     max_pools_fetched: None,
//! });
//! let pools = service.fetch_top_pools().await;
//! println!("{} pools", pools.len());
//! # }
//! ```

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::json;

use crate::network;
use crate::pools::{PoolsResponse, SubgraphPool};
use crate::queries::{DEFAULT_MAX_POOLS_FETCHED, MAX_POOLS_FETCHED_VAR};
use crate::transport::{GraphQlTransport, HttpTransport, SubgraphError};

/// Source of the on-chain pool universe for a routing engine.
#[async_trait]
pub trait PoolDataService: Send + Sync {
    /// Returns the pools to route through. An empty list means the source is
    /// currently unavailable.
    async fn get_pools(&self) -> Vec<SubgraphPool>;
}

/// Construction parameters for [`SubgraphPoolDataService`].
#[derive(Debug, Clone, Default)]
pub struct SubgraphConfig {
    pub chain_id: u64,
    /// `None` disables fetching
    pub subgraph_url: Option<String>,
    /// `None` or `0` falls back to [`DEFAULT_MAX_POOLS_FETCHED`]
    pub max_pools_fetched: Option<u32>,
}

/// Balancer V2 subgraph client.
///
/// Holds only immutable configuration, so a single instance can be shared
/// (e.g. behind an `Arc`) and called concurrently.
pub struct SubgraphPoolDataService<T = HttpTransport> {
    chain_id: u64,
    subgraph_url: Option<String>,
    max_pools_fetched: u32,
    query: Option<&'static str>,
    transport: T,
}

impl SubgraphPoolDataService<HttpTransport> {
    pub fn new(config: SubgraphConfig) -> Self {
        Self::with_transport(config, HttpTransport::default())
    }
}

impl<T: GraphQlTransport> SubgraphPoolDataService<T> {
    pub fn with_transport(config: SubgraphConfig, transport: T) -> Self {
        let max_pools_fetched = match config.max_pools_fetched {
            Some(n) if n > 0 => n,
            _ => DEFAULT_MAX_POOLS_FETCHED,
        };

        Self {
            chain_id: config.chain_id,
            subgraph_url: config.subgraph_url,
            max_pools_fetched,
            query: network::query_for_chain(config.chain_id),
            transport,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn subgraph_url(&self) -> Option<&str> {
        self.subgraph_url.as_deref()
    }

    pub fn max_pools_fetched(&self) -> u32 {
        self.max_pools_fetched
    }

    /// Query document resolved for this chain, if any.
    pub fn query(&self) -> Option<&'static str> {
        self.query
    }

    /// Whether a call will actually hit the network.
    pub fn is_enabled(&self) -> bool {
        self.query.is_some() && self.subgraph_url.is_some()
    }

    /// Fetches the top pools by liquidity. Never fails: see the module docs.
    pub async fn fetch_top_pools(&self) -> Vec<SubgraphPool> {
        match self.try_fetch_top_pools().await {
            Ok(pools) => pools,
            Err(e) => {
                warn!("Failed to fetch BalancerV2 subgraph pools: {}", e);
                Vec::new()
            }
        }
    }

    /// Same as [`fetch_top_pools`](Self::fetch_top_pools) but reports request failures.
    ///
    /// A disabled service (no URL or unsupported chain) still yields `Ok(vec![])`.
    pub async fn try_fetch_top_pools(&self) -> Result<Vec<SubgraphPool>, SubgraphError> {
        let (query, url) = match (self.query, self.subgraph_url.as_deref()) {
            (Some(query), Some(url)) => (query, url),
            _ => {
                debug!(
                    "Skipping Balancer subgraph fetch for chain {} (query: {}, url: {})",
                    self.chain_id,
                    self.query.is_some(),
                    self.subgraph_url.is_some()
                );
                return Ok(Vec::new());
            }
        };

        let variables = json!({ MAX_POOLS_FETCHED_VAR: self.max_pools_fetched });
        let data = self.transport.request(url, query, variables).await?;
        let response: PoolsResponse = serde_json::from_value(data)?;

        debug!(
            "Fetched {} Balancer pools from subgraph (chain {})",
            response.pools.len(),
            self.chain_id
        );
        Ok(response.pools)
    }
}

#[async_trait]
impl<T: GraphQlTransport> PoolDataService for SubgraphPoolDataService<T> {
    async fn get_pools(&self) -> Vec<SubgraphPool> {
        self.fetch_top_pools().await
    }
}
