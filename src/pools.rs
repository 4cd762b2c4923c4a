// src/pools.rs

use serde::{Deserialize, Serialize};

/// A pool as returned by the Balancer V2 subgraph.
///
/// This is the shape routing engines expect as their on-chain liquidity universe.
/// Numeric values are kept exactly as the index sends them: `BigDecimal`/`BigInt`
/// columns (including `amp`, `expiryTime`, `unitSeconds`) stay decimal strings and
/// `Int` columns stay integers.
///
/// ## Type-specific fields
///
/// - **Stable / MetaStable**: `amp`
/// - **Element**: `expiry_time`, `unit_seconds`, `principal_token`, `base_token`
/// - **Linear / Boosted**: `wrapped_index`, `main_index`, `lower_target`, `upper_target`
/// - **Gyro**: `sqrt_alpha`, `sqrt_beta`, `root3_alpha`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubgraphPool {
    /// 32-byte pool id (hex)
    pub id: String,
    pub address: String,
    pub pool_type: String,
    pub swap_fee: String,
    pub total_shares: String,
    pub tokens: Vec<SubgraphToken>,
    pub tokens_list: Vec<String>,
    pub total_weight: Option<String>,
    #[serde(default = "default_true")]
    pub swap_enabled: bool,

    pub amp: Option<String>,

    pub expiry_time: Option<String>,
    pub unit_seconds: Option<String>,
    pub principal_token: Option<String>,
    pub base_token: Option<String>,

    pub wrapped_index: Option<u32>,
    pub main_index: Option<u32>,
    pub lower_target: Option<String>,
    pub upper_target: Option<String>,

    pub sqrt_alpha: Option<String>,
    pub sqrt_beta: Option<String>,
    pub root3_alpha: Option<String>,
}

fn default_true() -> bool {
    true // the query only selects swap-enabled pools
}

/// One constituent token of a [`SubgraphPool`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubgraphToken {
    pub address: String,
    pub balance: String,
    pub decimals: u32,
    /// Only set for weighted pools
    pub weight: Option<String>,
    pub price_rate: String,
}

/// `data` object of a pools query response.
#[derive(Debug, Deserialize)]
pub struct PoolsResponse {
    pub pools: Vec<SubgraphPool>,
}
