// src/network.rs
// Chain id -> subgraph query selection

use ethers::types::Chain;

use crate::queries::QUERY_WITH_LINEAR;

/// Chains with a Balancer V2 subgraph we know how to query.
pub const SUPPORTED_CHAINS: [Chain; 5] = [
    Chain::Mainnet,
    Chain::Polygon,
    Chain::Arbitrum,
    Chain::Optimism,
    Chain::Fantom,
];

/// Returns the query document for a chain, or `None` if the chain is not supported.
///
/// Each subgraph deployment has a slightly different schema, so every chain is
/// listed explicitly even though they currently share one document.
pub fn query_for(chain: Chain) -> Option<&'static str> {
    match chain {
        Chain::Mainnet => Some(QUERY_WITH_LINEAR),
        Chain::Polygon => Some(QUERY_WITH_LINEAR),
        Chain::Arbitrum => Some(QUERY_WITH_LINEAR),
        Chain::Optimism => Some(QUERY_WITH_LINEAR),
        Chain::Fantom => Some(QUERY_WITH_LINEAR),
        _ => None,
    }
}

/// Same as [`query_for`] but starting from a raw chain id.
/// Ids that `Chain` does not know about resolve to `None`.
pub fn query_for_chain(chain_id: u64) -> Option<&'static str> {
    Chain::try_from(chain_id).ok().and_then(query_for)
}

pub fn is_supported(chain_id: u64) -> bool {
    query_for_chain(chain_id).is_some()
}
