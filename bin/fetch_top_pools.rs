//! # Fetch Top Pools
//!
//! One-shot command that queries a Balancer V2 subgraph and prints the top pools
//! by liquidity as JSON on stdout.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin fetch_top_pools -- --chain-id 42161 \
//!     --subgraph-url https://api.thegraph.com/subgraphs/name/balancer-labs/balancer-arbitrum-v2 \
//!     --max-pools 20
//! ```
//!
//! Flags left unset fall back to `Config.toml` / `SDK_SUBGRAPH_*` variables.
//! An unreachable subgraph prints `[]`, same as the library contract.

use anyhow::Result;
use balancer_subgraph_pools::{
    network, HttpTransport, Settings, SubgraphPoolDataService,
};
use clap::Parser;
use log::info;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "fetch_top_pools", about = "Fetch the top Balancer V2 pools from a subgraph")]
struct Args {
    /// Chain id (1, 10, 137, 250, 42161)
    #[arg(long)]
    chain_id: Option<u64>,

    /// Subgraph GraphQL endpoint
    #[arg(long)]
    subgraph_url: Option<String>,

    /// Number of pools to request
    #[arg(long)]
    max_pools: Option<u32>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    env_logger::init();

    let args = Args::parse();
    let mut settings = Settings::new()?;

    if let Some(chain_id) = args.chain_id {
        settings.subgraph.chain_id = chain_id;
    }
    if args.subgraph_url.is_some() {
        settings.subgraph.url = args.subgraph_url;
    }
    if args.max_pools.is_some() {
        settings.subgraph.max_pools_fetched = args.max_pools;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        settings.subgraph.request_timeout_ms = timeout_ms;
    }

    if !network::is_supported(settings.subgraph.chain_id) {
        info!(
            "Chain {} has no Balancer subgraph query; result will be empty",
            settings.subgraph.chain_id
        );
    }

    let transport =
        HttpTransport::with_timeout(Duration::from_millis(settings.subgraph.request_timeout_ms))?;
    let service = SubgraphPoolDataService::with_transport(settings.subgraph.to_config(), transport);

    info!(
        "Fetching up to {} pools for chain {} from {}",
        service.max_pools_fetched(),
        service.chain_id(),
        service.subgraph_url().unwrap_or("<no subgraph url>")
    );

    let pools = service.fetch_top_pools().await;

    println!("{}", serde_json::to_string_pretty(&pools)?);
    eprintln!("{} pools fetched", pools.len());

    Ok(())
}
