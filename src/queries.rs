// src/queries.rs
// GraphQL documents sent to the Balancer V2 subgraphs

/// Page size used when the caller does not set one (or sets it to zero).
pub const DEFAULT_MAX_POOLS_FETCHED: u32 = 96;

/// `totalShares` values the subgraph reports for drained or freshly created pools.
/// Matched as exact strings by the index, so they must stay in this form.
pub const EXCLUDED_TOTAL_SHARES: [&str; 2] = ["0", "0.000000000001"];

/// Name of the single variable every pool query takes.
pub const MAX_POOLS_FETCHED_VAR: &str = "maxPoolsFetched";

/// Top pools by liquidity, including the linear/boosted, element and gyro fields.
pub const QUERY_WITH_LINEAR: &str = r#"
    query fetchTopPoolsWithLinear($maxPoolsFetched: Int!) {
        pools: pools(
            first: $maxPoolsFetched
            where: { swapEnabled: true, totalShares_not_in: ["0", "0.000000000001"] }
            orderBy: totalLiquidity
            orderDirection: desc
        ) {
            id
            address
            poolType
            swapFee
            totalShares
            tokens {
                address
                balance
                decimals
                weight
                priceRate
            }
            tokensList
            totalWeight
            amp
            expiryTime
            unitSeconds
            principalToken
            baseToken
            swapEnabled
            wrappedIndex
            mainIndex
            lowerTarget
            upperTarget
            sqrtAlpha
            sqrtBeta
            root3Alpha
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_filters_on_sentinel_shares() {
        let filter = format!(
            "totalShares_not_in: [{}]",
            EXCLUDED_TOTAL_SHARES
                .iter()
                .map(|s| format!("\"{}\"", s))
                .collect::<Vec<_>>()
                .join(", ")
        );
        assert!(QUERY_WITH_LINEAR.contains(&filter), "missing filter: {}", filter);
        assert!(QUERY_WITH_LINEAR.contains("swapEnabled: true"));
    }

    #[test]
    fn test_query_orders_by_liquidity_and_uses_page_variable() {
        assert!(QUERY_WITH_LINEAR.contains("orderBy: totalLiquidity"));
        assert!(QUERY_WITH_LINEAR.contains("orderDirection: desc"));
        assert!(QUERY_WITH_LINEAR.contains(&format!("first: ${}", MAX_POOLS_FETCHED_VAR)));
        assert!(QUERY_WITH_LINEAR.contains(&format!("${}: Int!", MAX_POOLS_FETCHED_VAR)));
    }

    #[test]
    fn test_query_selects_linear_and_gyro_fields() {
        for field in [
            "wrappedIndex",
            "mainIndex",
            "lowerTarget",
            "upperTarget",
            "sqrtAlpha",
            "sqrtBeta",
            "root3Alpha",
            "priceRate",
        ] {
            assert!(QUERY_WITH_LINEAR.contains(field), "missing field {}", field);
        }
    }
}
