//! Subgraph data set and the summaries derived from it.
//!
//! Input numbers arrive as decimal strings, exactly as the indexing service
//! returns them; outputs are plain numbers ready for the dashboard.

use serde::{Deserialize, Serialize};

/// Exchange factory totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factory {
    pub id: String,
    #[serde(default)]
    pub pool_count: String,
    #[serde(default)]
    pub tx_count: String,
    #[serde(default, rename = "totalVolumeETH")]
    pub total_volume_eth: String,
    #[serde(default, rename = "totalFeesETH")]
    pub total_fees_eth: String,
    #[serde(default, rename = "totalValueLockedUSD")]
    pub total_value_locked_usd: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolToken {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

/// Liquidity pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: String,
    pub token0: PoolToken,
    pub token1: PoolToken,
    /// Fee in hundredths of a basis point (3000 = 0.30%)
    #[serde(default)]
    pub fee_tier: String,
    #[serde(default, rename = "totalValueLockedUSD")]
    pub total_value_locked_usd: String,
    #[serde(default, rename = "volumeUSD")]
    pub volume_usd: String,
}

/// Price bundle; the first one carries the current ETH price
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default, rename = "ethPriceUSD")]
    pub eth_price_usd: String,
}

/// Raw data set as fetched from the indexing service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    #[serde(default)]
    pub factories: Vec<Factory>,
    #[serde(default)]
    pub bundles: Vec<Bundle>,
    #[serde(default)]
    pub pools: Vec<Pool>,
}

/// An amount in ETH and its USD value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EthUsd {
    pub eth: f64,
    pub usd: f64,
}

impl EthUsd {
    pub fn at_price(eth: f64, eth_price: f64) -> Self {
        Self {
            eth,
            usd: eth * eth_price,
        }
    }
}

/// Totals across all factories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetrics {
    pub total_volume: EthUsd,
    pub total_fees: EthUsd,
    pub total_pools: u64,
    #[serde(rename = "totalTVL")]
    pub total_tvl: f64,
    pub eth_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummary {
    pub id: String,
    /// `TOKEN0/TOKEN1`
    pub pair: String,
    /// Percentage with two decimals, e.g. `0.30%`
    pub fee_tier: String,
    pub tvl: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorySummary {
    pub id: String,
    pub pool_count: u64,
    pub tx_count: u64,
    pub volume: EthUsd,
    pub fees: EthUsd,
    pub tvl: f64,
}

/// Everything the analytics dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub metrics: AnalyticsMetrics,
    pub pools: Vec<PoolSummary>,
    pub factories: Vec<FactorySummary>,
}
