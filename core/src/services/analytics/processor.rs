//! Arithmetic over the subgraph data set

use crate::domain::entities::analytics::{
    AnalyticsData, AnalyticsMetrics, AnalyticsReport, EthUsd, Factory, FactorySummary, Pool,
    PoolSummary,
};

/// Fee tiers are expressed in hundredths of a basis point
const FEE_TIER_DIVISOR: f64 = 10_000.0;

/// Reduce a data set into the dashboard report
///
/// Missing or unparsable numbers count as zero. The ETH price comes from
/// the first bundle; with no bundle every USD value is zero.
pub fn process_analytics(data: &AnalyticsData) -> AnalyticsReport {
    let eth_price = data
        .bundles
        .first()
        .map(|bundle| parse_decimal(&bundle.eth_price_usd))
        .unwrap_or_default();

    let report = AnalyticsReport {
        metrics: summarize_metrics(&data.factories, eth_price),
        pools: data.pools.iter().map(summarize_pool).collect(),
        factories: data
            .factories
            .iter()
            .map(|factory| summarize_factory(factory, eth_price))
            .collect(),
    };

    tracing::debug!(
        factories = report.factories.len(),
        pools = report.pools.len(),
        eth_price,
        "processed analytics data"
    );
    report
}

/// Totals across all factories
pub fn summarize_metrics(factories: &[Factory], eth_price: f64) -> AnalyticsMetrics {
    let total_volume: f64 = factories
        .iter()
        .map(|f| parse_decimal(&f.total_volume_eth))
        .sum();
    let total_fees: f64 = factories
        .iter()
        .map(|f| parse_decimal(&f.total_fees_eth))
        .sum();

    AnalyticsMetrics {
        total_volume: EthUsd::at_price(total_volume, eth_price),
        total_fees: EthUsd::at_price(total_fees, eth_price),
        total_pools: factories.iter().map(|f| parse_count(&f.pool_count)).sum(),
        total_tvl: factories
            .iter()
            .map(|f| parse_decimal(&f.total_value_locked_usd))
            .sum(),
        eth_price,
    }
}

pub fn summarize_pool(pool: &Pool) -> PoolSummary {
    PoolSummary {
        id: pool.id.clone(),
        pair: format!("{}/{}", pool.token0.symbol, pool.token1.symbol),
        fee_tier: format!("{:.2}%", parse_decimal(&pool.fee_tier) / FEE_TIER_DIVISOR),
        tvl: parse_decimal(&pool.total_value_locked_usd),
        volume: parse_decimal(&pool.volume_usd),
    }
}

pub fn summarize_factory(factory: &Factory, eth_price: f64) -> FactorySummary {
    FactorySummary {
        id: factory.id.clone(),
        pool_count: parse_count(&factory.pool_count),
        tx_count: parse_count(&factory.tx_count),
        volume: EthUsd::at_price(parse_decimal(&factory.total_volume_eth), eth_price),
        fees: EthUsd::at_price(parse_decimal(&factory.total_fees_eth), eth_price),
        tvl: parse_decimal(&factory.total_value_locked_usd),
    }
}

fn parse_decimal(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or_default()
}

/// Whole count; decimal strings are truncated
fn parse_count(value: &str) -> u64 {
    let value = value.trim();
    value.parse::<u64>().unwrap_or_else(|_| {
        let n = parse_decimal(value);
        if n > 0.0 {
            n.trunc() as u64
        } else {
            0
        }
    })
}
