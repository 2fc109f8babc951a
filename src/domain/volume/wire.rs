//! Wire types for the aggregate-stat volume response.

use rust_decimal::Decimal;
use serde::Deserialize;

/// `data` payload of the volume query.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeData {
    #[serde(rename = "aggregateStat", default)]
    pub aggregate_stat: Option<AggregateStat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregateStat {
    #[serde(rename = "daySalesVolume", default)]
    pub day_sales_volume: Option<SalesVolume>,
    #[serde(rename = "weekSalesVolume", default)]
    pub week_sales_volume: Option<SalesVolume>,
}

/// One aliased `salesVolume` bucket. Unlike the per-node activity shapes,
/// these are flat numerics.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesVolume {
    #[serde(rename = "chainTokenPrice")]
    pub chain_token_price: Decimal,
    #[serde(rename = "usdcPrice")]
    pub usdc_price: Decimal,
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}
