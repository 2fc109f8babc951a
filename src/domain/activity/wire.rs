//! Wire types for the sales and listings response nesting.
//!
//! Every level below `data` is optional: the service omits or nulls inner
//! payloads for collections with no matching activity, and that must parse
//! as an empty result rather than fail. A present field of the wrong type
//! is still a shape error.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// `data` payload of the sales query.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sales: Option<SalesConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalesConnection {
    #[serde(default)]
    pub nodes: Vec<SaleNode>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaleNode {
    #[serde(default)]
    pub sale: Option<EventPayload>,
}

/// `data` payload of the listings query.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsData {
    #[serde(default)]
    pub markets: Option<MarketsConnection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketsConnection {
    #[serde(default)]
    pub nodes: Vec<MarketNode>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketNode {
    #[serde(default)]
    pub market: Option<EventPayload>,
}

/// The nested price + transaction payload shared by sale and market nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub price: Option<PricePair>,
    #[serde(rename = "transactionInfo", default)]
    pub transaction_info: Option<TransactionInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricePair {
    #[serde(rename = "usdcPrice", default)]
    pub usdc_price: Option<DecimalPrice>,
    #[serde(rename = "chainTokenPrice", default)]
    pub chain_token_price: Option<DecimalPrice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecimalPrice {
    pub decimal: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInfo {
    #[serde(
        rename = "blockTimestamp",
        default,
        deserialize_with = "serde_util::naive_utc_option::deserialize"
    )]
    pub block_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage", default)]
    pub has_next_page: bool,
}
