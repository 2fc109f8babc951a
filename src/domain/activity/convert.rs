//! Conversions from raw GraphQL payloads to normalized activity records.

use super::wire::{EventPayload, MarketsData, SalesData};
use super::ActivityRecord;
use crate::error::MalformedResponse;
use crate::shared::ActivityKind;
use serde_json::Value;

impl EventPayload {
    /// Flatten the nested price + timestamp payload into a record.
    ///
    /// Nodes missing any part of the chain are dropped (`None`), matching
    /// the tolerance rule: absence is an empty result, not a failure.
    fn into_record(self, kind: ActivityKind) -> Option<ActivityRecord> {
        let price = self.price?;
        Some(ActivityRecord {
            timestamp: self.transaction_info?.block_timestamp?,
            price_native: price.chain_token_price?.decimal,
            price_usd: price.usdc_price?.decimal,
            kind,
        })
    }
}

/// Normalize a sales `data` payload into records tagged `kind=sale`.
pub fn sale_records(data: Value) -> Result<Vec<ActivityRecord>, MalformedResponse> {
    let parsed: SalesData = serde_json::from_value(data)?;
    let nodes = parsed.sales.map(|s| s.nodes).unwrap_or_default();
    Ok(nodes
        .into_iter()
        .filter_map(|n| n.sale.and_then(|s| s.into_record(ActivityKind::Sale)))
        .collect())
}

/// Normalize a listings `data` payload into records tagged `kind=listing`.
///
/// Unfiltered — callers apply the recency window.
pub fn listing_records(data: Value) -> Result<Vec<ActivityRecord>, MalformedResponse> {
    let parsed: MarketsData = serde_json::from_value(data)?;
    let nodes = parsed.markets.map(|m| m.nodes).unwrap_or_default();
    Ok(nodes
        .into_iter()
        .filter_map(|n| n.market.and_then(|m| m.into_record(ActivityKind::Listing)))
        .collect())
}
