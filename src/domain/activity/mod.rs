//! Market activity domain — normalized sale and listing records.

pub mod client;
mod convert;
pub mod filter;
pub mod wire;

use crate::shared::{ActivityKind, CollectionAddress};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::{listing_records, sale_records};
pub use filter::retain_recent;

/// One normalized market event, chart-ready.
///
/// Sales and listings share this shape so one table can drive a combined
/// time-series plot; `kind` tags the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub timestamp: DateTime<Utc>,
    pub price_native: Decimal,
    pub price_usd: Decimal,
    pub kind: ActivityKind,
}

/// Insertion-ordered sales + listings for one collection.
///
/// Rebuilt from scratch on every recompute pass, never mutated in place.
/// A zero-row table is a valid result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketActivityTable {
    pub collection: CollectionAddress,
    records: Vec<ActivityRecord>,
}

impl MarketActivityTable {
    /// Concatenate sales then listings, preserving each set's order.
    pub fn new(
        collection: CollectionAddress,
        sales: Vec<ActivityRecord>,
        listings: Vec<ActivityRecord>,
    ) -> Self {
        let mut records = sales;
        records.extend(listings);
        Self {
            collection,
            records,
        }
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Records of one kind, in table order.
    pub fn of_kind(&self, kind: ActivityKind) -> impl Iterator<Item = &ActivityRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
