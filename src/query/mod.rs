//! GraphQL query documents for the three data needs.
//!
//! Each builder is a pure value: substituting a collection address into a
//! fixed template. The filtering lives in the document itself — sales and
//! volume are bounded by query-level lookback windows, listings by market
//! status. Construction has no side effects and performs no validation
//! beyond string substitution.

use crate::shared::{CollectionAddress, VolumePeriod};

/// Result cap per query. One page only: `hasNextPage` is never followed.
pub const PAGE_LIMIT: u32 = 500;

/// Hours of history the sales query asks the service for.
pub const SALES_LOOKBACK_HOURS: u32 = 24;

// ─── QueryDocument ───────────────────────────────────────────────────────────

/// A complete GraphQL document, ready to POST as `{"query": …}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDocument(String);

impl QueryDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── SalesQuery ──────────────────────────────────────────────────────────────

/// Single-collection sales over the last 24 hours, ascending by time.
#[derive(Debug, Clone)]
pub struct SalesQuery {
    pub collection: CollectionAddress,
}

impl SalesQuery {
    pub fn new(collection: impl Into<CollectionAddress>) -> Self {
        Self {
            collection: collection.into(),
        }
    }

    pub fn document(&self) -> QueryDocument {
        QueryDocument(format!(
            r#"{{
  sales(
      where: {{ collectionAddresses: "{addr}" }},
      filter: {{
          saleTypes: OPENSEA_SINGLE_SALE,
          timeFilter: {{lookbackHours: {hours}}}
      }},
      networks: {{chain: MAINNET, network: ETHEREUM}},
      sort: {{sortKey: TIME, sortDirection: ASC}},
      pagination: {{ limit: {limit} }}
  ) {{
    nodes {{
      sale {{
        price {{
          usdcPrice {{ decimal }}
          chainTokenPrice {{ decimal }}
        }}
        transactionInfo {{ blockTimestamp }}
      }}
    }}
    pageInfo {{ hasNextPage }}
  }}
}}"#,
            addr = self.collection,
            hours = SALES_LOOKBACK_HOURS,
            limit = PAGE_LIMIT,
        ))
    }
}

// ─── ListingsQuery ───────────────────────────────────────────────────────────

/// Active asks for a single collection across both ask market variants,
/// ascending by chain-token price.
#[derive(Debug, Clone)]
pub struct ListingsQuery {
    pub collection: CollectionAddress,
}

impl ListingsQuery {
    pub fn new(collection: impl Into<CollectionAddress>) -> Self {
        Self {
            collection: collection.into(),
        }
    }

    pub fn document(&self) -> QueryDocument {
        QueryDocument(format!(
            r#"{{
  markets(
      where: {{ collectionAddresses: "{addr}" }},
      filter: {{
          marketFilters: [
              {{marketType: V1_ASK, statuses: [ACTIVE]}},
              {{marketType: V3_ASK, statuses: [ACTIVE]}}
          ]
      }},
      sort: {{sortKey: CHAIN_TOKEN_PRICE, sortDirection: ASC}},
      pagination: {{ limit: {limit} }}
  ) {{
    nodes {{
      market {{
        price {{
          usdcPrice {{ decimal }}
          chainTokenPrice {{ decimal }}
        }}
        transactionInfo {{ blockTimestamp }}
      }}
    }}
    pageInfo {{ hasNextPage }}
  }}
}}"#,
            addr = self.collection,
            limit = PAGE_LIMIT,
        ))
    }
}

// ─── VolumeQuery ─────────────────────────────────────────────────────────────

/// Day and week aggregate sales volume for a single collection, as two
/// aliased sub-queries in one document.
#[derive(Debug, Clone)]
pub struct VolumeQuery {
    pub collection: CollectionAddress,
}

impl VolumeQuery {
    pub fn new(collection: impl Into<CollectionAddress>) -> Self {
        Self {
            collection: collection.into(),
        }
    }

    pub fn document(&self) -> QueryDocument {
        QueryDocument(format!(
            r#"{{
  aggregateStat {{
    daySalesVolume: salesVolume(
        where: {{ collectionAddresses: "{addr}" }},
        timeFilter: {{lookbackHours: {day}}},
        networks: {{chain: MAINNET, network: ETHEREUM}}
    ) {{
      chainTokenPrice
      usdcPrice
      totalCount
    }}
    weekSalesVolume: salesVolume(
        where: {{ collectionAddresses: "{addr}" }},
        timeFilter: {{lookbackHours: {week}}},
        networks: {{chain: MAINNET, network: ETHEREUM}}
    ) {{
      chainTokenPrice
      usdcPrice
      totalCount
    }}
  }}
}}"#,
            addr = self.collection,
            day = VolumePeriod::Day.lookback_hours(),
            week = VolumePeriod::Week.lookback_hours(),
        ))
    }
}
