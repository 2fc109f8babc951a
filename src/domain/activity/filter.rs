//! Recency window for listing records.
//!
//! Sales are already bounded by the query-level lookback, so only listings
//! are filtered client-side: the listings query restricts by status, not by
//! time, and stale asks would stretch the chart's time axis.

use super::ActivityRecord;
use crate::shared::ActivityKind;
use chrono::{DateTime, Duration, Utc};

/// Default recency window for listings.
pub fn listing_window() -> Duration {
    Duration::hours(24)
}

/// Keep listings newer than `now - window`; sales pass through untouched.
///
/// The boundary is exclusive: a listing exactly `window` old is dropped.
pub fn retain_recent(
    records: Vec<ActivityRecord>,
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<ActivityRecord> {
    let cutoff = now - window;
    records
        .into_iter()
        .filter(|r| r.kind != ActivityKind::Listing || r.timestamp > cutoff)
        .collect()
}
