//! Volume domain — day/week aggregate sales volume.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::VolumePeriod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::volume_records;

/// Aggregate sales volume over one lookback period.
///
/// A successful fetch yields exactly two of these — one per period, both
/// derived from the same aggregate response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeRecord {
    pub period: VolumePeriod,
    pub volume_native: Decimal,
    pub volume_usd: Decimal,
    pub sale_count: u64,
}
