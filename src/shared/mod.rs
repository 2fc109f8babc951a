//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the API sends, so they can be used directly
//! in wire types without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CollectionAddress ───────────────────────────────────────────────────────

/// Newtype for ERC-721 collection addresses (e.g. `"0x4b10701B…"`).
///
/// Opaque to the SDK: no checksum or length validation is performed. A
/// malformed address surfaces downstream as an empty or error response from
/// the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionAddress(String);

impl CollectionAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CollectionAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CollectionAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CollectionAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CollectionAddress(s.to_string()))
    }
}

impl Serialize for CollectionAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CollectionAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CollectionAddress(s))
    }
}

// ─── ActivityKind ────────────────────────────────────────────────────────────

/// Which side of the market a record came from: a completed sale or an
/// active ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Sale,
    Listing,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Listing => "listing",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── VolumePeriod ────────────────────────────────────────────────────────────

/// Aggregation window for sales volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumePeriod {
    Day,
    Week,
}

impl VolumePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }

    /// Lookback span of the window in hours.
    pub fn lookback_hours(&self) -> u32 {
        match self {
            Self::Day => 24,
            Self::Week => 168,
        }
    }
}

impl std::fmt::Display for VolumePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_address_serde() {
        let addr = CollectionAddress::from("0x4b10701Bfd7BFEdc47d50562b76b436fbB5BdB3B");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x4b10701Bfd7BFEdc47d50562b76b436fbB5BdB3B\"");
        let back: CollectionAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn test_activity_kind_serde() {
        let sale: ActivityKind = serde_json::from_str("\"sale\"").unwrap();
        assert_eq!(sale, ActivityKind::Sale);
        let listing: ActivityKind = serde_json::from_str("\"listing\"").unwrap();
        assert_eq!(listing, ActivityKind::Listing);
    }

    #[test]
    fn test_volume_period_lookback() {
        assert_eq!(VolumePeriod::Day.lookback_hours(), 24);
        assert_eq!(VolumePeriod::Week.lookback_hours(), 168);
        assert_eq!(VolumePeriod::Week.as_str(), "week");
    }
}
