//! Custom serde helpers for backend wire formats.

/// Deserializes an optional timezone-less ISO-8601 string into
/// `DateTime<Utc>`.
///
/// The API sends `blockTimestamp` as `"2022-05-04T21:48:22"` — no zone
/// suffix. Block timestamps are UTC by convention. Null or absent values
/// deserialize to `None` so sparse nodes can be dropped instead of failing
/// the whole response.
pub mod naive_utc_option {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let naive = Option::<NaiveDateTime>::deserialize(deserializer)?;
        Ok(naive.map(|n| n.and_utc()))
    }
}
