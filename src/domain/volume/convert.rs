//! Conversion from the aggregate-stat payload to volume records.

use super::wire::{SalesVolume, VolumeData};
use super::VolumeRecord;
use crate::error::MalformedResponse;
use crate::shared::VolumePeriod;
use serde_json::Value;

fn record(period: VolumePeriod, bucket: SalesVolume) -> VolumeRecord {
    VolumeRecord {
        period,
        volume_native: bucket.chain_token_price,
        volume_usd: bucket.usdc_price,
        sale_count: bucket.total_count,
    }
}

/// Normalize a volume `data` payload into records, day first then week.
///
/// An absent `aggregateStat` yields an empty set; a present stat yields
/// one record per present bucket.
pub fn volume_records(data: Value) -> Result<Vec<VolumeRecord>, MalformedResponse> {
    let parsed: VolumeData = serde_json::from_value(data)?;
    let Some(stat) = parsed.aggregate_stat else {
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(2);
    if let Some(day) = stat.day_sales_volume {
        records.push(record(VolumePeriod::Day, day));
    }
    if let Some(week) = stat.week_sales_volume {
        records.push(record(VolumePeriod::Week, week));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_both_periods_pass_through() {
        let data = json!({
            "aggregateStat": {
                "daySalesVolume": {
                    "chainTokenPrice": 12.5,
                    "usdcPrice": 35000.0,
                    "totalCount": 9
                },
                "weekSalesVolume": {
                    "chainTokenPrice": 98.25,
                    "usdcPrice": 275100.0,
                    "totalCount": 71
                }
            }
        });
        let records = volume_records(data).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].period, VolumePeriod::Day);
        assert_eq!(records[0].volume_native, Decimal::from_str("12.5").unwrap());
        assert_eq!(records[0].volume_usd, Decimal::from_str("35000").unwrap());
        assert_eq!(records[0].sale_count, 9);

        assert_eq!(records[1].period, VolumePeriod::Week);
        assert_eq!(records[1].volume_native, Decimal::from_str("98.25").unwrap());
        assert_eq!(records[1].sale_count, 71);
    }

    #[test]
    fn test_absent_stat_is_empty_not_error() {
        assert!(volume_records(json!({})).unwrap().is_empty());
        assert!(volume_records(json!({ "aggregateStat": null }))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_wrong_type_is_shape_error() {
        let data = json!({ "aggregateStat": { "daySalesVolume": "oops" } });
        assert!(matches!(
            volume_records(data),
            Err(MalformedResponse::Shape(_))
        ));
    }
}
