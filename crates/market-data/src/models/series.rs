use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Single observation in a historical price series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub close: Decimal,
}

/// Historical closing prices for one instrument.
///
/// Points are ordered by timestamp ascending, as returned by the provider.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub symbol: String,
    pub points: Vec<SeriesPoint>,
}

impl HistoricalSeries {
    /// Multi-line console block: a header followed by one dated close per line.
    pub fn display_block(&self) -> String {
        let mut out = format!("HISTORIC DATA: {}\n", self.symbol);
        for point in &self.points {
            out.push_str(&format!(
                "Date: {} - Closing Price (USD): {}\n",
                point.timestamp.format("%d/%m/%Y %H:%M:%S"),
                point.close
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_block_lists_points_under_header() {
        let series = HistoricalSeries {
            symbol: "NVDA".to_string(),
            points: vec![
                SeriesPoint {
                    timestamp: Utc.with_ymd_and_hms(2021, 4, 14, 14, 30, 0).unwrap(),
                    close: dec!(152.77),
                },
                SeriesPoint {
                    timestamp: Utc.with_ymd_and_hms(2021, 4, 15, 14, 30, 0).unwrap(),
                    close: dec!(155.10),
                },
            ],
        };
        let block = series.display_block();
        assert!(block.starts_with("HISTORIC DATA: NVDA\n"));
        assert!(block.contains("Date: 14/04/2021 14:30:00 - Closing Price (USD): 152.77"));
        assert!(block.contains("Date: 15/04/2021 14:30:00 - Closing Price (USD): 155.10"));
    }

    #[test]
    fn test_display_block_empty_series_is_header_only() {
        let series = HistoricalSeries {
            symbol: "TSLA".to_string(),
            points: Vec::new(),
        };
        assert_eq!(series.display_block(), "HISTORIC DATA: TSLA\n");
    }
}
