//! Time-series point types for the analytics trend endpoints.
//!
//! The backend aggregates with pandas and keeps its column names
//! (`Year`, `Water_Level`, `Stress_Index`, `Month`), so the wire keys
//! are mapped explicitly.

use serde::{Deserialize, Serialize};

/// Annual mean water level (`GET /api/analytics/trend/water-level`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLevelPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    /// Metres below ground level
    #[serde(rename = "Water_Level")]
    pub water_level: f64,
}

/// Annual demand vs. availability (`GET /api/analytics/trend/demand-supply`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSupplyPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    pub demand: f64,
    pub supply: f64,
}

/// Annual mean stress index (`GET /api/analytics/trend/stress-index`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressIndexPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Stress_Index")]
    pub stress_index: f64,
}

/// One pie slice of the zone distribution
/// (`GET /api/analytics/zone/distribution`). In station view the backend
/// sends a single slice naming the station's current zone; names outside
/// the four-zone vocabulary ("Unknown") are possible here, so this stays
/// a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSlice {
    pub name: String,
    pub value: f64,
}

/// Month-of-year average depth (`GET /api/analytics/seasonal`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPoint {
    /// Three-letter month label ("Jan" .. "Dec")
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Water_Level")]
    pub water_level: f64,
}

/// Stress index vs. depth sample (`GET /api/analytics/scatter/stress-water`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub stress_index: f64,
    pub water_level: f64,
}

/// Dated average level for the citizen trend chart
/// (`GET /api/trends/history`); `date` is a display label like "Oct 2024".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub level: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_points_decode_pandas_column_names() {
        let json = r#"[{"Year": 2021, "Water_Level": 11.7}, {"Year": 2022, "Water_Level": 12.4}]"#;
        let points: Vec<WaterLevelPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].year, 2022);
        assert_eq!(points[1].water_level, 12.4);
    }

    #[test]
    fn stress_trend_decodes() {
        let json = r#"[{"Year": 2020, "Stress_Index": 0.82}]"#;
        let points: Vec<StressIndexPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points[0].stress_index, 0.82);
    }

    #[test]
    fn zone_slice_keeps_unknown_names() {
        let json = r#"[{"name": "Unknown", "value": 3}]"#;
        let slices: Vec<ZoneSlice> = serde_json::from_str(json).unwrap();
        assert_eq!(slices[0].name, "Unknown");
        assert_eq!(slices[0].value, 3.0);
    }

    #[test]
    fn empty_trend_is_valid() {
        let points: Vec<DemandSupplyPoint> = serde_json::from_str("[]").unwrap();
        assert!(points.is_empty());
    }
}
