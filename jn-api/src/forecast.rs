//! Forecast request parameters and response points.

use serde::{Deserialize, Serialize};

/// Slider bounds on the projection page, in percent per year.
pub const CHANGE_PCT_RANGE: (f64, f64) = (-10.0, 10.0);
/// Forecast horizon bounds, in years.
pub const YEARS_RANGE: (u32, u32) = (1, 10);

/// User-chosen scenario for a forecast request: annual percentage deltas
/// for extraction demand and recharge supply plus a year horizon. Exists
/// only as page-local state; discarded on navigation away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParams {
    pub demand_change_pct: f64,
    pub supply_change_pct: f64,
    pub years: u32,
}

impl ScenarioParams {
    /// Build params, clamping each value into its slider range.
    pub fn new(demand_change_pct: f64, supply_change_pct: f64, years: u32) -> Self {
        Self {
            demand_change_pct: demand_change_pct.clamp(CHANGE_PCT_RANGE.0, CHANGE_PCT_RANGE.1),
            supply_change_pct: supply_change_pct.clamp(CHANGE_PCT_RANGE.0, CHANGE_PCT_RANGE.1),
            years: years.clamp(YEARS_RANGE.0, YEARS_RANGE.1),
        }
    }

    /// Query pairs for `GET /api/predict/forecast`.
    pub fn query(&self, station_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("station_id", station_id.to_string()),
            ("years", self.years.to_string()),
            ("demand_change_pct", self.demand_change_pct.to_string()),
            ("supply_change_pct", self.supply_change_pct.to_string()),
        ]
    }
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            demand_change_pct: 0.0,
            supply_change_pct: 0.0,
            years: 5,
        }
    }
}

/// One quarterly step of the autoregressive forecast
/// (`GET /api/predict/forecast`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(rename = "Year")]
    pub year: i32,
    /// Three-letter month label ("Jan" .. "Dec")
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Water_Level")]
    pub water_level: f64,
    #[serde(rename = "Lower_Bound")]
    pub lower_bound: f64,
    #[serde(rename = "Upper_Bound")]
    pub upper_bound: f64,
    #[serde(rename = "Demand")]
    pub demand: f64,
    #[serde(rename = "Supply")]
    pub supply: f64,
    #[serde(rename = "Stress_Index")]
    pub stress_index: f64,
    #[serde(rename = "Zone")]
    pub zone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_clamp_to_slider_ranges() {
        let params = ScenarioParams::new(25.0, -99.0, 0);
        assert_eq!(params.demand_change_pct, 10.0);
        assert_eq!(params.supply_change_pct, -10.0);
        assert_eq!(params.years, 1);
    }

    #[test]
    fn query_carries_all_four_parameters() {
        let params = ScenarioParams::new(2.5, -1.0, 5);
        let query = params.query("23.5_77.4");
        assert_eq!(
            query,
            vec![
                ("station_id", "23.5_77.4".to_string()),
                ("years", "5".to_string()),
                ("demand_change_pct", "2.5".to_string()),
                ("supply_change_pct", "-1".to_string()),
            ]
        );
    }

    #[test]
    fn forecast_point_decodes_backend_shape() {
        let json = r#"{
            "Year": 2026, "Month": "Apr", "Date": "2026-04-01",
            "Water_Level": 13.42, "Lower_Bound": 12.75, "Upper_Bound": 14.09,
            "Demand": 1520.0, "Supply": 1390.5,
            "Stress_Index": 1.0931, "Zone": "Over-Exploited"
        }"#;
        let point: ForecastPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.month, "Apr");
        assert!(point.lower_bound < point.water_level);
        assert!(point.upper_bound > point.water_level);
    }
}
