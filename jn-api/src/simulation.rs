//! CSV-driven simulation and prediction flows.
//!
//! The client never parses the uploaded CSV; it forwards the bytes as
//! multipart form data and renders whatever the backend sends back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Climate scenario selectable on the simulation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateScenario {
    Normal,
    Drought,
    ExcessRainfall,
}

impl fmt::Display for ClimateScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClimateScenario::Normal => "Normal Conditions",
            ClimateScenario::Drought => "Drought Conditions",
            ClimateScenario::ExcessRainfall => "Excess Rainfall",
        })
    }
}

/// Policy intervention selectable on the simulation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyIntervention {
    NoPolicy,
    RainwaterHarvesting,
    CropRotation,
    IndustrialCap,
}

impl fmt::Display for PolicyIntervention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicyIntervention::NoPolicy => "No Policy",
            PolicyIntervention::RainwaterHarvesting => "Rainwater Harvesting",
            PolicyIntervention::CropRotation => "Crop Rotation",
            PolicyIntervention::IndustrialCap => "Industrial Water Cap",
        })
    }
}

/// Availability/demand deltas sent to `POST /simulate`, as fractions
/// (-0.3 = -30 %).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenarioDeltas {
    pub availability_change_pct: f64,
    pub demand_change_pct: f64,
}

impl ScenarioDeltas {
    /// Combine a climate scenario with a policy intervention.
    ///
    /// Scenario sets the availability baseline (drought -30 %, excess
    /// rainfall +30 %); policies then adjust: rainwater harvesting adds
    /// 15 % availability, crop rotation cuts demand 10 %, an industrial
    /// cap cuts demand 5 %.
    pub fn for_scenario(scenario: ClimateScenario, policy: PolicyIntervention) -> Self {
        let mut availability = match scenario {
            ClimateScenario::Normal => 0.0,
            ClimateScenario::Drought => -0.3,
            ClimateScenario::ExcessRainfall => 0.3,
        };
        let mut demand = 0.0;
        match policy {
            PolicyIntervention::NoPolicy => {}
            PolicyIntervention::RainwaterHarvesting => availability += 0.15,
            PolicyIntervention::CropRotation => demand -= 0.1,
            PolicyIntervention::IndustrialCap => demand -= 0.05,
        }
        Self {
            availability_change_pct: availability,
            demand_change_pct: demand,
        }
    }

    /// Query pairs for `POST /simulate`.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("availability_change_pct", self.availability_change_pct.to_string()),
            ("demand_change_pct", self.demand_change_pct.to_string()),
        ]
    }
}

/// One step of the simulated forecast band (`POST /simulate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationPoint {
    pub date: String,
    /// Observed value; absent for future steps
    #[serde(default)]
    pub actual: Option<f64>,
    pub predicted: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// One row of the prediction table (`POST /predict`): the backend runs
/// the model plus its decision and alert engines over the uploaded rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRow {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    pub prediction: f64,
    pub stress_index: f64,
    pub zone: String,
    /// "NO_ALERT" or " | "-joined alert messages
    pub alerts: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_match_scenario_presets() {
        let drought = ScenarioDeltas::for_scenario(
            ClimateScenario::Drought,
            PolicyIntervention::NoPolicy,
        );
        assert_eq!(drought.availability_change_pct, -0.3);
        assert_eq!(drought.demand_change_pct, 0.0);

        let excess = ScenarioDeltas::for_scenario(
            ClimateScenario::ExcessRainfall,
            PolicyIntervention::NoPolicy,
        );
        assert_eq!(excess.availability_change_pct, 0.3);
    }

    #[test]
    fn policies_adjust_deltas() {
        let harvesting = ScenarioDeltas::for_scenario(
            ClimateScenario::Drought,
            PolicyIntervention::RainwaterHarvesting,
        );
        assert!((harvesting.availability_change_pct - (-0.15)).abs() < 1e-9);

        let rotation = ScenarioDeltas::for_scenario(
            ClimateScenario::Normal,
            PolicyIntervention::CropRotation,
        );
        assert_eq!(rotation.demand_change_pct, -0.1);

        let cap = ScenarioDeltas::for_scenario(
            ClimateScenario::Normal,
            PolicyIntervention::IndustrialCap,
        );
        assert_eq!(cap.demand_change_pct, -0.05);
    }

    #[test]
    fn simulation_point_allows_missing_actual() {
        let json = r#"{
            "date": "2026-01-01",
            "predicted": 13.1, "lower_bound": 12.4, "upper_bound": 13.8
        }"#;
        let point: SimulationPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.actual, None);
    }

    #[test]
    fn prediction_row_decodes() {
        let json = r#"{
            "prediction": 12.9,
            "stress_index": 0.91,
            "zone": "Critical",
            "alerts": "Stress index above sustainable threshold"
        }"#;
        let row: PredictionRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.zone, "Critical");
        assert!(row.date.is_none());
    }
}
