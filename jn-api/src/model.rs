//! Model-performance analysis payload (`GET /api/model/analysis`).

use serde::{Deserialize, Serialize};

/// One held-out validation sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub actual: f64,
    pub predicted: f64,
}

/// Relative weight of one input feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Coefficient of determination on the held-out test split
    pub r2: f64,
}

/// Full transparency report for the trained forecast model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAnalysis {
    pub scatter: Vec<PredictionPoint>,
    pub residuals: Vec<f64>,
    pub feature_importance: Vec<FeatureWeight>,
    pub metrics: ModelMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_decodes() {
        let json = r#"{
            "scatter": [{"actual": 12.1, "predicted": 12.3}],
            "residuals": [-0.2, 0.15],
            "feature_importance": [{"name": "Water_Level_Lag1", "value": 0.61}],
            "metrics": {"r2": 0.94}
        }"#;
        let analysis: ModelAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.metrics.r2, 0.94);
        assert_eq!(analysis.scatter.len(), 1);
        assert_eq!(analysis.residuals.len(), 2);
        assert_eq!(analysis.feature_importance[0].name, "Water_Level_Lag1");
    }

    #[test]
    fn backend_error_object_fails_decode() {
        // An untrained model makes the backend answer {"error": ...};
        // that must surface as a decode failure, not empty data.
        let json = r#"{"error": "No run artifacts found."}"#;
        assert!(serde_json::from_str::<ModelAnalysis>(json).is_err());
    }
}
