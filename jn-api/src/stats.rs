use serde::{Deserialize, Serialize};

/// Aggregate numbers for the four dashboard summary cards
/// (`GET /api/dashboard/stats`). Rendered unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Average water level across stations, metres below ground level
    pub avg_level: f64,
    /// Number of stations currently classified critical
    pub critical_count: u32,
    /// Recharge rate in %
    pub recharge_rate: f64,
    /// Demand/supply gap in %
    pub supply_gap: f64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            avg_level: 0.0,
            critical_count: 0,
            recharge_rate: 0.0,
            supply_gap: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_decode_unmodified() {
        let json = r#"{"avg_level": 12.5, "critical_count": 2, "recharge_rate": 80, "supply_gap": 15}"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.avg_level, 12.5);
        assert_eq!(stats.critical_count, 2);
        assert_eq!(stats.recharge_rate, 80.0);
        assert_eq!(stats.supply_gap, 15.0);
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let json = r#"{"avg_level": 12.5, "critical_count": 2}"#;
        assert!(serde_json::from_str::<DashboardStats>(json).is_err());
    }
}
