use serde::{Deserialize, Serialize};
use std::fmt;

/// Groundwater zone classification used for stations, zone distribution
/// slices, and map marker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneStatus {
    Safe,
    #[serde(rename = "Semi-Critical")]
    SemiCritical,
    Critical,
    #[serde(rename = "Over-Exploited")]
    OverExploited,
}

impl ZoneStatus {
    pub const ALL: [ZoneStatus; 4] = [
        ZoneStatus::Safe,
        ZoneStatus::SemiCritical,
        ZoneStatus::Critical,
        ZoneStatus::OverExploited,
    ];

    /// Display label matching the backend's wire vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            ZoneStatus::Safe => "Safe",
            ZoneStatus::SemiCritical => "Semi-Critical",
            ZoneStatus::Critical => "Critical",
            ZoneStatus::OverExploited => "Over-Exploited",
        }
    }

    /// Whether the station needs attention on the dashboard (anomaly
    /// lists, marker emphasis).
    pub fn is_alarming(&self) -> bool {
        matches!(self, ZoneStatus::Critical | ZoneStatus::OverExploited)
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A monitored groundwater measurement point as served by
/// `GET /api/map/stations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Current depth reading in metres below ground level
    pub level: f64,
    pub status: ZoneStatus,
    /// Recharge rate in %, when the feed carries it
    #[serde(default)]
    pub recharge_rate: Option<f64>,
    /// Trend label ("rising", "declining", ...), when the feed carries it
    #[serde(default)]
    pub trend: Option<String>,
}

/// Dropdown entry from `GET /api/analytics/stations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSummary {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub district: String,
    pub state: String,
}

/// Result of the nearest-station-by-coordinates lookup
/// (`GET /api/water-level/nearest`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestStation {
    pub station_name: String,
    pub lat: f64,
    pub lon: f64,
    /// Depth reading in metres below ground level
    pub water_level: f64,
    pub distance_km: f64,
    pub status: ZoneStatus,
    #[serde(default)]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_decodes_from_map_feed() {
        let json = r#"{
            "id": "23.5_77.4",
            "name": "Station 23.50, 77.40",
            "lat": 23.5,
            "lng": 77.4,
            "level": 14.2,
            "status": "Semi-Critical"
        }"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.status, ZoneStatus::SemiCritical);
        assert_eq!(station.level, 14.2);
        assert!(station.recharge_rate.is_none());
        assert!(station.trend.is_none());
    }

    #[test]
    fn unknown_status_is_rejected_at_the_boundary() {
        let json = r#"{
            "id": "s1", "name": "S1", "lat": 0.0, "lng": 0.0,
            "level": 1.0, "status": "Mostly Fine"
        }"#;
        assert!(serde_json::from_str::<Station>(json).is_err());
    }

    #[test]
    fn zone_status_round_trips_hyphenated_labels() {
        for status in ZoneStatus::ALL {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.label()));
            let back: ZoneStatus = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn alarming_statuses() {
        assert!(!ZoneStatus::Safe.is_alarming());
        assert!(!ZoneStatus::SemiCritical.is_alarming());
        assert!(ZoneStatus::Critical.is_alarming());
        assert!(ZoneStatus::OverExploited.is_alarming());
    }

    #[test]
    fn nearest_station_decodes_without_date() {
        let json = r#"{
            "station_name": "Station 23.50, 77.40",
            "lat": 23.5, "lon": 77.4,
            "water_level": 9.8, "distance_km": 3.2,
            "status": "Safe"
        }"#;
        let nearest: NearestStation = serde_json::from_str(json).unwrap();
        assert_eq!(nearest.distance_km, 3.2);
        assert_eq!(nearest.date, None);
    }
}
