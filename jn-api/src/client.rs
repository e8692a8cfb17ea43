//! HTTP client wrapper for the JalNivikaran backend.
//!
//! Fixed base URL and timeout, no retries, no backoff. Callers catch
//! failures at the call site and surface them as a logged message or an
//! inline error string.

use crate::error::{ApiError, Result};
use crate::forecast::{ForecastPoint, ScenarioParams};
use crate::model::ModelAnalysis;
use crate::simulation::{PredictionRow, ScenarioDeltas, SimulationPoint};
use crate::station::{NearestStation, Station, StationSummary};
use crate::stats::DashboardStats;
use crate::trends::{
    DemandSupplyPoint, HistoryPoint, ScatterPoint, SeasonalPoint, StressIndexPoint,
    WaterLevelPoint, ZoneSlice,
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Backend base URL (FastAPI service).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Request timeout. The backend's report and simulation endpoints can
/// run for minutes, hence the generous value.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Cheaply cloneable client carrying the shared connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Absolute URL for an endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` with query pairs, decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.http.get(self.url(path)).query(query);
        // reqwest has no timeout support on wasm; the browser's fetch
        // defaults apply there.
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// GET `path` returning the raw body (PDF report blobs).
    pub async fn get_bytes(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>> {
        let request = self.http.get(self.url(path)).query(query);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// POST a single file as multipart form data, decode the JSON reply.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let request = self.http.post(self.url(path)).query(query).multipart(form);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

/// Typed endpoint surface, one method per consumed path.
impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get_json("/api/dashboard/stats", &[]).await
    }

    pub async fn map_stations(&self) -> Result<Vec<Station>> {
        self.get_json("/api/map/stations", &[]).await
    }

    pub async fn history_trend(&self) -> Result<Vec<HistoryPoint>> {
        self.get_json("/api/trends/history", &[]).await
    }

    pub async fn nearest_station(&self, lat: f64, lon: f64) -> Result<NearestStation> {
        self.get_json(
            "/api/water-level/nearest",
            &[("lat", lat.to_string()), ("lon", lon.to_string())],
        )
        .await
    }

    pub async fn analytics_stations(&self) -> Result<Vec<StationSummary>> {
        self.get_json("/api/analytics/stations", &[]).await
    }

    pub async fn water_level_trend(&self, station_id: &str) -> Result<Vec<WaterLevelPoint>> {
        self.get_json(
            "/api/analytics/trend/water-level",
            &[("station_id", station_id.to_string())],
        )
        .await
    }

    pub async fn demand_supply_trend(&self, station_id: &str) -> Result<Vec<DemandSupplyPoint>> {
        self.get_json(
            "/api/analytics/trend/demand-supply",
            &[("station_id", station_id.to_string())],
        )
        .await
    }

    pub async fn stress_index_trend(&self, station_id: &str) -> Result<Vec<StressIndexPoint>> {
        self.get_json(
            "/api/analytics/trend/stress-index",
            &[("station_id", station_id.to_string())],
        )
        .await
    }

    pub async fn zone_distribution(&self, station_id: &str) -> Result<Vec<ZoneSlice>> {
        self.get_json(
            "/api/analytics/zone/distribution",
            &[("station_id", station_id.to_string())],
        )
        .await
    }

    pub async fn seasonal_pattern(&self, station_id: &str) -> Result<Vec<SeasonalPoint>> {
        self.get_json(
            "/api/analytics/seasonal",
            &[("station_id", station_id.to_string())],
        )
        .await
    }

    pub async fn stress_water_scatter(&self, station_id: &str) -> Result<Vec<ScatterPoint>> {
        self.get_json(
            "/api/analytics/scatter/stress-water",
            &[("station_id", station_id.to_string())],
        )
        .await
    }

    pub async fn forecast(
        &self,
        station_id: &str,
        params: &ScenarioParams,
    ) -> Result<Vec<ForecastPoint>> {
        self.get_json("/api/predict/forecast", &params.query(station_id))
            .await
    }

    pub async fn model_analysis(&self) -> Result<ModelAnalysis> {
        self.get_json("/api/model/analysis", &[]).await
    }

    /// Generate a station PDF report; the caller hands the bytes to the
    /// blob-download bridge.
    pub async fn generate_report(&self, station_id: &str) -> Result<Vec<u8>> {
        self.get_bytes(
            "/api/reports/generate",
            &[("station_id", station_id.to_string())],
        )
        .await
    }

    pub async fn predict_csv(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<PredictionRow>> {
        self.post_multipart("/predict", &[], file_name, bytes).await
    }

    pub async fn simulate(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        deltas: ScenarioDeltas,
    ) -> Result<Vec<SimulationPoint>> {
        self.post_multipart("/simulate", &deltas.query(), file_name, bytes)
            .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new();
        assert_eq!(
            client.url("/api/dashboard/stats"),
            "http://localhost:8001/api/dashboard/stats"
        );
        assert_eq!(client.url("predict"), "http://localhost:8001/predict");
    }

    #[test]
    fn base_url_trailing_slashes_are_stripped() {
        let client = ApiClient::with_base_url("http://backend:9000//");
        assert_eq!(client.url("/simulate"), "http://backend:9000/simulate");
    }

    #[test]
    fn default_config_matches_backend_service() {
        let client = ApiClient::default();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
    }
}
