//! Pure chart-data preparation helpers.
//!
//! Everything here is host-testable: binning, series combination, and
//! the color vocabulary shared by the pie chart and map markers.

use jn_api::forecast::ForecastPoint;
use jn_api::station::ZoneStatus;
use jn_api::trends::WaterLevelPoint;
use serde::Serialize;

/// One bar of the residual-error histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Left edge of the bin, formatted to one decimal
    pub bin: String,
    pub count: usize,
}

/// Bin residuals into a fixed number of equal-width buckets across
/// their min..max range. Empty input yields no bins; a constant input
/// collapses into the first bin.
pub fn residual_histogram(residuals: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if residuals.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let min = residuals.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = residuals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            bin: format!("{:.1}", min + i as f64 * span / bin_count as f64),
            count: 0,
        })
        .collect();

    for &residual in residuals {
        let index = if span == 0.0 {
            0
        } else {
            (((residual - min) / span * bin_count as f64) as usize).min(bin_count - 1)
        };
        bins[index].count += 1;
    }
    bins
}

/// Arithmetic mean of the residuals; 0 for an empty slice.
pub fn mean_residual(residuals: &[f64]) -> f64 {
    if residuals.is_empty() {
        return 0.0;
    }
    residuals.iter().sum::<f64>() / residuals.len() as f64
}

/// Pie-slice color for a zone name. Unknown names fall back to grey.
pub fn zone_color(name: &str) -> &'static str {
    match name {
        "Safe" => "#00C49F",
        "Semi-Critical" => "#FFBB28",
        "Critical" => "#FF8042",
        "Over-Exploited" => "#FF0000",
        _ => "#888888",
    }
}

/// Map-marker fill color for a typed station status.
pub fn status_color(status: ZoneStatus) -> &'static str {
    match status {
        ZoneStatus::Safe => "#4CA965",
        ZoneStatus::SemiCritical => "#FFA000",
        ZoneStatus::Critical => "#E53935",
        ZoneStatus::OverExploited => "#B71C1C",
    }
}

/// Series tag on a projection chart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    History,
    Forecast,
}

/// One x-axis sample of the combined projection chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub label: String,
    pub series: SeriesKind,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

/// Concatenate annual history with the quarterly forecast into one
/// labeled series. History keeps bare year labels; forecast labels are
/// "<year> <month>" and carry their confidence band.
pub fn combine_projection(
    history: &[WaterLevelPoint],
    forecast: &[ForecastPoint],
) -> Vec<ProjectionRow> {
    let mut rows = Vec::with_capacity(history.len() + forecast.len());
    for point in history {
        rows.push(ProjectionRow {
            label: point.year.to_string(),
            series: SeriesKind::History,
            value: point.water_level,
            lower: None,
            upper: None,
        });
    }
    for point in forecast {
        rows.push(ProjectionRow {
            label: format!("{} {}", point.year, point.month),
            series: SeriesKind::Forecast,
            value: point.water_level,
            lower: Some(point.lower_bound),
            upper: Some(point.upper_bound),
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast_point(year: i32, month: &str, level: f64) -> ForecastPoint {
        ForecastPoint {
            year,
            month: month.to_string(),
            date: format!("{year}-01-01"),
            water_level: level,
            lower_bound: level * 0.95,
            upper_bound: level * 1.05,
            demand: 0.0,
            supply: 0.0,
            stress_index: 0.0,
            zone: "Safe".to_string(),
        }
    }

    #[test]
    fn histogram_covers_all_residuals() {
        let residuals = [-1.0, -0.5, 0.0, 0.25, 0.5, 1.0];
        let bins = residual_histogram(&residuals, 4);
        assert_eq!(bins.len(), 4);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, residuals.len());
        // max lands in the last bin, not out of range
        assert!(bins[3].count >= 1);
    }

    #[test]
    fn histogram_of_nothing_is_empty() {
        assert!(residual_histogram(&[], 20).is_empty());
    }

    #[test]
    fn histogram_of_constant_residuals_collapses_into_one_bin() {
        let bins = residual_histogram(&[0.4, 0.4, 0.4], 10);
        assert_eq!(bins[0].count, 3);
        let rest: usize = bins[1..].iter().map(|b| b.count).sum();
        assert_eq!(rest, 0);
    }

    #[test]
    fn mean_residual_handles_empty_input() {
        assert_eq!(mean_residual(&[]), 0.0);
        assert!((mean_residual(&[-0.2, 0.2, 0.3]) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn unknown_zone_names_fall_back_to_grey() {
        assert_eq!(zone_color("Safe"), "#00C49F");
        assert_eq!(zone_color("Unknown"), "#888888");
    }

    #[test]
    fn projection_combines_history_then_forecast() {
        let history = vec![
            WaterLevelPoint {
                year: 2023,
                water_level: 11.5,
            },
            WaterLevelPoint {
                year: 2024,
                water_level: 12.0,
            },
        ];
        let forecast = vec![forecast_point(2025, "Apr", 12.4)];
        let rows = combine_projection(&history, &forecast);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "2023");
        assert_eq!(rows[0].series, SeriesKind::History);
        assert!(rows[0].lower.is_none());
        assert_eq!(rows[2].label, "2025 Apr");
        assert_eq!(rows[2].series, SeriesKind::Forecast);
        assert!(rows[2].lower.unwrap() < rows[2].value);
    }

    #[test]
    fn series_kind_serializes_lowercase() {
        let json = serde_json::to_string(&SeriesKind::Forecast).unwrap();
        assert_eq!(json, "\"forecast\"");
    }
}
