use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::station::NearestStation;
use jn_api::trends::HistoryPoint;
use jn_ui::components::{ChartContainer, PageHeader, StatCard};
use jn_ui::js_bridge;
use jn_ui::state::AppState;
use serde_json::json;

const TREND_ID: &str = "farmer-trend";

const ADVISORIES: &[(&str, &str)] = &[
    ("Crop advisory", "Prefer short-duration pulses over paddy while levels stay below normal."),
    ("Irrigation window", "Water in the early morning; evaporation losses peak after 11am."),
    ("Rainfall outlook", "Light pre-monsoon showers expected within ten days."),
];

/// Citizen-facing view: the regional trend, a nearby-well lookup and
/// plain-language advisories. Everything here is read-only.
#[component]
pub fn FarmerDashboard() -> Element {
    let state = use_context::<AppState>();
    let client = use_hook(ApiClient::new);

    let mut trend = use_signal(Vec::<HistoryPoint>::new);
    let mut loading = use_signal(|| true);
    let mut nearest = use_signal(|| None::<NearestStation>);
    let mut locating = use_signal(|| false);
    let mut location_error = use_signal(|| None::<String>);

    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                match client.history_trend().await {
                    Ok(points) => trend.set(points),
                    Err(e) => log::error!("history trend fetch failed: {e}"),
                }
                loading.set(false);
            });
        });
    }

    use_effect(move || {
        let points = trend.read();
        if points.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = points
            .iter()
            .map(|p| json!({ "label": p.date, "value": p.level }))
            .collect();
        let config = json!({
            "yAxisLabel": "Depth to water (m)",
            "invertY": true,
            "area": true,
            "color": "#2BB3C0",
        });
        js_bridge::render_line_chart(
            TREND_ID,
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    let on_locate = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            locating.set(true);
            location_error.set(None);
            spawn(async move {
                match js_bridge::current_position().await {
                    Ok((lat, lon)) => match client.nearest_station(lat, lon).await {
                        Ok(found) => nearest.set(Some(found)),
                        Err(e) => {
                            log::error!("nearest-station lookup failed: {e}");
                            location_error
                                .set(Some("Could not find a well near you.".into()));
                        }
                    },
                    Err(e) => {
                        log::warn!("geolocation denied or unavailable: {e}");
                        location_error.set(Some("Location access was denied.".into()));
                    }
                }
                locating.set(false);
            });
        }
    };

    let latest = trend.read().last().cloned();
    let card = "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                box-shadow: 0 1px 4px rgba(0,0,0,0.08);";

    rsx! {
        div { style: "max-width: 980px; margin: 0 auto; padding: 24px;",
            div { style: "display: flex; justify-content: space-between; align-items: flex-start;",
                PageHeader {
                    title: "My Water",
                    subtitle: "Groundwater near your fields, in plain terms",
                }
                button {
                    style: "padding: 8px 14px; border: 1px solid #D1D5DB; border-radius: 6px; \
                            background: #FFFFFF; cursor: pointer;",
                    onclick: move |_| state.logout(),
                    "Sign out"
                }
            }
            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 16px;",
                if let Some(point) = latest {
                    StatCard {
                        title: "Regional Water Depth",
                        value: format!("{:.1}", point.level),
                        unit: "m",
                        subtext: format!("as of {}", point.date),
                    }
                }
                StatCard {
                    title: "Season",
                    value: "Pre-monsoon".to_string(),
                    subtext: "levels usually recover from June",
                }
                SustainabilityRing { score: 62 }
            }
            div { style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px; margin-bottom: 16px;",
                div { style: "{card}",
                    h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Water Level Near You" }
                    ChartContainer { id: TREND_ID.to_string(), loading: loading(), min_height: 280 }
                }
                div { style: "{card}",
                    h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Nearest Well" }
                    button {
                        style: "padding: 8px 14px; border: none; border-radius: 6px; \
                                background: #145DA0; color: #FFFFFF; cursor: pointer;",
                        disabled: locating(),
                        onclick: on_locate,
                        if locating() { "Locating..." } else { "Find my nearest well" }
                    }
                    if let Some(err) = location_error() {
                        p { style: "color: #E53935; font-size: 0.85rem;", "{err}" }
                    }
                    if let Some(found) = nearest() {
                        div { style: "margin-top: 12px; font-size: 0.9rem;",
                            p { style: "margin: 2px 0; font-weight: 600;", "{found.station_name}" }
                            p { style: "margin: 2px 0;", "Water at {found.water_level:.1} m depth" }
                            p { style: "margin: 2px 0;", "{found.distance_km:.1} km away" }
                            p { style: "margin: 2px 0; color: #6B7280;", "Status: {found.status}" }
                        }
                    }
                }
            }
            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;",
                for (title, text) in ADVISORIES.iter().copied() {
                    div { style: "{card}",
                        h4 { style: "margin: 0 0 8px 0; color: #0B3954;", "{title}" }
                        p { style: "margin: 0; font-size: 0.85rem; color: #4B5563;", "{text}" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SustainabilityRingProps {
    /// 0..=100
    score: u32,
}

/// Presentational usage-sustainability dial; the score is an indicative
/// district figure, not a station measurement.
#[component]
fn SustainabilityRing(props: SustainabilityRingProps) -> Element {
    let score = props.score.min(100);
    let sweep = score as f64 * 3.6;
    let accent = if score >= 70 {
        "#4CA965"
    } else if score >= 40 {
        "#FFA000"
    } else {
        "#E53935"
    };
    let ring = format!(
        "width: 92px; height: 92px; border-radius: 50%; \
         background: conic-gradient({accent} 0deg {sweep}deg, #E5E7EB {sweep}deg 360deg); \
         display: flex; align-items: center; justify-content: center;"
    );

    rsx! {
        div { style: "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                      box-shadow: 0 1px 4px rgba(0,0,0,0.08); display: flex; \
                      align-items: center; gap: 16px;",
            div { style: "{ring}",
                div { style: "width: 68px; height: 68px; border-radius: 50%; background: #FFFFFF; \
                              display: flex; align-items: center; justify-content: center; \
                              font-weight: 700; color: #1F2937;",
                    "{score}"
                }
            }
            div {
                p { style: "margin: 0; font-size: 12px; color: #666; text-transform: uppercase; \
                            letter-spacing: 0.05em;",
                    "Sustainability Index"
                }
                p { style: "margin: 6px 0 0 0; font-size: 0.85rem; color: {accent};",
                    "Usage is near the sustainable limit"
                }
            }
        }
    }
}
