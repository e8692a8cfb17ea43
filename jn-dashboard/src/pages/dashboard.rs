use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::station::{NearestStation, Station};
use jn_api::stats::DashboardStats;
use jn_ui::components::{ChartContainer, PageHeader, StatCard};
use jn_ui::js_bridge;
use jn_ui::prep;
use jn_ui::session::Page;
use jn_ui::state::AppState;

const MAP_ID: &str = "overview-map";

/// Researcher landing page: headline stats, the station map and a short
/// anomaly list backed by `/api/dashboard/stats` and `/api/map/stations`.
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let client = use_hook(ApiClient::new);

    let mut stats = use_signal(DashboardStats::default);
    let mut stations = use_signal(Vec::<Station>::new);
    let mut loading = use_signal(|| true);
    let mut nearest = use_signal(|| None::<NearestStation>);
    let mut locating = use_signal(|| false);
    let mut location_error = use_signal(|| None::<String>);

    {
        let client = client.clone();
        use_effect(move || {
            let stats_client = client.clone();
            spawn(async move {
                match stats_client.dashboard_stats().await {
                    Ok(s) => stats.set(s),
                    Err(e) => log::error!("failed to fetch dashboard stats: {e}"),
                }
            });
            let map_client = client.clone();
            spawn(async move {
                match map_client.map_stations().await {
                    Ok(list) => stations.set(list),
                    Err(e) => log::error!("failed to fetch map stations: {e}"),
                }
                loading.set(false);
            });
        });
    }

    use_effect(move || {
        let list = stations.read();
        if list.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = list
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "name": s.name,
                    "lat": s.lat,
                    "lng": s.lng,
                    "level": s.level,
                    "status": s.status.label(),
                    "color": prep::status_color(s.status),
                })
            })
            .collect();
        let config = serde_json::json!({});
        js_bridge::render_station_map(
            MAP_ID,
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
                            location_error.set(Some("Could not look up the nearest station.".into()));
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

    let s = stats();
    let critical_tone = if s.critical_count > 0 { "critical" } else { "safe" };
    let today = chrono::Local::now().format("%A, %e %B %Y").to_string();

    let anomalies: Vec<(Station, &'static str)> = stations
        .read()
        .iter()
        .filter(|st| st.status.is_alarming())
        .take(3)
        .map(|st| (st.clone(), prep::status_color(st.status)))
        .collect();

    rsx! {
        PageHeader {
            title: "Groundwater Overview",
            subtitle: "{today}",
        }
        div { style: "background: #FFF7E6; border: 1px solid #F0C36D; border-radius: 8px; \
                      padding: 10px 16px; margin-bottom: 20px; color: #8A6D3B; font-size: 0.9rem;",
            "Pre-monsoon drawdown is in progress. Levels in hard-rock blocks typically \
             drop until the first week of June."
        }
        div { style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-bottom: 24px;",
            StatCard {
                title: "Average Water Level",
                value: format!("{:.1}", s.avg_level),
                unit: "m bgl",
                subtext: "across monitored stations",
            }
            StatCard {
                title: "Critical Stations",
                value: s.critical_count.to_string(),
                subtext: "critical or over-exploited",
                tone: critical_tone.to_string(),
            }
            StatCard {
                title: "Recharge Rate",
                value: format!("{:.0}", s.recharge_rate),
                unit: "%",
                subtext: "of long-period average",
                tone: "safe",
            }
            StatCard {
                title: "Supply Gap",
                value: format!("{:.0}", s.supply_gap),
                unit: "%",
                subtext: "demand above availability",
                tone: "warning",
            }
        }
        div { style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px;",
            div { style: "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                          box-shadow: 0 1px 4px rgba(0,0,0,0.08);",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Station Map" }
                ChartContainer { id: MAP_ID.to_string(), loading: loading(), min_height: 360 }
            }
            div {
                div { style: "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                              margin-bottom: 16px; box-shadow: 0 1px 4px rgba(0,0,0,0.08);",
                    h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Nearest Station" }
                    button {
                        style: "padding: 8px 14px; border: none; border-radius: 6px; \
                                background: #145DA0; color: #FFFFFF; cursor: pointer;",
                        disabled: locating(),
                        onclick: on_locate,
                        if locating() { "Locating..." } else { "Use my location" }
                    }
                    if let Some(err) = location_error() {
                        p { style: "color: #E53935; font-size: 0.85rem;", "{err}" }
                    }
                    if let Some(found) = nearest() {
                        div { style: "margin-top: 12px; font-size: 0.9rem;",
                            p { style: "margin: 2px 0; font-weight: 600;", "{found.station_name}" }
                            p { style: "margin: 2px 0;",
                                "Water level: {found.water_level:.1} m bgl"
                            }
                            p { style: "margin: 2px 0;",
                                "Distance: {found.distance_km:.1} km \u{2022} {found.status}"
                            }
                        }
                    }
                }
                div { style: "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                              margin-bottom: 16px; box-shadow: 0 1px 4px rgba(0,0,0,0.08);",
                    h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Anomalies" }
                    if anomalies.is_empty() {
                        p { style: "color: #6B7280; font-size: 0.85rem;", "No alarming stations." }
                    }
                    for (st, color) in anomalies {
                        div { style: "display: flex; justify-content: space-between; \
                                      padding: 6px 0; border-bottom: 1px solid #F3F4F6; font-size: 0.85rem;",
                            span { "{st.name}" }
                            span { style: "color: {color}; font-weight: 600;", "{st.status}" }
                        }
                    }
                }
                div { style: "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                              box-shadow: 0 1px 4px rgba(0,0,0,0.08);",
                    h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Quick Tools" }
                    div { style: "display: flex; flex-direction: column; gap: 8px;",
                        button {
                            style: "padding: 8px; border: 1px solid #D1D5DB; border-radius: 6px; \
                                    background: #F9FAFB; cursor: pointer; text-align: left;",
                            onclick: move |_| state.navigate(Page::Prediction),
                            "Project future water levels"
                        }
                        button {
                            style: "padding: 8px; border: 1px solid #D1D5DB; border-radius: 6px; \
                                    background: #F9FAFB; cursor: pointer; text-align: left;",
                            onclick: move |_| state.navigate(Page::Simulation),
                            "Run a climate scenario"
                        }
                        button {
                            style: "padding: 8px; border: 1px solid #D1D5DB; border-radius: 6px; \
                                    background: #F9FAFB; cursor: pointer; text-align: left;",
                            onclick: move |_| state.navigate(Page::Reports),
                            "Download a station report"
                        }
                    }
                }
            }
        }
    }
}
