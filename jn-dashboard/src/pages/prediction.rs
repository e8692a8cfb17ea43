use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::forecast::{ForecastPoint, ScenarioParams, CHANGE_PCT_RANGE, YEARS_RANGE};
use jn_api::trends::WaterLevelPoint;
use jn_ui::components::{ChartContainer, PageHeader, StatCard, StationSelector};
use jn_ui::js_bridge;
use jn_ui::prep;
use jn_ui::state::{AppState, FetchGen};
use serde_json::json;

const CHART_ID: &str = "projection-chart";

/// What-if projection page: demand/supply sliders plus a horizon slider
/// drive the forecast endpoint, and the result is drawn as one
/// continuous series after the annual history.
#[component]
pub fn FuturePrediction() -> Element {
    let mut state = use_context::<AppState>();
    let client = use_hook(ApiClient::new);

    let mut demand_change = use_signal(|| 0.0f64);
    let mut supply_change = use_signal(|| 0.0f64);
    let mut years = use_signal(|| 5u32);
    let mut history = use_signal(Vec::<WaterLevelPoint>::new);
    let mut forecast = use_signal(Vec::<ForecastPoint>::new);
    let mut fetch_gen = use_signal(FetchGen::default);
    let mut loading = use_signal(|| false);

    {
        let client = client.clone();
        use_effect(move || {
            if !state.stations.peek().is_empty() {
                return;
            }
            let client = client.clone();
            spawn(async move {
                match client.analytics_stations().await {
                    Ok(list) => {
                        if state.selected_station.peek().is_empty() {
                            if let Some(first) = list.first() {
                                state.selected_station.set(first.id.clone());
                            }
                        }
                        state.stations.set(list);
                    }
                    Err(e) => log::error!("failed to fetch station list: {e}"),
                }
            });
        });
    }

    {
        let client = client.clone();
        use_effect(move || {
            let station = (state.selected_station)();
            if station.is_empty() {
                return;
            }
            let params = ScenarioParams::new(demand_change(), supply_change(), years());
            let generation = fetch_gen.write().begin();
            loading.set(true);

            {
                let client = client.clone();
                let station = station.clone();
                spawn(async move {
                    match client.water_level_trend(&station).await {
                        Ok(points) => {
                            if fetch_gen.peek().is_current(generation) {
                                history.set(points);
                            }
                        }
                        Err(e) => log::error!("history fetch failed: {e}"),
                    }
                });
            }
            {
                let client = client.clone();
                spawn(async move {
                    match client.forecast(&station, &params).await {
                        Ok(points) => {
                            if fetch_gen.peek().is_current(generation) {
                                forecast.set(points);
                            }
                        }
                        Err(e) => log::error!("forecast fetch failed: {e}"),
                    }
                    if fetch_gen.peek().is_current(generation) {
                        loading.set(false);
                    }
                });
            }
        });
    }

    use_effect(move || {
        let rows = prep::combine_projection(&history.read(), &forecast.read());
        if rows.is_empty() {
            return;
        }
        let config = json!({
            "yAxisLabel": "Water level (m bgl)",
            "invertY": true,
            "colors": { "history": "#0088FE", "forecast": "#FF6B6B" },
            "dashedSeries": ["forecast"],
            "bandSeries": ["forecast"],
        });
        js_bridge::render_multi_line_chart(
            CHART_ID,
            &serde_json::to_string(&rows).unwrap_or_default(),
            &config.to_string(),
        );
    });

    let horizon = forecast.read().last().cloned();
    let (pct_min, pct_max) = CHANGE_PCT_RANGE;
    let (years_min, years_max) = YEARS_RANGE;
    let demand_now = demand_change();
    let supply_now = supply_change();
    let years_now = years();
    let card = "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                box-shadow: 0 1px 4px rgba(0,0,0,0.08);";

    rsx! {
        PageHeader {
            title: "Future Projection",
            subtitle: "Model-driven water level forecast under adjustable demand and supply",
        }
        div { style: "display: grid; grid-template-columns: 280px 1fr; gap: 16px;",
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Scenario Controls" }
                StationSelector {}
                div { style: "margin: 16px 0;",
                    label { style: "display: block; font-size: 0.85rem; margin-bottom: 4px;",
                        "Demand change: {demand_now:+.1}%"
                    }
                    input {
                        r#type: "range",
                        min: "{pct_min}",
                        max: "{pct_max}",
                        step: "0.5",
                        value: "{demand_now}",
                        style: "width: 100%;",
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse::<f64>() {
                                demand_change.set(v);
                            }
                        },
                    }
                }
                div { style: "margin: 16px 0;",
                    label { style: "display: block; font-size: 0.85rem; margin-bottom: 4px;",
                        "Supply change: {supply_now:+.1}%"
                    }
                    input {
                        r#type: "range",
                        min: "{pct_min}",
                        max: "{pct_max}",
                        step: "0.5",
                        value: "{supply_now}",
                        style: "width: 100%;",
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse::<f64>() {
                                supply_change.set(v);
                            }
                        },
                    }
                }
                div { style: "margin: 16px 0;",
                    label { style: "display: block; font-size: 0.85rem; margin-bottom: 4px;",
                        "Horizon: {years_now} years"
                    }
                    input {
                        r#type: "range",
                        min: "{years_min}",
                        max: "{years_max}",
                        step: "1",
                        value: "{years_now}",
                        style: "width: 100%;",
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse::<u32>() {
                                years.set(v);
                            }
                        },
                    }
                }
            }
            div {
                if let Some(end) = horizon {
                    div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 16px;",
                        StatCard {
                            title: "Projected Level",
                            value: format!("{:.1}", end.water_level),
                            unit: "m bgl",
                            subtext: format!("{} {}", end.month, end.year),
                        }
                        StatCard {
                            title: "Projected Stress",
                            value: format!("{:.2}", end.stress_index),
                            subtext: "demand over availability",
                        }
                        StatCard {
                            title: "Projected Zone",
                            value: end.zone.clone(),
                            tone: zone_tone(&end.zone).to_string(),
                        }
                    }
                }
                div { style: "{card}",
                    h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "History and Forecast" }
                    ChartContainer { id: CHART_ID.to_string(), loading: loading(), min_height: 380 }
                }
            }
        }
    }
}

fn zone_tone(zone: &str) -> &'static str {
    match zone {
        "Safe" => "safe",
        "Semi-Critical" => "warning",
        "Critical" | "Over-Exploited" => "critical",
        _ => "default",
    }
}
