use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::trends::{
    DemandSupplyPoint, ScatterPoint, SeasonalPoint, StressIndexPoint, WaterLevelPoint, ZoneSlice,
};
use jn_ui::components::{ChartContainer, PageHeader, StationSelector};
use jn_ui::js_bridge;
use jn_ui::prep;
use jn_ui::state::{AppState, FetchGen};
use serde_json::json;

/// Scope of the analytics queries; "all" aggregates every station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    National,
    Station,
}

const FETCH_COUNT: u32 = 6;

/// Six-panel analytics page. Every filter change kicks off one batch of
/// six parallel requests; a generation counter discards responses that
/// arrive after the filters moved on.
#[component]
pub fn Analytics() -> Element {
    let mut state = use_context::<AppState>();
    let client = use_hook(ApiClient::new);

    let mut scope = use_signal(|| Scope::National);
    let mut water = use_signal(Vec::<WaterLevelPoint>::new);
    let mut demand_supply = use_signal(Vec::<DemandSupplyPoint>::new);
    let mut stress = use_signal(Vec::<StressIndexPoint>::new);
    let mut zones = use_signal(Vec::<ZoneSlice>::new);
    let mut seasonal = use_signal(Vec::<SeasonalPoint>::new);
    let mut scatter = use_signal(Vec::<ScatterPoint>::new);
    let mut fetch_gen = use_signal(FetchGen::default);
    let mut pending = use_signal(|| 0u32);

    // Station list for the selector, fetched once per session.
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
            let station_param = match scope() {
                Scope::National => "all".to_string(),
                Scope::Station => {
                    let selected = (state.selected_station)();
                    if selected.is_empty() {
                        return;
                    }
                    selected
                }
            };
            let generation = fetch_gen.write().begin();
            pending.set(FETCH_COUNT);

            {
                let client = client.clone();
                let station = station_param.clone();
                spawn(async move {
                    match client.water_level_trend(&station).await {
                        Ok(points) => {
                            if fetch_gen.peek().is_current(generation) {
                                water.set(points);
                            }
                        }
                        Err(e) => log::error!("water-level trend fetch failed: {e}"),
                    }
                    if fetch_gen.peek().is_current(generation) {
                        let remaining = pending.peek().saturating_sub(1);
                        pending.set(remaining);
                    }
                });
            }
            {
                let client = client.clone();
                let station = station_param.clone();
                spawn(async move {
                    match client.demand_supply_trend(&station).await {
                        Ok(points) => {
                            if fetch_gen.peek().is_current(generation) {
                                demand_supply.set(points);
                            }
                        }
                        Err(e) => log::error!("demand-supply trend fetch failed: {e}"),
                    }
                    if fetch_gen.peek().is_current(generation) {
                        let remaining = pending.peek().saturating_sub(1);
                        pending.set(remaining);
                    }
                });
            }
            {
                let client = client.clone();
                let station = station_param.clone();
                spawn(async move {
                    match client.stress_index_trend(&station).await {
                        Ok(points) => {
                            if fetch_gen.peek().is_current(generation) {
                                stress.set(points);
                            }
                        }
                        Err(e) => log::error!("stress-index trend fetch failed: {e}"),
                    }
                    if fetch_gen.peek().is_current(generation) {
                        let remaining = pending.peek().saturating_sub(1);
                        pending.set(remaining);
                    }
                });
            }
            {
                let client = client.clone();
                let station = station_param.clone();
                spawn(async move {
                    match client.zone_distribution(&station).await {
                        Ok(slices) => {
                            if fetch_gen.peek().is_current(generation) {
                                zones.set(slices);
                            }
                        }
                        Err(e) => log::error!("zone distribution fetch failed: {e}"),
                    }
                    if fetch_gen.peek().is_current(generation) {
                        let remaining = pending.peek().saturating_sub(1);
                        pending.set(remaining);
                    }
                });
            }
            {
                let client = client.clone();
                let station = station_param.clone();
                spawn(async move {
                    match client.seasonal_pattern(&station).await {
                        Ok(points) => {
                            if fetch_gen.peek().is_current(generation) {
                                seasonal.set(points);
                            }
                        }
                        Err(e) => log::error!("seasonal pattern fetch failed: {e}"),
                    }
                    if fetch_gen.peek().is_current(generation) {
                        let remaining = pending.peek().saturating_sub(1);
                        pending.set(remaining);
                    }
                });
            }
            {
                let client = client.clone();
                spawn(async move {
                    match client.stress_water_scatter(&station_param).await {
                        Ok(points) => {
                            if fetch_gen.peek().is_current(generation) {
                                scatter.set(points);
                            }
                        }
                        Err(e) => log::error!("stress-water scatter fetch failed: {e}"),
                    }
                    if fetch_gen.peek().is_current(generation) {
                        let remaining = pending.peek().saturating_sub(1);
                        pending.set(remaining);
                    }
                });
            }
        });
    }

    // Chart renders re-run whenever their data signal changes.
    use_effect(move || {
        let points = water.read();
        if points.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = points
            .iter()
            .map(|p| json!({ "label": p.year.to_string(), "value": p.water_level }))
            .collect();
        let config = json!({
            "yAxisLabel": "Water level (m bgl)",
            "invertY": true,
            "area": true,
            "color": "#0088FE",
        });
        js_bridge::render_line_chart(
            "analytics-water",
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    use_effect(move || {
        let points = demand_supply.read();
        if points.is_empty() {
            return;
        }
        let mut data = Vec::with_capacity(points.len() * 2);
        for p in points.iter() {
            data.push(json!({ "label": p.year.to_string(), "series": "demand", "value": p.demand }));
            data.push(json!({ "label": p.year.to_string(), "series": "supply", "value": p.supply }));
        }
        let config = json!({
            "yAxisLabel": "Volume (MCM)",
            "colors": { "demand": "#FF8042", "supply": "#00C49F" },
        });
        js_bridge::render_multi_line_chart(
            "analytics-demand-supply",
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    use_effect(move || {
        let points = stress.read();
        if points.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = points
            .iter()
            .map(|p| json!({ "label": p.year.to_string(), "value": p.stress_index }))
            .collect();
        let config = json!({ "yAxisLabel": "Stress index", "color": "#8884D8" });
        js_bridge::render_line_chart(
            "analytics-stress",
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    use_effect(move || {
        let slices = zones.read();
        // Station view gets a single-slice payload rendered as a plain
        // label, not a donut.
        if slices.is_empty() || (scope() == Scope::Station && slices.len() == 1) {
            return;
        }
        let data: Vec<serde_json::Value> = slices
            .iter()
            .map(|s| json!({ "name": s.name, "value": s.value, "color": prep::zone_color(&s.name) }))
            .collect();
        js_bridge::render_pie_chart(
            "analytics-zones",
            &serde_json::to_string(&data).unwrap_or_default(),
            &json!({}).to_string(),
        );
    });

    use_effect(move || {
        let points = seasonal.read();
        if points.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = points
            .iter()
            .map(|p| json!({ "label": p.month, "value": p.water_level }))
            .collect();
        let config = json!({
            "yAxisLabel": "Water level (m bgl)",
            "invertY": true,
            "color": "#2BB3C0",
        });
        js_bridge::render_line_chart(
            "analytics-seasonal",
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    use_effect(move || {
        let points = scatter.read();
        if points.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = points
            .iter()
            .map(|p| json!({ "x": p.stress_index, "y": p.water_level }))
            .collect();
        let config = json!({
            "xLabel": "Stress index",
            "yLabel": "Water level (m bgl)",
            "invertY": true,
        });
        js_bridge::render_scatter_chart(
            "analytics-scatter",
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    let loading = pending() > 0;
    let single_zone = if scope() == Scope::Station {
        let slices = zones.read();
        match slices.as_slice() {
            [only] => Some((only.name.clone(), prep::zone_color(&only.name))),
            _ => None,
        }
    } else {
        None
    };
    let card = "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                box-shadow: 0 1px 4px rgba(0,0,0,0.08);";

    rsx! {
        PageHeader {
            title: "Analytics",
            subtitle: "Long-term trends across the monitoring network",
        }
        div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 20px;",
            button {
                style: toggle_style(scope() == Scope::National),
                onclick: move |_| scope.set(Scope::National),
                "National"
            }
            button {
                style: toggle_style(scope() == Scope::Station),
                onclick: move |_| scope.set(Scope::Station),
                "Station"
            }
            if scope() == Scope::Station {
                StationSelector {}
            }
        }
        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Water Level Trend" }
                ChartContainer { id: "analytics-water".to_string(), loading }
            }
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Demand vs Supply" }
                ChartContainer { id: "analytics-demand-supply".to_string(), loading }
            }
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Stress Index Trend" }
                ChartContainer { id: "analytics-stress".to_string(), loading }
            }
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Zone Distribution" }
                if let Some((zone, color)) = single_zone {
                    div { style: "display: flex; flex-direction: column; align-items: center; \
                                  justify-content: center; min-height: 300px;",
                        span { style: "padding: 10px 24px; border-radius: 20px; font-size: 1.1rem; \
                                       font-weight: 600; color: #FFFFFF; background: {color};",
                            "{zone}"
                        }
                        p { style: "margin: 12px 0 0 0; font-size: 0.85rem; color: #6B7280;",
                            "Current classification for the selected station"
                        }
                    }
                } else {
                    ChartContainer { id: "analytics-zones".to_string(), loading }
                }
            }
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Seasonal Pattern" }
                ChartContainer { id: "analytics-seasonal".to_string(), loading }
            }
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Stress vs Water Level" }
                ChartContainer { id: "analytics-scatter".to_string(), loading }
            }
        }
    }
}

fn toggle_style(active: bool) -> &'static str {
    if active {
        "padding: 8px 16px; border: 1px solid #145DA0; border-radius: 6px; \
         background: #145DA0; color: #FFFFFF; cursor: pointer;"
    } else {
        "padding: 8px 16px; border: 1px solid #D1D5DB; border-radius: 6px; \
         background: #FFFFFF; color: #374151; cursor: pointer;"
    }
}
