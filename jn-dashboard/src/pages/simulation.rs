use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::simulation::{ClimateScenario, PolicyIntervention, ScenarioDeltas, SimulationPoint};
use jn_ui::components::{require_file, ChartContainer, ErrorDisplay, FilePicker, PageHeader, SelectedFile};
use jn_ui::js_bridge;
use serde_json::json;

const CHART_ID: &str = "simulation-chart";

/// Scenario simulation page: upload a station CSV, pick a climate
/// scenario and a policy intervention, and plot the simulated forecast
/// band returned by the backend.
#[component]
pub fn Simulation() -> Element {
    let client = use_hook(ApiClient::new);

    let mut file = use_signal(|| None::<SelectedFile>);
    let mut scenario = use_signal(|| ClimateScenario::Normal);
    let mut policy = use_signal(|| PolicyIntervention::NoPolicy);
    let mut running = use_signal(|| false);
    let mut result = use_signal(Vec::<SimulationPoint>::new);
    let mut error = use_signal(|| None::<String>);

    let on_run = {
        let client = client.clone();
        move |_| {
            let guard = file.read();
            let selected = match require_file(guard.as_ref()) {
                Ok(selected) => selected.clone(),
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };
            drop(guard);
            let deltas = ScenarioDeltas::for_scenario(scenario(), policy());
            let client = client.clone();
            running.set(true);
            error.set(None);
            spawn(async move {
                match client.simulate(&selected.name, selected.bytes, deltas).await {
                    Ok(points) => result.set(points),
                    Err(e) => {
                        log::error!("simulation failed: {e}");
                        error.set(Some(
                            "Simulation failed. Check that the CSV has the expected columns.".into(),
                        ));
                    }
                }
                running.set(false);
            });
        }
    };

    use_effect(move || {
        let points = result.read();
        if points.is_empty() {
            return;
        }
        let mut data = Vec::with_capacity(points.len() * 2);
        for p in points.iter() {
            if let Some(actual) = p.actual {
                data.push(json!({ "label": p.date, "series": "actual", "value": actual }));
            }
            data.push(json!({
                "label": p.date,
                "series": "simulated",
                "value": p.predicted,
                "lower": p.lower_bound,
                "upper": p.upper_bound,
            }));
        }
        let config = json!({
            "yAxisLabel": "Water level (m bgl)",
            "invertY": true,
            "colors": { "actual": "#0088FE", "simulated": "#FF6B6B" },
            "dashedSeries": ["simulated"],
            "bandSeries": ["simulated"],
        });
        js_bridge::render_multi_line_chart(
            CHART_ID,
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    let file_name = file.read().as_ref().map(|f| f.name.clone());
    let scenario_label = scenario().to_string();
    let policy_label = policy().to_string();
    let card = "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                box-shadow: 0 1px 4px rgba(0,0,0,0.08);";

    rsx! {
        PageHeader {
            title: "Scenario Simulation",
            subtitle: "Stress-test a station's outlook under climate and policy assumptions",
        }
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        div { style: "display: grid; grid-template-columns: 300px 1fr; gap: 16px;",
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Inputs" }
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; font-size: 0.85rem; margin-bottom: 4px;",
                        "Station history CSV"
                    }
                    FilePicker {
                        on_select: move |selected: SelectedFile| {
                            file.set(Some(selected));
                            error.set(None);
                        },
                    }
                    if let Some(name) = file_name {
                        p { style: "margin: 6px 0 0 0; font-size: 0.8rem; color: #4CA965;",
                            "Loaded: {name}"
                        }
                    }
                }
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; font-size: 0.85rem; margin-bottom: 4px;",
                        "Climate scenario"
                    }
                    select {
                        style: "width: 100%; padding: 6px;",
                        onchange: move |evt: Event<FormData>| {
                            scenario.set(match evt.value().as_str() {
                                "drought" => ClimateScenario::Drought,
                                "excess" => ClimateScenario::ExcessRainfall,
                                _ => ClimateScenario::Normal,
                            });
                        },
                        option { value: "normal", "Normal" }
                        option { value: "drought", "Drought" }
                        option { value: "excess", "Excess rainfall" }
                    }
                }
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; font-size: 0.85rem; margin-bottom: 4px;",
                        "Policy intervention"
                    }
                    select {
                        style: "width: 100%; padding: 6px;",
                        onchange: move |evt: Event<FormData>| {
                            policy.set(match evt.value().as_str() {
                                "rainwater" => PolicyIntervention::RainwaterHarvesting,
                                "crop_rotation" => PolicyIntervention::CropRotation,
                                "industry_cap" => PolicyIntervention::IndustrialCap,
                                _ => PolicyIntervention::NoPolicy,
                            });
                        },
                        option { value: "none", "No policy" }
                        option { value: "rainwater", "Rainwater harvesting" }
                        option { value: "crop_rotation", "Crop rotation" }
                        option { value: "industry_cap", "Industrial cap" }
                    }
                }
                button {
                    style: "width: 100%; padding: 10px; border: none; border-radius: 6px; \
                            background: #145DA0; color: #FFFFFF; cursor: pointer;",
                    disabled: running(),
                    onclick: on_run,
                    if running() { "Simulating..." } else { "Run Simulation" }
                }
            }
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;",
                    "Simulated Outlook: {scenario_label} / {policy_label}"
                }
                ChartContainer { id: CHART_ID.to_string(), loading: running(), min_height: 420 }
            }
        }
    }
}
