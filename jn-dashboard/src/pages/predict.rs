use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::simulation::PredictionRow;
use jn_ui::components::{require_file, ChartContainer, ErrorDisplay, FilePicker, PageHeader, SelectedFile};
use jn_ui::js_bridge;
use serde_json::json;

const TABLE_ID: &str = "prediction-table";

/// Batch prediction page: upload observation rows as CSV, get back the
/// model's level, stress and alert columns as a sortable table.
#[component]
pub fn Predict() -> Element {
    let client = use_hook(ApiClient::new);

    let mut file = use_signal(|| None::<SelectedFile>);
    let mut running = use_signal(|| false);
    let mut rows = use_signal(Vec::<PredictionRow>::new);
    let mut error = use_signal(|| None::<String>);

    let on_predict = {
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
            let client = client.clone();
            running.set(true);
            error.set(None);
            spawn(async move {
                match client.predict_csv(&selected.name, selected.bytes).await {
                    Ok(predicted) => rows.set(predicted),
                    Err(e) => {
                        log::error!("batch prediction failed: {e}");
                        error.set(Some(
                            "Prediction failed. Check that the CSV has the expected columns.".into(),
                        ));
                    }
                }
                running.set(false);
            });
        }
    };

    use_effect(move || {
        let predicted = rows.read();
        if predicted.is_empty() {
            return;
        }
        let data: Vec<serde_json::Value> = predicted
            .iter()
            .map(|r| {
                json!({
                    "date": r.date.clone().unwrap_or_default(),
                    "prediction": format!("{:.2}", r.prediction),
                    "stress_index": format!("{:.3}", r.stress_index),
                    "zone": r.zone,
                    "alerts": r.alerts,
                })
            })
            .collect();
        let config = json!({
            "columns": [
                { "key": "date", "label": "Date" },
                { "key": "prediction", "label": "Predicted level (m bgl)" },
                { "key": "stress_index", "label": "Stress index" },
                { "key": "zone", "label": "Zone" },
                { "key": "alerts", "label": "Alerts" },
            ],
        });
        js_bridge::render_data_table(
            TABLE_ID,
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    let file_name = file.read().as_ref().map(|f| f.name.clone());
    let row_count = rows.read().len();
    let alert_count = rows
        .read()
        .iter()
        .filter(|r| r.alerts != "NO_ALERT")
        .count();
    let card = "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                box-shadow: 0 1px 4px rgba(0,0,0,0.08);";

    rsx! {
        PageHeader {
            title: "Batch Prediction",
            subtitle: "Run the forecast model over an uploaded observation CSV",
        }
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        div { style: "{card} margin-bottom: 16px; display: flex; align-items: center; gap: 16px;",
            FilePicker {
                on_select: move |selected: SelectedFile| {
                    file.set(Some(selected));
                    error.set(None);
                },
            }
            if let Some(name) = file_name {
                span { style: "font-size: 0.85rem; color: #4CA965;", "Loaded: {name}" }
            }
            button {
                style: "padding: 10px 18px; border: none; border-radius: 6px; \
                        background: #145DA0; color: #FFFFFF; cursor: pointer;",
                disabled: running(),
                onclick: on_predict,
                if running() { "Predicting..." } else { "Upload & Predict" }
            }
        }
        if row_count > 0 {
            p { style: "margin: 0 0 12px 0; font-size: 0.85rem; color: #6B7280;",
                "{row_count} rows predicted, {alert_count} with alerts."
            }
        }
        div { style: "{card}",
            ChartContainer { id: TABLE_ID.to_string(), loading: running(), min_height: 360 }
        }
    }
}
