use dioxus::prelude::*;
use jn_api::client::ApiClient;
use jn_api::model::ModelAnalysis;
use jn_ui::components::{ChartContainer, ErrorDisplay, PageHeader, StatCard};
use jn_ui::js_bridge;
use jn_ui::prep;
use serde_json::json;

const HISTOGRAM_BINS: usize = 20;
const TOP_FEATURES: u32 = 3;

/// Transparency page for the trained forecast model: accuracy scatter,
/// residual histogram and feature importances from `/api/model/analysis`.
#[component]
pub fn ModelPerformance() -> Element {
    let client = use_hook(ApiClient::new);

    let mut analysis = use_signal(|| None::<ModelAnalysis>);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    {
        let client = client.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                match client.model_analysis().await {
                    Ok(payload) => analysis.set(Some(payload)),
                    Err(e) => {
                        log::error!("model analysis fetch failed: {e}");
                        error.set(Some(
                            "Model analysis is unavailable. Is a trained model loaded?".into(),
                        ));
                    }
                }
                loading.set(false);
            });
        });
    }

    use_effect(move || {
        let guard = analysis.read();
        let Some(payload) = guard.as_ref() else {
            return;
        };

        let scatter: Vec<serde_json::Value> = payload
            .scatter
            .iter()
            .map(|p| json!({ "x": p.actual, "y": p.predicted }))
            .collect();
        js_bridge::render_scatter_chart(
            "model-scatter",
            &serde_json::to_string(&scatter).unwrap_or_default(),
            &json!({
                "xLabel": "Actual (m bgl)",
                "yLabel": "Predicted (m bgl)",
                "diagonal": true,
            })
            .to_string(),
        );

        let bins = prep::residual_histogram(&payload.residuals, HISTOGRAM_BINS);
        let histogram: Vec<serde_json::Value> = bins
            .iter()
            .map(|b| json!({ "label": b.bin, "value": b.count }))
            .collect();
        js_bridge::render_bar_chart(
            "model-residuals",
            &serde_json::to_string(&histogram).unwrap_or_default(),
            &json!({ "color": "#8884D8" }).to_string(),
        );

        let features: Vec<serde_json::Value> = payload
            .feature_importance
            .iter()
            .map(|f| json!({ "label": f.name, "value": f.value }))
            .collect();
        js_bridge::render_bar_chart(
            "model-features",
            &serde_json::to_string(&features).unwrap_or_default(),
            &json!({
                "horizontal": true,
                "highlightCount": TOP_FEATURES,
                "highlightColor": "#145DA0",
            })
            .to_string(),
        );
    });

    let summary = analysis.read().as_ref().map(|payload| {
        (
            payload.metrics.r2,
            prep::mean_residual(&payload.residuals),
            payload.scatter.len(),
        )
    });
    let card = "background: #FFFFFF; border-radius: 10px; padding: 16px; \
                box-shadow: 0 1px 4px rgba(0,0,0,0.08);";

    rsx! {
        PageHeader {
            title: "Model Performance",
            subtitle: "How well the forecast model tracks held-out observations",
        }
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        if let Some((r2, mean_res, samples)) = summary {
            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 16px;",
                StatCard {
                    title: "R\u{b2} Score",
                    value: format!("{r2:.3}"),
                    subtext: "held-out test split",
                }
                StatCard {
                    title: "Mean Residual",
                    value: format!("{mean_res:+.2}"),
                    unit: "m",
                    subtext: "positive means the model under-predicts depth",
                }
                StatCard {
                    title: "Test Samples",
                    value: samples.to_string(),
                }
            }
        }
        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Actual vs Predicted" }
                ChartContainer { id: "model-scatter".to_string(), loading: loading() }
            }
            div { style: "{card}",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Residual Distribution" }
                ChartContainer { id: "model-residuals".to_string(), loading: loading() }
            }
            div { style: "{card} grid-column: span 2;",
                h3 { style: "margin: 0 0 12px 0; color: #0B3954;", "Feature Importance" }
                ChartContainer { id: "model-features".to_string(), loading: loading() }
            }
        }
    }
}
