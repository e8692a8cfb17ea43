//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions and the Leaflet map helper are split across
//! `assets/js/*.js` and loaded at runtime. They are evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module
//! provides safe Rust wrappers that serialize data and call those
//! globals, plus the geolocation and blob-download bridges.

use wasm_bindgen::JsCast;

// Embed all chart/map JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");
static STATION_MAP_JS: &str = include_str!("../assets/js/station-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('JN JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart/map scripts with a wait-for-libraries polling loop.
///
/// The JS files define functions like `renderLineChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect `eval()` once D3 and Leaflet are both
/// ready, and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        LINE_CHART_JS,
        MULTI_LINE_CHART_JS,
        BAR_CHART_JS,
        PIE_CHART_JS,
        SCATTER_CHART_JS,
        DATA_TABLE_JS,
        STATION_MAP_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__jnChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__jnChartsReady) { delete window.__jnChartScripts; return; }
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__jnChartScripts);
                    delete window.__jnChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderMultiLineChart !== 'undefined') window.renderMultiLineChart = renderMultiLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    if (typeof renderStationMap !== 'undefined') window.renderStationMap = renderStationMap;
                    if (typeof destroyStationMap !== 'undefined') window.destroyStationMap = destroyStationMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__jnChartsReady = true;
                    console.log('JN charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string
/// literal. Backslashes are doubled before quote escaping so escapes
/// already present in the JSON survive the round trip.
fn escape_single_quoted(payload: &str) -> String {
    payload
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Render into a container once the libraries, the named global, and
/// the DOM element all exist.
fn render_when_ready(function_name: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_single_quoted(data_json);
    let escaped_config = escape_single_quoted(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__jnChartsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[JN] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a single line/area chart (water level trend, seasonal
/// pattern, citizen history).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render a multi-series line chart (projection, demand vs supply,
/// simulation band).
pub fn render_multi_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderMultiLineChart", container_id, data_json, config_json);
}

/// Render a bar chart (residual histogram, feature importance).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a donut chart (zone distribution).
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Render a scatter plot (stress vs depth, actual vs predicted).
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderScatterChart", container_id, data_json, config_json);
}

/// Render a sortable data table (prediction rows).
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDataTable", container_id, data_json, config_json);
}

/// Render the Leaflet station map with status-colored markers.
pub fn render_station_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderStationMap", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyStationMap) window.destroyStationMap('{container_id}'); \
         var el = document.getElementById('{container_id}'); if (el) el.innerHTML = '';",
    ));
}

/// Browser geolocation as an awaitable position.
///
/// Resolves to `(latitude, longitude)`; rejects with a user-facing
/// message when the API is unsupported, permission is denied, or the
/// lookup fails.
pub async fn current_position() -> Result<(f64, f64), String> {
    let code = r#"
        new Promise(function(resolve, reject) {
            if (!navigator.geolocation) {
                reject('Geolocation is not supported by your browser');
                return;
            }
            navigator.geolocation.getCurrentPosition(
                function(p) { resolve([p.coords.latitude, p.coords.longitude]); },
                function(e) { reject(e.message || 'Unable to retrieve your location'); }
            );
        })
    "#;
    let value =
        js_sys::eval(code).map_err(|_| "Geolocation call failed".to_string())?;
    let promise = js_sys::Promise::from(value);
    let result = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| {
            e.as_string()
                .unwrap_or_else(|| "Unable to retrieve your location".to_string())
        })?;
    let coords = js_sys::Array::from(&result);
    let lat = coords
        .get(0)
        .as_f64()
        .ok_or_else(|| "Malformed geolocation result".to_string())?;
    let lon = coords
        .get(1)
        .as_f64()
        .ok_or_else(|| "Malformed geolocation result".to_string())?;
    Ok((lat, lon))
}

/// Deliver backend-generated bytes as a browser download: object URL,
/// synthetic anchor click, revoke.
pub fn download_blob(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create anchor".to_string())?
        .dyn_into()
        .map_err(|_| "anchor has unexpected type".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    let body = document
        .body()
        .ok_or_else(|| "no document body".to_string())?;
    body.append_child(&anchor)
        .map_err(|_| "failed to attach anchor".to_string())?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::escape_single_quoted;

    #[test]
    fn backslashes_are_doubled_before_quotes_are_escaped() {
        assert_eq!(escape_single_quoted(r"C:\data"), r"C:\\data");
        assert_eq!(escape_single_quoted("it's"), r"it\'s");
    }

    #[test]
    fn json_escape_sequences_survive_embedding() {
        let json = r#"{"name":"O'Neil \"dug\" well"}"#;
        assert_eq!(
            escape_single_quoted(json),
            r#"{"name":"O\'Neil \\"dug\\" well"}"#
        );
    }
}
