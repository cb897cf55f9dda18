//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart drawing is split across `assets/js/*.js` and evaluated as globals
//! (no ES modules) exposed via `window.*`. D3.js and Mapbox GL arrive from
//! the host page's script tags, so every render call polls until the
//! libraries, the chart scripts, and the target container all exist.

// Embed the chart JS files at compile time.
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static HEATMAP_MAP_JS: &str = include_str!("../assets/js/heatmap-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WMS JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load the chart scripts once D3 and Mapbox GL are available.
///
/// The scripts declare their render functions with `function` statements;
/// evaluating them inside the polling callback would block-scope them, so
/// they are stashed on `window` and evaluated at global scope via indirect
/// eval, then promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [PIE_CHART_JS, LINE_CHART_JS, BAR_CHART_JS, HEATMAP_MAP_JS].join("\n");

    let store_js = format!(
        "window.__wmsChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof mapboxgl !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__wmsChartScripts);
                    delete window.__wmsChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderHeatmapMap !== 'undefined') window.renderHeatmapMap = renderHeatmapMap;
                    window.__wmsChartsReady = true;
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Invoke `window.<func>(container_id, data, config)` once the scripts are
/// initialized and the container exists in the DOM.
fn render_when_ready(func: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wmsChartsReady &&
                    typeof window.{func} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{func}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[WMS] {func} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the bin status donut.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Render a single-series line chart.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render the paired before/after bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render (or update) the Mapbox heatmap with a GeoJSON feature collection.
pub fn render_heatmap_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderHeatmapMap", container_id, data_json, config_json);
}

/// Clear a chart container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
