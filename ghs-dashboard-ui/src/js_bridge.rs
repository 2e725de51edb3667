//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Charts are drawn by Plotly, loaded from its CDN as a global script.
//! Render calls poll until both `window.Plotly` and the container element
//! exist, so they can be issued before either is ready.

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GHS JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Plotly script tag. Safe to call more than once.
pub fn init_charts() {
    call_js(&format!(
        r#"
        if (!window.__ghsPlotlyRequested) {{
            window.__ghsPlotlyRequested = true;
            var script = document.createElement('script');
            script.src = '{PLOTLY_SRC}';
            script.onload = function() {{ console.log('GHS charts initialized'); }};
            document.head.appendChild(script);
        }}
        "#,
    ));
}

/// Draw (or redraw in place) a Plotly figure in the given container.
pub fn render_chart(container_id: &str, figure_json: &str) {
    call_js(&render_chart_script(container_id, figure_json));
}

/// The polling script behind [`render_chart`]. Both arguments are embedded
/// as JSON string literals.
pub fn render_chart_script(container_id: &str, figure_json: &str) -> String {
    let id = serde_json::to_string(container_id).unwrap_or_default();
    let figure = serde_json::to_string(figure_json).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof window.Plotly !== 'undefined' && document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        var figure = JSON.parse({figure});
                        var config = {{responsive: true, displaylogo: false}};
                        window.Plotly.react({id}, figure.data, figure.layout, config);
                    }} catch(e) {{ console.error('[GHS] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}
