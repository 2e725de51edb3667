//! Global Health Statistics Explorer
//!
//! Interactive dashboard over a table of disease statistics by country,
//! year, gender and age group. The sidebar filters narrow the rows every
//! panel is computed from; per-chart selectors pick the plotted metric.
//!
//! Data flow:
//! 1. `build.rs` copies `Global_Health_Stats.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into a `Dataset` and a session
//!    coordinator publishes the first snapshot.
//! 4. Each filter change publishes a new snapshot; the charts of the
//!    active tab are redrawn from it via `Plotly.react`.

use dioxus::prelude::*;
use ghs_dashboard_ui::components::{
    ChartCard, ErrorDisplay, FilterSidebar, LoadingSpinner, MetricSelector, MetricTarget, NavTabs,
    ValueBoxRow,
};
use ghs_dashboard_ui::figure::{container_id, plotly_figure};
use ghs_dashboard_ui::js_bridge;
use ghs_dashboard_ui::state::AppState;
use ghs_data::Dataset;
use ghs_stats::presentation::{self, ChartSpec};
use ghs_stats::Tab;
use std::sync::Arc;

/// Health statistics, one row per country, year, disease and demographic.
const HEALTH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/Global_Health_Stats.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("health-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset on mount
    use_effect(move || {
        if HEALTH_CSV.is_empty() {
            let message = "The health statistics dataset was not bundled with this build";
            state.error_msg.set(Some(message.to_string()));
            state.loading.set(false);
            return;
        }
        match Dataset::from_csv_str(HEALTH_CSV) {
            Ok(dataset) => {
                web_sys::console::log_1(
                    &format!("[GHS] health-explorer: Loaded {} rows", dataset.len()).into(),
                );
                js_bridge::init_charts();
                state.start(Arc::new(dataset));
            }
            Err(e) => {
                log::error!("Failed to load dataset: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load dataset: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Redraw the active tab's charts whenever a snapshot is published
    use_effect(move || {
        let tab = (state.active_tab)();
        let Some(snapshot) = (state.snapshot)() else {
            return;
        };
        for spec in presentation::charts_for_tab(&snapshot, tab) {
            let figure = plotly_figure(&spec);
            let figure_json = serde_json::to_string(&figure).unwrap_or_default();
            js_bridge::render_chart(&container_id(spec.panel), &figure_json);
        }
    });

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            header {
                style: "padding: 12px 16px; background: #2C3E50; color: white;",
                h2 { style: "margin: 0;", "Global Health Statistics Explorer" }
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex;",
                    FilterSidebar {}
                    main {
                        style: "flex: 1; padding: 16px;",
                        NavTabs {}
                        TabContent {}
                    }
                }
            }
        }
    }
}

/// Heading, selectors and charts of the active tab.
#[component]
fn TabContent() -> Element {
    let state = use_context::<AppState>();
    let tab = (state.active_tab)();
    let Some(snapshot) = (state.snapshot)() else {
        return rsx! {};
    };
    let charts = presentation::charts_for_tab(&snapshot, tab);
    let rows_text = presentation::filtered_rows_text(snapshot.filtered_rows);

    rsx! {
        h3 { "{tab.heading()}" }
        {match tab {
            Tab::Overview => rsx! {
                ValueBoxRow {}
                ChartRow { charts }
                p { style: "color: #666;", "{rows_text}" }
            },
            Tab::DiseaseTrends => rsx! {
                MetricSelector { target: MetricTarget::Trend, label: "Select Metric:".to_string() }
                ChartRow { charts }
            },
            Tab::CountryComparison => rsx! {
                MetricSelector { target: MetricTarget::Country, label: "Compare by:".to_string() }
                ChartRow { charts }
            },
            Tab::AgeGroupAnalysis => rsx! {
                MetricSelector { target: MetricTarget::Age, label: "Select Metric:".to_string() }
                ChartRow { charts }
            },
            Tab::Treatments | Tab::SocioEconomics => rsx! {
                ChartRow { charts }
            },
        }}
    }
}

#[component]
fn ChartRow(charts: Vec<ChartSpec>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px;",
            for spec in charts {
                ChartCard { key: "{spec.panel}", spec: spec.clone() }
            }
        }
    }
}
