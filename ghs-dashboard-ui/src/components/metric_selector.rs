//! Dropdown choosing the metric a chart plots.

use crate::state::AppState;
use dioxus::prelude::*;
use ghs_stats::{FilterEvent, FilterState, Metric};

/// Which chart a metric selector drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricTarget {
    Trend,
    Country,
    Age,
}

impl MetricTarget {
    fn current(&self, filter: &FilterState) -> Metric {
        match self {
            MetricTarget::Trend => filter.trend_metric,
            MetricTarget::Country => filter.country_metric,
            MetricTarget::Age => filter.age_metric,
        }
    }

    fn event(&self, metric: Metric) -> FilterEvent {
        match self {
            MetricTarget::Trend => FilterEvent::TrendMetric(metric),
            MetricTarget::Country => FilterEvent::CountryMetric(metric),
            MetricTarget::Age => FilterEvent::AgeMetric(metric),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MetricSelectorProps {
    pub target: MetricTarget,
    pub label: String,
}

#[component]
pub fn MetricSelector(props: MetricSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let target = props.target;
    let selected = state
        .filter
        .read()
        .as_ref()
        .map(|f| target.current(f))
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Metric>() {
        Ok(metric) => state.dispatch(target.event(metric)),
        Err(e) => log::warn!("[GHS] metric selector: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}"
            }
            select {
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: "{metric.label()}",
                        selected: metric == selected,
                        "{metric.label()}"
                    }
                }
            }
        }
    }
}
