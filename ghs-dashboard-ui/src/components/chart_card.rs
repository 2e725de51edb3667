//! Card holding one Plotly chart.

use crate::figure::container_id;
use dioxus::prelude::*;
use ghs_stats::presentation::ChartSpec;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    pub spec: ChartSpec,
    /// Minimum chart height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// Card header plus the container Plotly draws into.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let id = container_id(props.spec.panel);
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            style: "flex: 1; min-width: 320px; border: 1px solid #E0E0E0; border-radius: 4px; padding: 8px;",
            h4 {
                style: "margin: 0 0 8px 0; font-size: 14px;",
                "{props.spec.header}"
            }
            div {
                id: "{id}",
                style: "{style}",
            }
        }
    }
}
