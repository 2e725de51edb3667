//! Overview value boxes.

use crate::state::AppState;
use dioxus::prelude::*;
use ghs_stats::presentation::{self, ValueBox};

#[derive(Props, Clone, PartialEq)]
pub struct ValueBoxCardProps {
    pub value_box: ValueBox,
}

/// One scalar with its title.
#[component]
pub fn ValueBoxCard(props: ValueBoxCardProps) -> Element {
    let ValueBox {
        title, icon, text, ..
    } = props.value_box;

    rsx! {
        div {
            class: "ghs-value-box ghs-icon-{icon}",
            style: "flex: 1; padding: 12px 16px; background: #F5F8FC; border-left: 4px solid #4A90E2; border-radius: 4px;",
            div {
                style: "font-size: 12px; color: #666;",
                "{title}"
            }
            div {
                style: "font-size: 24px; font-weight: bold;",
                "{text}"
            }
        }
    }
}

/// The four overview value boxes from the latest snapshot.
#[component]
pub fn ValueBoxRow() -> Element {
    let state = use_context::<AppState>();
    let boxes = match &*state.snapshot.read() {
        Some(snapshot) => presentation::value_boxes(snapshot),
        None => Vec::new(),
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin-bottom: 16px;",
            for value_box in boxes {
                ValueBoxCard { key: "{value_box.title}", value_box: value_box.clone() }
            }
        }
    }
}
