//! Navigation bar switching between dashboard tabs.

use crate::state::AppState;
use dioxus::prelude::*;
use ghs_stats::Tab;

#[component]
pub fn NavTabs() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        nav {
            style: "display: flex; gap: 4px; border-bottom: 2px solid #E0E0E0; margin-bottom: 16px;",
            for tab in Tab::ALL {
                button {
                    key: "{tab.label()}",
                    style: tab_style(tab == active),
                    onclick: move |_| state.active_tab.set(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}

fn tab_style(selected: bool) -> &'static str {
    if selected {
        "padding: 8px 14px; border: none; background: #4A90E2; color: white; border-radius: 4px 4px 0 0; cursor: pointer;"
    } else {
        "padding: 8px 14px; border: none; background: transparent; color: #333; cursor: pointer;"
    }
}
