//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ghs_data::Dataset;
use ghs_stats::{Coordinator, DashboardSnapshot, FilterEvent, FilterState, Tab};
use std::sync::Arc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session coordinator (None until the dataset is loaded)
    pub coordinator: Signal<Option<Arc<Coordinator>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current filter selections, mirrored from the coordinator
    pub filter: Signal<Option<FilterState>>,
    /// Latest published snapshot
    pub snapshot: Signal<Option<Arc<DashboardSnapshot>>>,
    /// Tab shown in the main panel
    pub active_tab: Signal<Tab>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            coordinator: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            filter: Signal::new(None),
            snapshot: Signal::new(None),
            active_tab: Signal::new(Tab::Overview),
        }
    }

    /// Start a session on `dataset` and publish its first snapshot.
    pub fn start(&mut self, dataset: Arc<Dataset>) {
        let coordinator = Arc::new(Coordinator::new(dataset));
        let ticket = coordinator.current_ticket();
        self.filter.set(Some(ticket.filter.clone()));
        if let Some(snapshot) = coordinator.compute(&ticket) {
            self.snapshot.set(Some(snapshot));
        }
        self.coordinator.set(Some(coordinator));
        self.loading.set(false);
    }

    /// Apply one filter interaction and publish the resulting snapshot.
    pub fn dispatch(&mut self, event: FilterEvent) {
        let Some(coordinator) = self.coordinator.peek().clone() else {
            return;
        };
        let ticket = coordinator.dispatch(event);
        self.filter.set(Some(ticket.filter.clone()));
        if let Some(snapshot) = coordinator.compute(&ticket) {
            self.snapshot.set(Some(snapshot));
        }
    }

    /// The loaded dataset, if any.
    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        self.coordinator
            .read()
            .as_ref()
            .map(|c| Arc::clone(c.dataset()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
