//! Reusable Dioxus RSX components for the health dashboard.

mod chart_card;
mod error_display;
mod filter_sidebar;
mod loading_spinner;
mod metric_selector;
mod nav_tabs;
mod value_box_card;

pub use chart_card::ChartCard;
pub use error_display::ErrorDisplay;
pub use filter_sidebar::FilterSidebar;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::{MetricSelector, MetricTarget};
pub use nav_tabs::NavTabs;
pub use value_box_card::{ValueBoxCard, ValueBoxRow};
