//! Filter state, filtered views and dashboard aggregations.
//!
//! This crate is the reactive core of the health statistics dashboard:
//! - `filter`: the user's current selections as an immutable [`FilterState`]
//! - `view`: the [`FilteredView`] every panel reads from
//! - `aggregate`: one pure function per displayed widget
//! - `graph`: which panels depend on which parts of the filter state
//! - `snapshot`: every panel computed against one filter state
//! - `coordinator`: last-write-wins publication of snapshots
//! - `presentation`: titles, colors and empty-state variants handed to charts
//!
//! # Usage
//!
//! ```rust
//! use ghs_data::Dataset;
//! use ghs_stats::{DashboardSnapshot, FilterEvent, FilterState, Selection};
//!
//! let dataset = Dataset::from_csv_str("\
//! country,disease_name,year,gender,mortality_rate,recovery_rate,incidence_rate,population_affected,treatment_type,healthcare_access,per_capita_income_usd,age_group,improvement_in_5_years
//! Italy,Cholera,2013,Male,7.2,82.1,12.4,471007,Medication,57.3,8908,0-18,2.3
//! ").unwrap();
//!
//! let filter = FilterState::for_dataset(&dataset)
//!     .apply(FilterEvent::Country(Selection::Only("Italy".to_string())));
//! let snapshot = DashboardSnapshot::compute(&dataset, &filter, 1);
//! assert_eq!(snapshot.overview.total_diseases, 1);
//! ```

pub mod aggregate;
pub mod coordinator;
pub mod error;
pub mod filter;
pub mod graph;
pub mod metric;
pub mod models;
pub mod presentation;
pub mod snapshot;
pub mod view;

pub use coordinator::{Coordinator, Ticket};
pub use error::ParseError;
pub use filter::{FilterEvent, FilterState, Selection, YearRange};
pub use graph::{Changes, Input, Panel, Tab};
pub use metric::Metric;
pub use snapshot::DashboardSnapshot;
pub use view::FilteredView;

#[cfg(test)]
mod testutil;
