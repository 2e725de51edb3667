//! Grouped rankings for the bar chart panels.

use super::{group_means, rank, ranked_rows, Order};
use crate::metric::Metric;
use crate::models::RankedRow;
use crate::view::FilteredView;
use std::collections::BTreeMap;

/// Rows kept by the disease rankings on the overview tab.
pub const TOP_DISEASES: usize = 10;
/// Rows kept by the country rankings on the country comparison tab.
pub const TOP_COUNTRIES: usize = 15;

/// Diseases by total population affected, largest first.
pub fn top_diseases_by_prevalence(view: &FilteredView<'_>) -> Vec<RankedRow> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for r in view.iter() {
        *totals.entry(r.disease_name.as_str()).or_default() += r.population_affected;
    }
    let groups = totals
        .into_iter()
        .map(|(disease, total)| (disease, total as f64))
        .collect();
    rank(ranked_rows(groups), Order::Descending, Some(TOP_DISEASES))
}

/// Diseases by mean mortality rate, deadliest first.
pub fn top_diseases_by_mortality(view: &FilteredView<'_>) -> Vec<RankedRow> {
    let groups = group_means(view, |r| r.disease_name.as_str(), |r| r.mortality_rate);
    rank(ranked_rows(groups), Order::Descending, Some(TOP_DISEASES))
}

/// Treatment types by mean recovery rate, best first.
pub fn treatment_recovery(view: &FilteredView<'_>) -> Vec<RankedRow> {
    let groups = group_means(view, |r| r.treatment_type.as_str(), |r| r.recovery_rate);
    rank(ranked_rows(groups), Order::Descending, None)
}

/// Treatment types by mean mortality rate, lowest first.
pub fn treatment_mortality(view: &FilteredView<'_>) -> Vec<RankedRow> {
    let groups = group_means(view, |r| r.treatment_type.as_str(), |r| r.mortality_rate);
    rank(ranked_rows(groups), Order::Ascending, None)
}

/// Countries by the mean of `metric`, highest first.
pub fn country_by_metric(view: &FilteredView<'_>, metric: Metric) -> Vec<RankedRow> {
    let groups = group_means(view, |r| r.country.as_str(), |r| metric.value(r));
    rank(ranked_rows(groups), Order::Descending, Some(TOP_COUNTRIES))
}

/// Countries by mean five-year improvement, most improved first.
pub fn most_improved_countries(view: &FilteredView<'_>) -> Vec<RankedRow> {
    let groups = group_means(view, |r| r.country.as_str(), |r| r.improvement_in_5_years);
    rank(ranked_rows(groups), Order::Descending, Some(TOP_COUNTRIES))
}
