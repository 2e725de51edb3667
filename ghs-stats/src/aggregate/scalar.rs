//! Single-value aggregates shown in the overview value boxes.

use super::{group_means, mean_of, rank, ranked_rows, round2, Order};
use crate::view::FilteredView;
use std::collections::HashSet;

/// Number of distinct diseases in the view.
pub fn total_diseases(view: &FilteredView<'_>) -> usize {
    view.iter()
        .map(|r| r.disease_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Mean mortality rate rounded to two decimals, `None` for an empty view.
pub fn avg_mortality(view: &FilteredView<'_>) -> Option<f64> {
    mean_of(view, |r| r.mortality_rate).map(round2)
}

/// Mean recovery rate rounded to two decimals, `None` for an empty view.
pub fn avg_recovery(view: &FilteredView<'_>) -> Option<f64> {
    mean_of(view, |r| r.recovery_rate).map(round2)
}

/// Country with the highest mean recovery rate.
///
/// Ties go to the alphabetically first country.
pub fn best_recovery_country(view: &FilteredView<'_>) -> Option<String> {
    let by_country = group_means(view, |r| r.country.as_str(), |r| r.recovery_rate);
    rank(ranked_rows(by_country), Order::Descending, Some(1))
        .into_iter()
        .next()
        .map(|row| row.label)
}
