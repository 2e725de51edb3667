//! One pure function per dashboard widget.
//!
//! Every function takes a [`FilteredView`](crate::FilteredView) (plus a
//! metric where the widget has a selector) and never fails: an empty view
//! yields `0`, `None` or an empty `Vec`.
//!
//! # Ordering
//!
//! Groups are accumulated in a `BTreeMap`, so they start out in ascending
//! key order. Rankings then apply a stable sort on the metric, which means
//! groups with equal metrics stay in alphabetical order. This makes every
//! top-N cut deterministic.

pub mod distribution;
pub mod ranking;
pub mod scalar;
pub mod scatter;
pub mod series;

pub use distribution::{age_group_distribution, box_summary, AgeSplit};
pub use ranking::{
    country_by_metric, most_improved_countries, top_diseases_by_mortality,
    top_diseases_by_prevalence, treatment_mortality, treatment_recovery, TOP_COUNTRIES,
    TOP_DISEASES,
};
pub use scalar::{avg_mortality, avg_recovery, best_recovery_country, total_diseases};
pub use scatter::{healthcare_vs_mortality, income_vs_recovery};
pub use series::trend_over_time;

use crate::models::RankedRow;
use crate::view::FilteredView;
use ghs_data::Record;
use std::collections::BTreeMap;

/// Sort direction of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Running arithmetic mean.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub(crate) fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub(crate) fn value(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Mean of `value` over every row of the view.
pub(crate) fn mean_of(view: &FilteredView<'_>, value: impl Fn(&Record) -> f64) -> Option<f64> {
    let mut mean = Mean::default();
    for r in view.iter() {
        mean.push(value(r));
    }
    mean.value()
}

/// Mean of `value` per group, in ascending key order.
pub(crate) fn group_means<'a, K: Ord>(
    view: &FilteredView<'a>,
    key: impl Fn(&'a Record) -> K,
    value: impl Fn(&Record) -> f64,
) -> BTreeMap<K, f64> {
    let mut groups: BTreeMap<K, Mean> = BTreeMap::new();
    for r in view.iter() {
        groups.entry(key(r)).or_default().push(value(r));
    }
    groups
        .into_iter()
        .filter_map(|(k, m)| m.value().map(|v| (k, v)))
        .collect()
}

/// Sort rows by value, keeping the incoming order for ties, and keep at
/// most `limit` of them.
pub(crate) fn rank(mut rows: Vec<RankedRow>, order: Order, limit: Option<usize>) -> Vec<RankedRow> {
    match order {
        Order::Ascending => rows.sort_by(|a, b| a.value.total_cmp(&b.value)),
        Order::Descending => rows.sort_by(|a, b| b.value.total_cmp(&a.value)),
    }
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

pub(crate) fn ranked_rows<K: Into<String>>(groups: BTreeMap<K, f64>) -> Vec<RankedRow> {
    groups
        .into_iter()
        .map(|(label, value)| RankedRow {
            label: label.into(),
            value,
        })
        .collect()
}

/// Round to two decimal places, as shown in the value boxes.
///
/// Halves go to the even neighbour, so 4.125 becomes 4.12.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, value: f64) -> RankedRow {
        RankedRow {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_mean() {
        let mut mean = Mean::default();
        assert_eq!(mean.value(), None);
        mean.push(1.0);
        mean.push(4.0);
        assert_eq!(mean.value(), Some(2.5));
    }

    #[test]
    fn test_rank_descending_keeps_tie_order() {
        let rows = vec![row("a", 1.0), row("b", 3.0), row("c", 3.0), row("d", 2.0)];
        let ranked = rank(rows, Order::Descending, Some(3));
        let labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_rank_ascending() {
        let rows = vec![row("a", 2.0), row("b", 1.0)];
        let ranked = rank(rows, Order::Ascending, None);
        assert_eq!(ranked[0].label, "b");
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(5.6789), 5.68);
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(-1.234), -1.23);
    }

    #[test]
    fn test_round2_halves_to_even() {
        assert_eq!(round2(4.125), 4.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
    }
}
