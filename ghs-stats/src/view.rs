//! The filtered subset of the dataset shared by every panel.

use crate::filter::FilterState;
use ghs_data::{Dataset, Record};

/// Rows of a [`Dataset`] that pass a [`FilterState`], in dataset order.
///
/// The view borrows from the dataset and is rebuilt from scratch for each
/// filter state; it is never updated in place. An empty view is a normal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    /// Apply the country, disease, gender and year predicates to `dataset`.
    pub fn compute(dataset: &'a Dataset, filter: &FilterState) -> Self {
        let rows: Vec<&'a Record> = dataset
            .records()
            .iter()
            .filter(|r| filter.matches(r))
            .collect();
        log::debug!(
            "[GHS] view: {} of {} rows match country={} disease={} gender={} years={}",
            rows.len(),
            dataset.len(),
            filter.country,
            filter.disease,
            filter.gender,
            filter.years
        );
        Self { rows }
    }

    /// A view over an explicit set of rows.
    pub fn from_rows(rows: Vec<&'a Record>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.rows.iter().copied()
    }
}
