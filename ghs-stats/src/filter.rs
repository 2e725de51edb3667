//! The user's current selections.
//!
//! A [`FilterState`] is an immutable value: every user interaction is a
//! [`FilterEvent`] that produces a new state via [`FilterState::apply`].
//! Downstream computations receive the state by reference and never see it
//! change underneath them.

use crate::error::ParseError;
use crate::metric::Metric;
use ghs_data::{Dataset, Gender, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the "no constraint" choice in every selector.
pub const ALL_LABEL: &str = "All";

/// A single-valued filter on one dimension, or no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    /// True when `value` passes this filter. `All` admits everything.
    pub fn admits<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        T: PartialEq<Q>,
    {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl Selection<String> {
    /// Map a selector label to a selection; "All" becomes [`Selection::All`].
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case(ALL_LABEL) {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }
}

impl Selection<Gender> {
    pub fn parse_gender(label: &str) -> Result<Self, ParseError> {
        if label.trim().eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(Selection::All);
        }
        Gender::parse(label)
            .map(Selection::Only)
            .ok_or_else(|| ParseError::Gender(label.trim().to_string()))
    }

    /// Choices offered by the gender selector, "All" first.
    pub fn choices() -> Vec<Selection<Gender>> {
        std::iter::once(Selection::All)
            .chain(Gender::ALL.into_iter().map(Selection::Only))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL_LABEL),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

/// Inclusive year range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Build a range from two endpoints in either order.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn single(year: i32) -> Self {
        Self::new(year, year)
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Snapshot of every selector on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub country: Selection<String>,
    pub disease: Selection<String>,
    pub gender: Selection<Gender>,
    pub years: YearRange,
    /// Metric plotted on the disease trends tab
    pub trend_metric: Metric,
    /// Metric ranked on the country comparison tab
    pub country_metric: Metric,
    /// Metric distributed on the age group tab
    pub age_metric: Metric,
}

impl FilterState {
    /// Initial state: no constraints and the dataset's full year range.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let (min, max) = dataset.year_bounds();
        Self::with_years(YearRange::new(min, max))
    }

    pub fn with_years(years: YearRange) -> Self {
        Self {
            country: Selection::All,
            disease: Selection::All,
            gender: Selection::All,
            years,
            trend_metric: Metric::default(),
            country_metric: Metric::default(),
            age_metric: Metric::default(),
        }
    }

    /// True when `record` passes all four row filters.
    pub fn matches(&self, record: &Record) -> bool {
        self.country.admits(record.country.as_str())
            && self.disease.admits(record.disease_name.as_str())
            && self.gender.admits(&record.gender)
            && self.years.contains(record.year)
    }

    /// True when `other` selects exactly the same rows as `self`,
    /// regardless of metric selectors.
    pub fn same_rows_as(&self, other: &FilterState) -> bool {
        self.country == other.country
            && self.disease == other.disease
            && self.gender == other.gender
            && self.years == other.years
    }

    /// Produce the state that results from one user interaction.
    pub fn apply(&self, event: FilterEvent) -> FilterState {
        let mut next = self.clone();
        match event {
            FilterEvent::Country(country) => next.country = country,
            FilterEvent::Disease(disease) => next.disease = disease,
            FilterEvent::Gender(gender) => next.gender = gender,
            FilterEvent::Years(years) => next.years = years,
            FilterEvent::TrendMetric(metric) => next.trend_metric = metric,
            FilterEvent::CountryMetric(metric) => next.country_metric = metric,
            FilterEvent::AgeMetric(metric) => next.age_metric = metric,
        }
        next
    }
}

/// One user interaction with a dashboard control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterEvent {
    Country(Selection<String>),
    Disease(Selection<String>),
    Gender(Selection<Gender>),
    Years(YearRange),
    TrendMetric(Metric),
    CountryMetric(Metric),
    AgeMetric(Metric),
}
