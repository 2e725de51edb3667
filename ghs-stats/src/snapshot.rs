//! Every panel of the dashboard, computed against one filter state.
//!
//! A [`DashboardSnapshot`] is built from a single [`FilterState`] and a
//! single [`FilteredView`], so all of its panels are mutually consistent.
//! [`DashboardSnapshot::update`] derives the next snapshot from the
//! previous one, recomputing only the panels whose inputs changed.

use crate::aggregate::{self, AgeSplit};
use crate::filter::FilterState;
use crate::graph::{Changes, Panel};
use crate::metric::Metric;
use crate::models::{DistributionPoint, RankedRow, ScatterPoint, TrendPoint};
use crate::view::FilteredView;
use ghs_data::Dataset;
use serde::Serialize;

/// Value boxes and disease rankings on the overview tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_diseases: usize,
    pub avg_mortality: Option<f64>,
    pub avg_recovery: Option<f64>,
    pub best_recovery_country: Option<String>,
    pub top_prevalence: Vec<RankedRow>,
    pub top_mortality: Vec<RankedRow>,
}

impl Overview {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        Self {
            total_diseases: aggregate::total_diseases(view),
            avg_mortality: aggregate::avg_mortality(view),
            avg_recovery: aggregate::avg_recovery(view),
            best_recovery_country: aggregate::best_recovery_country(view),
            top_prevalence: aggregate::top_diseases_by_prevalence(view),
            top_mortality: aggregate::top_diseases_by_mortality(view),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Treatments {
    pub recovery: Vec<RankedRow>,
    pub mortality: Vec<RankedRow>,
}

impl Treatments {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        Self {
            recovery: aggregate::treatment_recovery(view),
            mortality: aggregate::treatment_mortality(view),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocioEconomics {
    pub healthcare_vs_mortality: Vec<ScatterPoint>,
    pub income_vs_recovery: Vec<ScatterPoint>,
}

impl SocioEconomics {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        Self {
            healthcare_vs_mortality: aggregate::healthcare_vs_mortality(view),
            income_vs_recovery: aggregate::income_vs_recovery(view),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryComparison {
    pub by_metric: Vec<RankedRow>,
    pub most_improved: Vec<RankedRow>,
}

impl CountryComparison {
    pub fn compute(view: &FilteredView<'_>, metric: Metric) -> Self {
        Self {
            by_metric: aggregate::country_by_metric(view, metric),
            most_improved: aggregate::most_improved_countries(view),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeAnalysis {
    pub by_age: Vec<DistributionPoint>,
    pub by_age_and_gender: Vec<DistributionPoint>,
}

impl AgeAnalysis {
    pub fn compute(view: &FilteredView<'_>, metric: Metric) -> Self {
        Self {
            by_age: aggregate::age_group_distribution(view, metric, AgeSplit::AgeGroup),
            by_age_and_gender: aggregate::age_group_distribution(
                view,
                metric,
                AgeSplit::AgeGroupAndGender,
            ),
        }
    }
}

/// All panel results for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Sequence number of the filter state this snapshot was computed for.
    pub generation: u64,
    pub filter: FilterState,
    pub filtered_rows: usize,
    pub overview: Overview,
    pub trend: Vec<TrendPoint>,
    pub treatments: Treatments,
    pub socio_economics: SocioEconomics,
    pub countries: CountryComparison,
    pub age: AgeAnalysis,
}

impl DashboardSnapshot {
    /// Compute every panel from scratch.
    pub fn compute(dataset: &Dataset, filter: &FilterState, generation: u64) -> Self {
        let view = FilteredView::compute(dataset, filter);
        Self::from_view(&view, filter, generation)
    }

    fn from_view(view: &FilteredView<'_>, filter: &FilterState, generation: u64) -> Self {
        let ((overview, (trend, treatments)), (socio_economics, (countries, age))) = join(
            || {
                join(
                    || Overview::compute(view),
                    || {
                        join(
                            || aggregate::trend_over_time(view, filter.trend_metric),
                            || Treatments::compute(view),
                        )
                    },
                )
            },
            || {
                join(
                    || SocioEconomics::compute(view),
                    || {
                        join(
                            || CountryComparison::compute(view, filter.country_metric),
                            || AgeAnalysis::compute(view, filter.age_metric),
                        )
                    },
                )
            },
        );

        Self {
            generation,
            filter: filter.clone(),
            filtered_rows: view.len(),
            overview,
            trend,
            treatments,
            socio_economics,
            countries,
            age,
        }
    }

    /// Derive the snapshot for `filter`, reusing every panel whose inputs
    /// did not change since this snapshot.
    pub fn update(&self, dataset: &Dataset, filter: &FilterState, generation: u64) -> Self {
        let changes = Changes::between(&self.filter, filter);
        if changes.view {
            log::debug!("[GHS] snapshot: rows changed, recomputing all panels");
            return Self::compute(dataset, filter, generation);
        }

        let mut next = self.clone();
        next.generation = generation;
        next.filter = filter.clone();
        if changes.is_empty() {
            return next;
        }

        let view = FilteredView::compute(dataset, filter);
        if changes.affects(Panel::Trend) {
            next.trend = aggregate::trend_over_time(&view, filter.trend_metric);
        }
        if changes.affects(Panel::CountryComparison) {
            next.countries.by_metric = aggregate::country_by_metric(&view, filter.country_metric);
        }
        if changes.affects(Panel::AgeDistribution) {
            next.age = AgeAnalysis::compute(&view, filter.age_metric);
        }
        log::debug!("[GHS] snapshot: refreshed {:?}", changes.affected_panels());
        next
    }

    pub fn is_empty(&self) -> bool {
        self.filtered_rows == 0
    }
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    (a(), b())
}
