//! Dependency graph between filter inputs and dashboard panels.
//!
//! Every panel reads the filtered view; some also read one metric
//! selector. When the filter state changes, [`Changes::between`] works out
//! which inputs moved and [`Changes::affects`] tells whether a panel has to
//! be recomputed or can be carried over from the previous snapshot.

use crate::error::ParseError;
use crate::filter::FilterState;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A part of the filter state a panel can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Input {
    /// Country, disease, gender and year range: the rows of the view.
    View,
    TrendMetric,
    CountryMetric,
    AgeMetric,
}

/// Dashboard tab, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tab {
    Overview,
    DiseaseTrends,
    Treatments,
    SocioEconomics,
    CountryComparison,
    AgeGroupAnalysis,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::DiseaseTrends,
        Tab::Treatments,
        Tab::SocioEconomics,
        Tab::CountryComparison,
        Tab::AgeGroupAnalysis,
    ];

    /// Tab label in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::DiseaseTrends => "Disease Trends",
            Tab::Treatments => "Treatments",
            Tab::SocioEconomics => "Socio-Economics",
            Tab::CountryComparison => "Country Comparison",
            Tab::AgeGroupAnalysis => "Age Group Analysis",
        }
    }

    /// Page heading shown at the top of the tab.
    pub fn heading(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::DiseaseTrends => "Trends Over Time",
            Tab::Treatments => "Treatment Effectiveness",
            Tab::SocioEconomics => "Healthcare & Income",
            Tab::CountryComparison => "Country Comparison",
            Tab::AgeGroupAnalysis => "Age Group Analysis",
        }
    }

    pub fn panels(&self) -> Vec<Panel> {
        Panel::ALL.into_iter().filter(|p| p.tab() == *self).collect()
    }
}

/// Every widget on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Panel {
    TotalDiseases,
    AvgMortality,
    AvgRecovery,
    BestRecoveryCountry,
    Prevalence,
    Deadliest,
    FilteredRows,
    Trend,
    TreatmentRecovery,
    TreatmentMortality,
    HealthcareVsMortality,
    IncomeVsRecovery,
    CountryComparison,
    MostImproved,
    AgeDistribution,
    AgeGenderDistribution,
}

impl Panel {
    pub const ALL: [Panel; 16] = [
        Panel::TotalDiseases,
        Panel::AvgMortality,
        Panel::AvgRecovery,
        Panel::BestRecoveryCountry,
        Panel::Prevalence,
        Panel::Deadliest,
        Panel::FilteredRows,
        Panel::Trend,
        Panel::TreatmentRecovery,
        Panel::TreatmentMortality,
        Panel::HealthcareVsMortality,
        Panel::IncomeVsRecovery,
        Panel::CountryComparison,
        Panel::MostImproved,
        Panel::AgeDistribution,
        Panel::AgeGenderDistribution,
    ];

    /// Inputs this panel is computed from.
    pub fn inputs(&self) -> &'static [Input] {
        match self {
            Panel::Trend => &[Input::View, Input::TrendMetric],
            Panel::CountryComparison => &[Input::View, Input::CountryMetric],
            Panel::AgeDistribution | Panel::AgeGenderDistribution => {
                &[Input::View, Input::AgeMetric]
            }
            _ => &[Input::View],
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Panel::TotalDiseases
            | Panel::AvgMortality
            | Panel::AvgRecovery
            | Panel::BestRecoveryCountry
            | Panel::Prevalence
            | Panel::Deadliest
            | Panel::FilteredRows => Tab::Overview,
            Panel::Trend => Tab::DiseaseTrends,
            Panel::TreatmentRecovery | Panel::TreatmentMortality => Tab::Treatments,
            Panel::HealthcareVsMortality | Panel::IncomeVsRecovery => Tab::SocioEconomics,
            Panel::CountryComparison | Panel::MostImproved => Tab::CountryComparison,
            Panel::AgeDistribution | Panel::AgeGenderDistribution => Tab::AgeGroupAnalysis,
        }
    }

    /// Short kebab-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::TotalDiseases => "total-diseases",
            Panel::AvgMortality => "avg-mortality",
            Panel::AvgRecovery => "avg-recovery",
            Panel::BestRecoveryCountry => "best-recovery-country",
            Panel::Prevalence => "prevalence",
            Panel::Deadliest => "deadliest",
            Panel::FilteredRows => "filtered-rows",
            Panel::Trend => "trend",
            Panel::TreatmentRecovery => "treatment-recovery",
            Panel::TreatmentMortality => "treatment-mortality",
            Panel::HealthcareVsMortality => "healthcare-vs-mortality",
            Panel::IncomeVsRecovery => "income-vs-recovery",
            Panel::CountryComparison => "country-comparison",
            Panel::MostImproved => "most-improved",
            Panel::AgeDistribution => "age-distribution",
            Panel::AgeGenderDistribution => "age-gender-distribution",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Panel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Panel::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::Panel(s.to_string()))
    }
}

/// Which inputs differ between two filter states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub view: bool,
    pub trend_metric: bool,
    pub country_metric: bool,
    pub age_metric: bool,
}

impl Changes {
    pub fn between(old: &FilterState, new: &FilterState) -> Self {
        Self {
            view: !old.same_rows_as(new),
            trend_metric: old.trend_metric != new.trend_metric,
            country_metric: old.country_metric != new.country_metric,
            age_metric: old.age_metric != new.age_metric,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn contains(&self, input: Input) -> bool {
        match input {
            Input::View => self.view,
            Input::TrendMetric => self.trend_metric,
            Input::CountryMetric => self.country_metric,
            Input::AgeMetric => self.age_metric,
        }
    }

    /// True when `panel` reads any changed input.
    pub fn affects(&self, panel: Panel) -> bool {
        panel.inputs().iter().any(|input| self.contains(*input))
    }

    /// Panels that must be recomputed, in display order.
    pub fn affected_panels(&self) -> Vec<Panel> {
        Panel::ALL.into_iter().filter(|p| self.affects(*p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterEvent, Selection, YearRange};
    use crate::metric::Metric;

    fn base() -> FilterState {
        FilterState::with_years(YearRange::new(2000, 2020))
    }

    #[test]
    fn every_panel_reads_the_view() {
        assert!(Panel::ALL.iter().all(|p| p.inputs().contains(&Input::View)));
    }

    #[test]
    fn tabs_partition_the_panels() {
        let total: usize = Tab::ALL.iter().map(|t| t.panels().len()).sum();
        assert_eq!(total, Panel::ALL.len());
        assert_eq!(Tab::Overview.panels().len(), 7);
    }

    #[test]
    fn age_metric_change_only_affects_age_panels() {
        let old = base();
        let new = old.apply(FilterEvent::AgeMetric(Metric::RecoveryRate));
        let changes = Changes::between(&old, &new);
        assert!(!changes.view);
        assert_eq!(
            changes.affected_panels(),
            vec![Panel::AgeDistribution, Panel::AgeGenderDistribution]
        );
    }

    #[test]
    fn trend_and_country_metrics_are_independent() {
        let old = base();
        let new = old.apply(FilterEvent::TrendMetric(Metric::IncidenceRate));
        let trend = Changes::between(&old, &new);
        assert_eq!(trend.affected_panels(), vec![Panel::Trend]);

        let country =
            Changes::between(&old, &old.apply(FilterEvent::CountryMetric(Metric::RecoveryRate)));
        assert_eq!(country.affected_panels(), vec![Panel::CountryComparison]);
    }

    #[test]
    fn view_change_affects_everything() {
        let old = base();
        let new = old.apply(FilterEvent::Country(Selection::from_label("Kenya")));
        let changes = Changes::between(&old, &new);
        assert_eq!(changes.affected_panels().len(), Panel::ALL.len());
    }

    #[test]
    fn identical_states_change_nothing() {
        let changes = Changes::between(&base(), &base());
        assert!(changes.is_empty());
        assert!(changes.affected_panels().is_empty());
    }

    #[test]
    fn panel_names_parse() {
        for panel in Panel::ALL {
            assert_eq!(panel.name().parse::<Panel>(), Ok(panel));
        }
        assert!("nonsense".parse::<Panel>().is_err());
    }
}
