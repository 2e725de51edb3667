//! What each panel hands to the presentation layer.
//!
//! The charting library and widget toolkit live outside this crate; this
//! module fixes the contract with them: a [`ValueBox`] per overview scalar
//! and a [`ChartSpec`] per chart, each carrying its title, axis columns,
//! color and data. An empty filtered view turns every chart into
//! [`ChartData::NoData`] with a placeholder title.

use crate::graph::{Panel, Tab};
use crate::metric::Metric;
use crate::models::{DistributionPoint, RankedRow, ScatterPoint, TrendPoint};
use crate::snapshot::DashboardSnapshot;
use serde::Serialize;

/// Text shown for a scalar with no rows behind it.
pub const NO_DATA: &str = "No data";
/// Placeholder title for empty bar and line charts.
pub const NO_DATA_AVAILABLE: &str = "No data available";

/// One value box on the overview tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueBox {
    pub panel: Panel,
    pub title: &'static str,
    /// Icon name for the showcase glyph.
    pub icon: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
    Scatter,
    Box,
}

/// Data behind one chart, or the explicit empty variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "rows", rename_all = "snake_case")]
pub enum ChartData {
    NoData,
    Ranked(Vec<RankedRow>),
    Series(Vec<TrendPoint>),
    Points(Vec<ScatterPoint>),
    Distribution(Vec<DistributionPoint>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::NoData => 0,
            ChartData::Ranked(rows) => rows.len(),
            ChartData::Series(rows) => rows.len(),
            ChartData::Points(rows) => rows.len(),
            ChartData::Distribution(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the charting layer needs to draw one panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub panel: Panel,
    pub kind: ChartKind,
    pub title: String,
    /// Card header above the chart.
    pub header: &'static str,
    pub x_label: String,
    pub y_label: String,
    /// Single marker color; `None` colors by series.
    pub color: Option<&'static str>,
    pub show_legend: bool,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        matches!(self.data, ChartData::NoData)
    }
}

/// Format an optional mean for a value box.
///
/// Whole numbers keep one decimal place ("4.0").
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) if value.fract() == 0.0 => format!("{:.1}", value),
        Some(value) => value.to_string(),
        None => NO_DATA.to_string(),
    }
}

/// Row counter shown below the overview charts.
pub fn filtered_rows_text(rows: usize) -> String {
    format!("Filtered rows: {}", rows)
}

/// The four overview value boxes, in display order.
pub fn value_boxes(snapshot: &DashboardSnapshot) -> Vec<ValueBox> {
    let overview = &snapshot.overview;
    vec![
        ValueBox {
            panel: Panel::TotalDiseases,
            title: "Total Diseases",
            icon: "virus",
            text: overview.total_diseases.to_string(),
        },
        ValueBox {
            panel: Panel::AvgMortality,
            title: "Average Mortality Rate",
            icon: "skull",
            text: format_mean(overview.avg_mortality),
        },
        ValueBox {
            panel: Panel::AvgRecovery,
            title: "Average Recovery Rate",
            icon: "heart-pulse",
            text: format_mean(overview.avg_recovery),
        },
        ValueBox {
            panel: Panel::BestRecoveryCountry,
            title: "Top Recovery Country",
            icon: "flag",
            text: overview
                .best_recovery_country
                .clone()
                .unwrap_or_else(|| NO_DATA.to_string()),
        },
    ]
}

/// Text output of a scalar panel; `None` for chart panels.
pub fn scalar_text(snapshot: &DashboardSnapshot, panel: Panel) -> Option<String> {
    if panel == Panel::FilteredRows {
        return Some(filtered_rows_text(snapshot.filtered_rows));
    }
    value_boxes(snapshot)
        .into_iter()
        .find(|b| b.panel == panel)
        .map(|b| b.text)
}

/// Country comparison bars are amber for mortality, green otherwise.
pub fn country_metric_color(metric: Metric) -> &'static str {
    match metric {
        Metric::MortalityRate => "#D59F0A",
        Metric::RecoveryRate | Metric::IncidenceRate => "#2E8B57",
    }
}

/// Build the chart for `panel`; `None` for value-box and text panels.
pub fn chart(snapshot: &DashboardSnapshot, panel: Panel) -> Option<ChartSpec> {
    let filter = &snapshot.filter;
    let spec = match panel {
        Panel::TotalDiseases
        | Panel::AvgMortality
        | Panel::AvgRecovery
        | Panel::BestRecoveryCountry
        | Panel::FilteredRows => return None,
        Panel::Prevalence => ChartBuilder::new(panel, ChartKind::Bar, "Most Prevalent Diseases")
            .title("Global Prevalence: Top 10 Diseases", NO_DATA_AVAILABLE)
            .axes("disease_name", "population_affected")
            .color("#4A90E2")
            .ranked(&snapshot.overview.top_prevalence),
        Panel::Deadliest => ChartBuilder::new(panel, ChartKind::Bar, "Most Deadly Diseases")
            .title("Global Mortality: Top 10 Deadliest Diseases", NO_DATA_AVAILABLE)
            .axes("disease_name", "mortality_rate")
            .color("#B0B0B0")
            .ranked(&snapshot.overview.top_mortality),
        Panel::Trend => ChartBuilder::new(panel, ChartKind::Line, "Trends Over Time")
            .title(
                &format!("{} Over Time", filter.trend_metric.label()),
                NO_DATA_AVAILABLE,
            )
            .axes("year", filter.trend_metric.column())
            .legend()
            .data(&snapshot.trend, ChartData::Series),
        Panel::TreatmentRecovery => {
            ChartBuilder::new(panel, ChartKind::HorizontalBar, "Recovery by Treatment Type")
                .title("Average Recovery Rate by Treatment", NO_DATA_AVAILABLE)
                .axes("recovery_rate", "treatment_type")
                .color("#5CE0BB")
                .ranked(&snapshot.treatments.recovery)
        }
        Panel::TreatmentMortality => {
            ChartBuilder::new(panel, ChartKind::HorizontalBar, "Mortality by Treatment Type")
                .title("Average Mortality Rate by Treatment", NO_DATA_AVAILABLE)
                .axes("mortality_rate", "treatment_type")
                .color("#F0ACBA")
                .ranked(&snapshot.treatments.mortality)
        }
        Panel::HealthcareVsMortality => {
            ChartBuilder::new(panel, ChartKind::Scatter, "Healthcare Access vs Mortality")
                .title("Healthcare Access vs Mortality", NO_DATA)
                .axes("healthcare_access", "mortality_rate")
                .color("#4682B4")
                .data(
                    &snapshot.socio_economics.healthcare_vs_mortality,
                    ChartData::Points,
                )
        }
        Panel::IncomeVsRecovery => {
            ChartBuilder::new(panel, ChartKind::Scatter, "Income vs Recovery")
                .title("Per Capita Income vs Recovery", NO_DATA)
                .axes("per_capita_income_usd", "recovery_rate")
                .color("#2E8B57")
                .data(&snapshot.socio_economics.income_vs_recovery, ChartData::Points)
        }
        Panel::CountryComparison => {
            ChartBuilder::new(panel, ChartKind::HorizontalBar, "Country Performance")
                .title(
                    &format!("Top 15 Countries by {}", filter.country_metric.label()),
                    NO_DATA_AVAILABLE,
                )
                .axes(filter.country_metric.column(), "country")
                .color(country_metric_color(filter.country_metric))
                .ranked(&snapshot.countries.by_metric)
        }
        Panel::MostImproved => {
            ChartBuilder::new(panel, ChartKind::HorizontalBar, "Most Improved Countries (5 Years)")
                .title("Top 15 Most Improved", NO_DATA)
                .axes("improvement_in_5_years", "country")
                .color("#4169E1")
                .ranked(&snapshot.countries.most_improved)
        }
        Panel::AgeDistribution => ChartBuilder::new(panel, ChartKind::Box, "Age Group")
            .title(&format!("{} by Age", filter.age_metric.column()), NO_DATA)
            .axes("age_group", filter.age_metric.column())
            .data(&snapshot.age.by_age, ChartData::Distribution),
        Panel::AgeGenderDistribution => {
            ChartBuilder::new(panel, ChartKind::Box, "Age and Gender")
                .title(
                    &format!("{} by Age & Gender", filter.age_metric.column()),
                    NO_DATA,
                )
                .axes("age_group", filter.age_metric.column())
                .legend()
                .data(&snapshot.age.by_age_and_gender, ChartData::Distribution)
        }
    };
    Some(spec)
}

/// Every chart on `tab`, in display order.
pub fn charts_for_tab(snapshot: &DashboardSnapshot, tab: Tab) -> Vec<ChartSpec> {
    tab.panels()
        .into_iter()
        .filter_map(|panel| chart(snapshot, panel))
        .collect()
}

struct ChartBuilder {
    panel: Panel,
    kind: ChartKind,
    header: &'static str,
    title: String,
    empty_title: &'static str,
    x_label: String,
    y_label: String,
    color: Option<&'static str>,
    show_legend: bool,
}

impl ChartBuilder {
    fn new(panel: Panel, kind: ChartKind, header: &'static str) -> Self {
        Self {
            panel,
            kind,
            header,
            title: String::new(),
            empty_title: NO_DATA_AVAILABLE,
            x_label: String::new(),
            y_label: String::new(),
            color: None,
            show_legend: false,
        }
    }

    fn title(mut self, title: &str, empty_title: &'static str) -> Self {
        self.title = title.to_string();
        self.empty_title = empty_title;
        self
    }

    fn axes(mut self, x: &str, y: &str) -> Self {
        self.x_label = x.to_string();
        self.y_label = y.to_string();
        self
    }

    fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    fn legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    fn ranked(self, rows: &[RankedRow]) -> ChartSpec {
        self.data(rows, ChartData::Ranked)
    }

    fn data<T: Clone>(self, rows: &[T], wrap: fn(Vec<T>) -> ChartData) -> ChartSpec {
        let (title, data) = if rows.is_empty() {
            (self.empty_title.to_string(), ChartData::NoData)
        } else {
            (self.title, wrap(rows.to_vec()))
        };
        ChartSpec {
            panel: self.panel,
            kind: self.kind,
            title,
            header: self.header,
            x_label: self.x_label,
            y_label: self.y_label,
            color: self.color,
            show_legend: self.show_legend,
            data,
        }
    }
}
