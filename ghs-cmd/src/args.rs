//! Command line arguments shared by the reporting subcommands.

use anyhow::Context;
use clap::{Args, ValueEnum};
use ghs_data::Dataset;
use ghs_stats::{FilterState, Metric, Selection, YearRange};
use std::sync::Arc;

/// Dataset used when `--data` is not given.
pub const DEFAULT_DATA: &str = "fixtures/Global_Health_Stats.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text; distributions are shown as box summaries
    Text,
    Json,
    Csv,
}

/// Filter selections, one flag per sidebar control.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Country to keep, or "All"
    #[arg(long, default_value = "All")]
    pub country: String,

    /// Disease to keep, or "All"
    #[arg(long, default_value = "All")]
    pub disease: String,

    /// Male, Female, Other or "All"
    #[arg(long, default_value = "All")]
    pub gender: String,

    /// First year of the range (defaults to the earliest year in the data)
    #[arg(long)]
    pub year_min: Option<i32>,

    /// Last year of the range (defaults to the latest year in the data)
    #[arg(long)]
    pub year_max: Option<i32>,

    /// Metric for the trend chart
    #[arg(long, default_value = "Mortality Rate")]
    pub trend_metric: Metric,

    /// Metric for the country comparison chart
    #[arg(long, default_value = "Mortality Rate")]
    pub country_metric: Metric,

    /// Metric for the age group box plots
    #[arg(long, default_value = "Mortality Rate")]
    pub age_metric: Metric,
}

impl FilterArgs {
    /// Build the filter state these arguments select within `dataset`.
    pub fn resolve(&self, dataset: &Dataset) -> anyhow::Result<FilterState> {
        let (first, last) = dataset.year_bounds();
        let years = YearRange::new(
            self.year_min.unwrap_or(first),
            self.year_max.unwrap_or(last),
        );
        let gender = Selection::parse_gender(&self.gender)
            .with_context(|| format!("Invalid --gender {:?}", self.gender))?;

        let country = Selection::from_label(&self.country);
        if let Selection::Only(name) = &country {
            if !dataset.countries().contains(&name.as_str()) {
                log::warn!("[GHS] country {:?} does not appear in the dataset", name);
            }
        }
        let disease = Selection::from_label(&self.disease);
        if let Selection::Only(name) = &disease {
            if !dataset.diseases().contains(&name.as_str()) {
                log::warn!("[GHS] disease {:?} does not appear in the dataset", name);
            }
        }

        Ok(FilterState {
            country,
            disease,
            gender,
            years,
            trend_metric: self.trend_metric,
            country_metric: self.country_metric,
            age_metric: self.age_metric,
        })
    }
}

/// Load the dataset at `path`, decompressing `.gz` files.
pub fn load_dataset(path: &str) -> anyhow::Result<Arc<Dataset>> {
    let dataset = Dataset::from_path(path)
        .with_context(|| format!("Failed to load dataset from {}", path))?;
    Ok(Arc::new(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghs_data::Gender;

    const CSV: &str = "\
country,disease_name,year,gender,mortality_rate,recovery_rate,incidence_rate,population_affected,treatment_type,healthcare_access,per_capita_income_usd,age_group,improvement_in_5_years
India,Malaria,2004,Male,5.0,70.0,10.0,1000,Medication,60.0,10000,19-35,3.0
Brazil,Cholera,2011,Female,6.0,80.0,12.0,2000,Surgery,70.0,12000,0-18,4.0
";

    fn args() -> FilterArgs {
        FilterArgs {
            country: "All".to_string(),
            disease: "All".to_string(),
            gender: "All".to_string(),
            year_min: None,
            year_max: None,
            trend_metric: Metric::MortalityRate,
            country_metric: Metric::MortalityRate,
            age_metric: Metric::MortalityRate,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_csv_str(CSV).unwrap()
    }

    #[test]
    fn defaults_resolve_to_default_filter() {
        let dataset = dataset();
        let filter = args().resolve(&dataset).unwrap();
        assert_eq!(filter, FilterState::for_dataset(&dataset));
        assert_eq!((filter.years.min(), filter.years.max()), (2004, 2011));
    }

    #[test]
    fn explicit_selections_are_kept() {
        let filter = FilterArgs {
            country: "India".to_string(),
            gender: "female".to_string(),
            year_min: Some(2005),
            age_metric: Metric::IncidenceRate,
            ..args()
        }
        .resolve(&dataset())
        .unwrap();
        assert_eq!(filter.country, Selection::Only("India".to_string()));
        assert_eq!(filter.disease, Selection::All);
        assert_eq!(filter.gender, Selection::Only(Gender::Female));
        assert_eq!((filter.years.min(), filter.years.max()), (2005, 2011));
        assert_eq!(filter.age_metric, Metric::IncidenceRate);
    }

    #[test]
    fn reversed_years_are_swapped() {
        let filter = FilterArgs {
            year_min: Some(2010),
            year_max: Some(2006),
            ..args()
        }
        .resolve(&dataset())
        .unwrap();
        assert_eq!((filter.years.min(), filter.years.max()), (2006, 2010));
    }

    #[test]
    fn unknown_gender_is_an_error() {
        let err = FilterArgs {
            gender: "Unknown".to_string(),
            ..args()
        }
        .resolve(&dataset())
        .unwrap_err();
        assert!(err.to_string().contains("--gender"));
    }

    #[test]
    fn metric_flags_accept_labels_and_columns() {
        assert_eq!("Recovery Rate".parse::<Metric>(), Ok(Metric::RecoveryRate));
        assert_eq!("incidence_rate".parse::<Metric>(), Ok(Metric::IncidenceRate));
    }
}
