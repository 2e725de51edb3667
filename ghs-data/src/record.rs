use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender category recorded for each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All genders in the order they are offered as filter choices.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse a gender label, ignoring case and surrounding whitespace.
    pub fn parse(label: &str) -> Option<Gender> {
        let label = label.trim();
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the global health statistics table.
///
/// Column names in the source CSV match the field names exactly. Columns
/// not listed here are ignored when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub disease_name: String,
    pub year: i32,
    pub gender: Gender,
    /// Percentage of affected people who died
    pub mortality_rate: f64,
    /// Percentage of affected people who recovered
    pub recovery_rate: f64,
    /// New cases as a percentage of the population
    pub incidence_rate: f64,
    pub population_affected: u64,
    pub treatment_type: String,
    /// Percentage of the population with healthcare access
    pub healthcare_access: f64,
    pub per_capita_income_usd: f64,
    pub age_group: String,
    /// Percentage improvement over the last five years
    pub improvement_in_5_years: f64,
}

impl Record {
    /// Column names every dataset must provide.
    pub const COLUMNS: [&'static str; 13] = [
        "country",
        "disease_name",
        "year",
        "gender",
        "mortality_rate",
        "recovery_rate",
        "incidence_rate",
        "population_affected",
        "treatment_type",
        "healthcare_access",
        "per_capita_income_usd",
        "age_group",
        "improvement_in_5_years",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse(" female "), Some(Gender::Female));
        assert_eq!(Gender::parse("OTHER"), Some(Gender::Other));
        assert_eq!(Gender::parse("All"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_gender_display_round_trips_through_parse() {
        for gender in Gender::ALL {
            assert_eq!(Gender::parse(&gender.to_string()), Some(gender));
        }
    }
}
