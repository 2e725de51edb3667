use crate::error::ParseError;
use ghs_data::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rate column a panel can be switched between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    MortalityRate,
    RecoveryRate,
    IncidenceRate,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::MortalityRate,
        Metric::RecoveryRate,
        Metric::IncidenceRate,
    ];

    /// Human-readable name, e.g. "Mortality Rate".
    pub fn label(&self) -> &'static str {
        match self {
            Metric::MortalityRate => "Mortality Rate",
            Metric::RecoveryRate => "Recovery Rate",
            Metric::IncidenceRate => "Incidence Rate",
        }
    }

    /// Dataset column name, e.g. "mortality_rate".
    pub fn column(&self) -> &'static str {
        match self {
            Metric::MortalityRate => "mortality_rate",
            Metric::RecoveryRate => "recovery_rate",
            Metric::IncidenceRate => "incidence_rate",
        }
    }

    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Metric::MortalityRate => record.mortality_rate,
            Metric::RecoveryRate => record.recovery_rate,
            Metric::IncidenceRate => record.incidence_rate,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the label ("Recovery Rate") or the column name
/// ("recovery_rate"), case-insensitively.
impl FromStr for Metric {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Metric::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s) || m.column().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::Metric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_column() {
        assert_eq!("Mortality Rate".parse(), Ok(Metric::MortalityRate));
        assert_eq!("recovery_rate".parse(), Ok(Metric::RecoveryRate));
        assert_eq!(" incidence rate ".parse(), Ok(Metric::IncidenceRate));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "prevalence".parse::<Metric>(),
            Err(ParseError::Metric("prevalence".to_string()))
        );
    }

    #[test]
    fn test_default_is_mortality() {
        assert_eq!(Metric::default(), Metric::MortalityRate);
    }
}
