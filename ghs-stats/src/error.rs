//! Errors for parsing user-supplied selector values.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown metric: {0} (expected Mortality Rate, Recovery Rate or Incidence Rate)")]
    Metric(String),

    #[error("Unknown gender: {0} (expected All, Male, Female or Other)")]
    Gender(String),

    #[error("Unknown panel: {0}")]
    Panel(String),
}
