//! Core record types and dataset loading for global health statistics.
//!
//! The dataset is a single CSV table (one row per country, disease, year,
//! gender and age group) loaded once at startup. Everything downstream
//! reads it through [`Dataset`], which is never mutated after loading.

pub mod dataset;
pub mod error;
pub mod record;

pub use dataset::Dataset;
pub use error::DataError;
pub use record::{Gender, Record};
