//! Aggregate result rows.
//!
//! All structs derive `Serialize` so they can be handed to the charting
//! layer as JSON or written out as CSV by the CLI.

use serde::Serialize;

/// A (category, value) pair for ranked bar charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedRow {
    pub label: String,
    pub value: f64,
}

/// One point of a multi-series line chart: one series per disease.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub disease: String,
    pub value: f64,
}

/// A labelled (x, y) point for scatter charts; one per country.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// One raw observation for a box plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistributionPoint {
    /// Box position on the x-axis (the age group).
    pub category: String,
    /// Secondary split drawn as separate colored boxes, if any.
    pub color: Option<String>,
    pub value: f64,
}

/// Five-number summary of one box in a box plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoxSummary {
    pub category: String,
    pub color: Option<String>,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}
