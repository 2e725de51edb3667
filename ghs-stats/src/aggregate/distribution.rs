//! Raw per-record distributions for the age group box plots.

use crate::metric::Metric;
use crate::models::{BoxSummary, DistributionPoint};
use crate::view::FilteredView;
use std::collections::BTreeMap;

/// How the age group boxes are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeSplit {
    /// One box per age group.
    AgeGroup,
    /// One box per age group and gender, colored by gender.
    AgeGroupAndGender,
}

/// The selected metric for every row of the view, in view order.
pub fn age_group_distribution(
    view: &FilteredView<'_>,
    metric: Metric,
    split: AgeSplit,
) -> Vec<DistributionPoint> {
    view.iter()
        .map(|r| DistributionPoint {
            category: r.age_group.clone(),
            color: match split {
                AgeSplit::AgeGroup => None,
                AgeSplit::AgeGroupAndGender => Some(r.gender.to_string()),
            },
            value: metric.value(r),
        })
        .collect()
}

/// Five-number summary per (category, color) box.
///
/// Quartiles use linear interpolation between closest ranks. Boxes are
/// ordered by category, then color.
pub fn box_summary(points: &[DistributionPoint]) -> Vec<BoxSummary> {
    let mut groups: BTreeMap<(&str, Option<&str>), Vec<f64>> = BTreeMap::new();
    for p in points {
        groups
            .entry((p.category.as_str(), p.color.as_deref()))
            .or_default()
            .push(p.value);
    }

    groups
        .into_iter()
        .map(|((category, color), mut values)| {
            values.sort_by(f64::total_cmp);
            BoxSummary {
                category: category.to_string(),
                color: color.map(str::to_string),
                count: values.len(),
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
            }
        })
        .collect()
}

/// Quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{record, sample_dataset};
    use crate::FilterState;
    use ghs_data::{Gender, Record};

    fn point(category: &str, color: Option<&str>, value: f64) -> DistributionPoint {
        DistributionPoint {
            category: category.to_string(),
            color: color.map(str::to_string),
            value,
        }
    }

    #[test]
    fn distribution_has_one_point_per_row() {
        let dataset = sample_dataset();
        let view = FilteredView::compute(&dataset, &FilterState::for_dataset(&dataset));
        let points = age_group_distribution(&view, Metric::RecoveryRate, AgeSplit::AgeGroup);
        assert_eq!(points.len(), dataset.len());
        assert_eq!(points[0], point("0-18", None, 60.0));
    }

    #[test]
    fn gender_split_sets_color() {
        let a = Record {
            age_group: "61+".into(),
            incidence_rate: 2.5,
            ..record("A", "X", 2000, Gender::Female)
        };
        let view = FilteredView::from_rows(vec![&a]);
        let points =
            age_group_distribution(&view, Metric::IncidenceRate, AgeSplit::AgeGroupAndGender);
        assert_eq!(points, vec![point("61+", Some("Female"), 2.5)]);
    }

    #[test]
    fn metric_choice_changes_values_only() {
        let dataset = sample_dataset();
        let view = FilteredView::compute(&dataset, &FilterState::for_dataset(&dataset));
        let mortality = age_group_distribution(&view, Metric::MortalityRate, AgeSplit::AgeGroup);
        let recovery = age_group_distribution(&view, Metric::RecoveryRate, AgeSplit::AgeGroup);
        assert_eq!(mortality.len(), recovery.len());
        assert!(mortality
            .iter()
            .zip(&recovery)
            .all(|(m, r)| m.category == r.category && m.value != r.value));
    }

    #[test]
    fn box_summary_quartiles() {
        let points: Vec<DistributionPoint> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .into_iter()
            .map(|v| point("19-35", None, v))
            .chain(std::iter::once(point("0-18", None, 7.0)))
            .collect();
        let boxes = box_summary(&points);
        assert_eq!(boxes.len(), 2);

        assert_eq!(boxes[0].category, "0-18");
        assert_eq!(boxes[0].count, 1);
        assert_eq!(boxes[0].median, 7.0);

        let b = &boxes[1];
        assert_eq!((b.min, b.q1, b.median, b.q3, b.max), (1.0, 2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn box_summary_interpolates_even_counts() {
        let points: Vec<DistributionPoint> = [4.0, 1.0, 3.0, 2.0]
            .into_iter()
            .map(|v| point("0-18", Some("Male"), v))
            .collect();
        let boxes = box_summary(&points);
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].color.as_deref(), Some("Male"));
        assert_eq!(boxes[0].q1, 1.75);
        assert_eq!(boxes[0].median, 2.5);
        assert_eq!(boxes[0].q3, 3.25);
    }

    #[test]
    fn empty_inputs_give_empty_outputs() {
        let view = FilteredView::from_rows(Vec::new());
        let points =
            age_group_distribution(&view, Metric::MortalityRate, AgeSplit::AgeGroupAndGender);
        assert!(points.is_empty());
        assert!(box_summary(&points).is_empty());
    }
}
