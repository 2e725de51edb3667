//! Per-country (x, y) means for the socio-economic scatter charts.

use super::Mean;
use crate::models::ScatterPoint;
use crate::view::FilteredView;
use ghs_data::Record;
use std::collections::BTreeMap;

/// Mean healthcare access (x) against mean mortality rate (y), per country.
pub fn healthcare_vs_mortality(view: &FilteredView<'_>) -> Vec<ScatterPoint> {
    country_means(view, |r| r.healthcare_access, |r| r.mortality_rate)
}

/// Mean per-capita income (x) against mean recovery rate (y), per country.
pub fn income_vs_recovery(view: &FilteredView<'_>) -> Vec<ScatterPoint> {
    country_means(view, |r| r.per_capita_income_usd, |r| r.recovery_rate)
}

fn country_means(
    view: &FilteredView<'_>,
    x: impl Fn(&Record) -> f64,
    y: impl Fn(&Record) -> f64,
) -> Vec<ScatterPoint> {
    let mut groups: BTreeMap<&str, (Mean, Mean)> = BTreeMap::new();
    for r in view.iter() {
        let (mx, my) = groups.entry(r.country.as_str()).or_default();
        mx.push(x(r));
        my.push(y(r));
    }
    groups
        .into_iter()
        .filter_map(|(country, (mx, my))| {
            Some(ScatterPoint {
                label: country.to_string(),
                x: mx.value()?,
                y: my.value()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_dataset;
    use crate::{FilterEvent, FilterState, Selection};

    #[test]
    fn one_point_per_country() {
        let dataset = sample_dataset();
        let view = FilteredView::compute(&dataset, &FilterState::for_dataset(&dataset));
        let points = healthcare_vs_mortality(&view);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Brazil", "Canada", "India"]);

        let canada = &points[1];
        assert!((canada.x - 88.75).abs() < 1e-9);
        assert!((canada.y - 4.375).abs() < 1e-9);
    }

    #[test]
    fn income_vs_recovery_for_one_country() {
        let dataset = sample_dataset();
        let filter = FilterState::for_dataset(&dataset)
            .apply(FilterEvent::Country(Selection::from_label("Canada")));
        let view = FilteredView::compute(&dataset, &filter);
        let points = income_vs_recovery(&view);
        assert_eq!(points.len(), 1);
        assert!((points[0].x - 41500.0).abs() < 1e-9);
        assert!((points[0].y - 80.75).abs() < 1e-9);
    }

    #[test]
    fn empty_view_gives_no_points() {
        let view = FilteredView::from_rows(Vec::new());
        assert!(healthcare_vs_mortality(&view).is_empty());
        assert!(income_vs_recovery(&view).is_empty());
    }
}
