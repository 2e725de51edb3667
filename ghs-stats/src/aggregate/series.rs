//! Time series for the disease trends tab.

use super::group_means;
use crate::metric::Metric;
use crate::models::TrendPoint;
use crate::view::FilteredView;

/// Mean of `metric` per (year, disease), ordered by year then disease.
pub fn trend_over_time(view: &FilteredView<'_>, metric: Metric) -> Vec<TrendPoint> {
    group_means(
        view,
        |r| (r.year, r.disease_name.as_str()),
        |r| metric.value(r),
    )
    .into_iter()
    .map(|((year, disease), value)| TrendPoint {
        year,
        disease: disease.to_string(),
        value,
    })
    .collect()
}
