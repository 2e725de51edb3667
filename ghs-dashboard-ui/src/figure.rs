//! Plotly figures for panel chart specs.
//!
//! Each [`ChartSpec`] becomes a `{data, layout}` JSON object that
//! `js_bridge::render_chart` hands to `Plotly.react`.

use ghs_stats::models::{DistributionPoint, RankedRow, ScatterPoint, TrendPoint};
use ghs_stats::presentation::{ChartData, ChartKind, ChartSpec};
use ghs_stats::Panel;
use serde_json::{json, Value};

/// DOM id of the container a panel's chart is drawn into.
pub fn container_id(panel: Panel) -> String {
    format!("ghs-chart-{}", panel.name())
}

pub fn plotly_figure(spec: &ChartSpec) -> Value {
    let data = match &spec.data {
        ChartData::NoData => Vec::new(),
        ChartData::Ranked(rows) => ranked_traces(spec, rows),
        ChartData::Series(rows) => series_traces(rows),
        ChartData::Points(rows) => scatter_traces(spec, rows),
        ChartData::Distribution(rows) => box_traces(rows),
    };

    let mut layout = json!({
        "title": { "text": spec.title },
        "xaxis": { "title": { "text": spec.x_label } },
        "yaxis": { "title": { "text": spec.y_label } },
        "showlegend": spec.show_legend,
        "margin": { "t": 48, "r": 16, "b": 48, "l": 64 },
        "autosize": true,
    });
    match spec.kind {
        // Largest bar at the top
        ChartKind::HorizontalBar => {
            layout["yaxis"]["autorange"] = json!("reversed");
            layout["margin"]["l"] = json!(140);
        }
        ChartKind::Line => layout["showlegend"] = json!(true),
        ChartKind::Box => layout["boxmode"] = json!("group"),
        ChartKind::Bar | ChartKind::Scatter => {}
    }
    if spec.is_empty() {
        layout["xaxis"]["visible"] = json!(false);
        layout["yaxis"]["visible"] = json!(false);
    }

    json!({ "data": data, "layout": layout })
}

fn ranked_traces(spec: &ChartSpec, rows: &[RankedRow]) -> Vec<Value> {
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
    let mut trace = json!({
        "type": "bar",
        "marker": { "color": spec.color },
    });
    if spec.kind == ChartKind::HorizontalBar {
        trace["orientation"] = json!("h");
        trace["x"] = json!(values);
        trace["y"] = json!(labels);
    } else {
        trace["x"] = json!(labels);
        trace["y"] = json!(values);
    }
    vec![trace]
}

/// One line per disease, in order of first appearance.
fn series_traces(rows: &[TrendPoint]) -> Vec<Value> {
    let mut diseases: Vec<&str> = Vec::new();
    for row in rows {
        if !diseases.contains(&row.disease.as_str()) {
            diseases.push(&row.disease);
        }
    }
    diseases
        .into_iter()
        .map(|disease| {
            let (years, values): (Vec<i32>, Vec<f64>) = rows
                .iter()
                .filter(|r| r.disease == disease)
                .map(|r| (r.year, r.value))
                .unzip();
            json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": disease,
                "x": years,
                "y": values,
            })
        })
        .collect()
}

fn scatter_traces(spec: &ChartSpec, rows: &[ScatterPoint]) -> Vec<Value> {
    vec![json!({
        "type": "scatter",
        "mode": "markers+text",
        "textposition": "top center",
        "x": rows.iter().map(|r| r.x).collect::<Vec<_>>(),
        "y": rows.iter().map(|r| r.y).collect::<Vec<_>>(),
        "text": rows.iter().map(|r| r.label.as_str()).collect::<Vec<_>>(),
        "hovertemplate": "%{text}<br>%{x}, %{y}<extra></extra>",
        "marker": { "color": spec.color, "size": 9 },
    })]
}

/// One box trace per color, or per category when uncolored.
fn box_traces(rows: &[DistributionPoint]) -> Vec<Value> {
    let trace_name = |p: &DistributionPoint| {
        p.color.clone().unwrap_or_else(|| p.category.clone())
    };
    let mut names: Vec<String> = Vec::new();
    for row in rows {
        let name = trace_name(row);
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
        .into_iter()
        .map(|name| {
            let (categories, values): (Vec<&str>, Vec<f64>) = rows
                .iter()
                .filter(|r| trace_name(r) == name)
                .map(|r| (r.category.as_str(), r.value))
                .unzip();
            json!({
                "type": "box",
                "name": name,
                "x": categories,
                "y": values,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(panel: Panel, kind: ChartKind, data: ChartData) -> ChartSpec {
        ChartSpec {
            panel,
            kind,
            title: "Title".to_string(),
            header: "Header",
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            color: Some("#0d6efd"),
            show_legend: false,
            data,
        }
    }

    #[test]
    fn scatter_points_carry_country_labels_above_markers() {
        let points = vec![
            ScatterPoint { label: "India".to_string(), x: 55.0, y: 4.0 },
            ScatterPoint { label: "Japan".to_string(), x: 90.0, y: 2.5 },
        ];
        let chart = spec(
            Panel::HealthcareVsMortality,
            ChartKind::Scatter,
            ChartData::Points(points),
        );
        let figure = plotly_figure(&chart);
        let trace = &figure["data"][0];
        assert_eq!(trace["mode"], "markers+text");
        assert_eq!(trace["textposition"], "top center");
        assert_eq!(trace["text"], json!(["India", "Japan"]));
        assert_eq!(trace["x"], json!([55.0, 90.0]));
    }

    #[test]
    fn horizontal_bars_put_the_largest_value_on_top() {
        let rows = vec![
            RankedRow { label: "Malaria".to_string(), value: 12.5 },
            RankedRow { label: "Polio".to_string(), value: 3.0 },
        ];
        let chart = spec(Panel::Prevalence, ChartKind::HorizontalBar, ChartData::Ranked(rows));
        let figure = plotly_figure(&chart);
        let trace = &figure["data"][0];
        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["y"], json!(["Malaria", "Polio"]));
        assert_eq!(figure["layout"]["yaxis"]["autorange"], "reversed");
    }

    #[test]
    fn empty_chart_hides_axes_and_keeps_title() {
        let mut chart = spec(Panel::Trend, ChartKind::Line, ChartData::NoData);
        chart.title = "No data available".to_string();
        let figure = plotly_figure(&chart);
        assert_eq!(figure["data"], json!([]));
        assert_eq!(figure["layout"]["title"]["text"], "No data available");
        assert_eq!(figure["layout"]["xaxis"]["visible"], false);
    }

    #[test]
    fn trend_rows_split_into_one_line_per_disease() {
        let point = |year, disease: &str, value| TrendPoint {
            year,
            disease: disease.to_string(),
            value,
        };
        let rows = vec![
            point(2000, "Malaria", 4.0),
            point(2000, "Polio", 1.0),
            point(2001, "Malaria", 3.5),
        ];
        let chart = spec(Panel::Trend, ChartKind::Line, ChartData::Series(rows));
        let figure = plotly_figure(&chart);
        let traces = figure["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "Malaria");
        assert_eq!(traces[0]["x"], json!([2000, 2001]));
        assert_eq!(figure["layout"]["showlegend"], true);
    }

    #[test]
    fn container_ids_follow_panel_names() {
        assert_eq!(container_id(Panel::Trend), "ghs-chart-trend");
        assert_eq!(container_id(Panel::AvgMortality), "ghs-chart-avg-mortality");
    }
}
