//! One-shot reports: filter choices, value boxes, single panels and the
//! full JSON export.

use crate::args::{load_dataset, FilterArgs, OutputFormat};
use anyhow::Context;
use chrono::Utc;
use ghs_data::{Dataset, Gender};
use ghs_stats::aggregate::box_summary;
use ghs_stats::presentation::{self, ChartData, ChartSpec, ValueBox};
use ghs_stats::{DashboardSnapshot, Panel, Selection, Tab};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Print every selector's choices.
pub fn run_choices(data: &str) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    let stdout = io::stdout();
    write_choices(&mut stdout.lock(), &dataset)
}

/// Print the overview value boxes and the filtered row count.
pub fn run_summary(data: &str, filter: &FilterArgs) -> anyhow::Result<()> {
    let snapshot = snapshot_for(data, filter)?;
    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), &snapshot)
}

/// Print one panel in the requested format.
pub fn run_panel(
    data: &str,
    panel: Panel,
    format: OutputFormat,
    filter: &FilterArgs,
) -> anyhow::Result<()> {
    let snapshot = snapshot_for(data, filter)?;
    let stdout = io::stdout();
    write_panel(&mut stdout.lock(), &snapshot, panel, format)
}

#[derive(Serialize)]
struct Export<'a> {
    generated_at: String,
    source: &'a str,
    dataset_rows: usize,
    value_boxes: Vec<ValueBox>,
    filtered_rows: String,
    charts: Vec<ChartSpec>,
    snapshot: &'a DashboardSnapshot,
}

/// Write every panel for the selection to `output` as pretty JSON.
pub fn run_export(data: &str, output: &str, filter: &FilterArgs) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    let snapshot = DashboardSnapshot::compute(&dataset, &filter.resolve(&dataset)?, 0);

    let export = Export {
        generated_at: Utc::now().to_rfc3339(),
        source: data,
        dataset_rows: dataset.len(),
        value_boxes: presentation::value_boxes(&snapshot),
        filtered_rows: presentation::filtered_rows_text(snapshot.filtered_rows),
        charts: Tab::ALL
            .iter()
            .flat_map(|tab| presentation::charts_for_tab(&snapshot, *tab))
            .collect(),
        snapshot: &snapshot,
    };

    let file = File::create(output).with_context(|| format!("Failed to create {}", output))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &export)?;
    writer.flush()?;
    info!(
        "Exported {} charts for {} filtered rows to {}",
        export.charts.len(),
        snapshot.filtered_rows,
        output
    );
    Ok(())
}

fn snapshot_for(data: &str, filter: &FilterArgs) -> anyhow::Result<DashboardSnapshot> {
    let dataset = load_dataset(data)?;
    let filter = filter.resolve(&dataset)?;
    Ok(DashboardSnapshot::compute(&dataset, &filter, 0))
}

pub fn write_choices<W: Write>(out: &mut W, dataset: &Dataset) -> anyhow::Result<()> {
    let (first, last) = dataset.year_bounds();
    let genders: Vec<String> = Selection::<Gender>::choices()
        .iter()
        .map(|g| g.to_string())
        .collect();
    writeln!(out, "Countries: All, {}", dataset.countries().join(", "))?;
    writeln!(out, "Diseases: All, {}", dataset.diseases().join(", "))?;
    writeln!(out, "Genders: {}", genders.join(", "))?;
    writeln!(out, "Years: {}-{}", first, last)?;
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, snapshot: &DashboardSnapshot) -> anyhow::Result<()> {
    for value_box in presentation::value_boxes(snapshot) {
        writeln!(out, "{}: {}", value_box.title, value_box.text)?;
    }
    writeln!(out, "{}", presentation::filtered_rows_text(snapshot.filtered_rows))?;
    Ok(())
}

pub fn write_panel<W: Write>(
    out: &mut W,
    snapshot: &DashboardSnapshot,
    panel: Panel,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let Some(spec) = presentation::chart(snapshot, panel) else {
        // Value boxes and the row counter are plain text in every format
        let text = presentation::scalar_text(snapshot, panel).unwrap_or_default();
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&text)?)?,
            OutputFormat::Text | OutputFormat::Csv => writeln!(out, "{}", text)?,
        }
        return Ok(());
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &spec)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(out, &spec.data)?,
        OutputFormat::Text => write_text(out, &spec)?,
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, data: &ChartData) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    match data {
        ChartData::NoData => {}
        ChartData::Ranked(rows) => rows.iter().try_for_each(|r| writer.serialize(r))?,
        ChartData::Series(rows) => rows.iter().try_for_each(|r| writer.serialize(r))?,
        ChartData::Points(rows) => rows.iter().try_for_each(|r| writer.serialize(r))?,
        ChartData::Distribution(rows) => rows.iter().try_for_each(|r| writer.serialize(r))?,
    }
    writer.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, spec: &ChartSpec) -> anyhow::Result<()> {
    writeln!(out, "{}", spec.title)?;
    match &spec.data {
        ChartData::NoData => {}
        ChartData::Ranked(rows) => {
            for row in rows {
                writeln!(out, "  {:<30} {:>12.2}", row.label, row.value)?;
            }
        }
        ChartData::Series(rows) => {
            for row in rows {
                writeln!(out, "  {:<6} {:<24} {:>10.2}", row.year, row.disease, row.value)?;
            }
        }
        ChartData::Points(rows) => {
            writeln!(out, "  {:<24} {:>14} {:>14}", "", spec.x_label, spec.y_label)?;
            for row in rows {
                writeln!(out, "  {:<24} {:>14.2} {:>14.2}", row.label, row.x, row.y)?;
            }
        }
        ChartData::Distribution(points) => {
            writeln!(
                out,
                "  {:<16} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
                "group", "n", "min", "q1", "median", "q3", "max"
            )?;
            for b in box_summary(points) {
                let group = match &b.color {
                    Some(color) => format!("{} {}", b.category, color),
                    None => b.category.clone(),
                };
                writeln!(
                    out,
                    "  {:<16} {:>6} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
                    group, b.count, b.min, b.q1, b.median, b.q3, b.max
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghs_stats::{FilterEvent, FilterState, YearRange};

    const CSV: &str = "\
country,disease_name,year,gender,mortality_rate,recovery_rate,incidence_rate,population_affected,treatment_type,healthcare_access,per_capita_income_usd,age_group,improvement_in_5_years
India,Malaria,2004,Male,4.0,70.0,10.0,1000,Medication,60.0,10000,19-35,3.0
India,Malaria,2005,Female,6.0,72.0,11.0,3000,Medication,62.0,10000,19-35,5.0
Brazil,Cholera,2011,Female,2.0,80.0,12.0,2000,Surgery,70.0,12000,0-18,4.0
";

    fn snapshot(event: Option<FilterEvent>) -> DashboardSnapshot {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let mut filter = FilterState::for_dataset(&dataset);
        if let Some(event) = event {
            filter = filter.apply(event);
        }
        DashboardSnapshot::compute(&dataset, &filter, 1)
    }

    fn render(snapshot: &DashboardSnapshot, panel: Panel, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_panel(&mut out, snapshot, panel, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn choices_list_first_appearance_order() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let mut out = Vec::new();
        write_choices(&mut out, &dataset).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Countries: All, India, Brazil\n\
             Diseases: All, Malaria, Cholera\n\
             Genders: All, Male, Female, Other\n\
             Years: 2004-2011\n"
        );
    }

    #[test]
    fn summary_prints_value_boxes_and_row_count() {
        let mut out = Vec::new();
        write_summary(&mut out, &snapshot(None)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total Diseases: 2\n"));
        assert!(text.contains("Average Mortality Rate: 4.0\n"));
        assert!(text.contains("Top Recovery Country: Brazil\n"));
        assert!(text.ends_with("Filtered rows: 3\n"));
    }

    #[test]
    fn empty_selection_summary_says_no_data() {
        let mut out = Vec::new();
        let empty = snapshot(Some(FilterEvent::Years(YearRange::single(2008))));
        write_summary(&mut out, &empty).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Average Recovery Rate: No data\n"));
        assert!(text.ends_with("Filtered rows: 0\n"));
    }

    #[test]
    fn ranked_panel_as_csv() {
        let text = render(&snapshot(None), Panel::Prevalence, OutputFormat::Csv);
        assert_eq!(text, "label,value\nMalaria,4000.0\nCholera,2000.0\n");
    }

    #[test]
    fn distribution_panel_as_text_shows_boxes() {
        let text = render(&snapshot(None), Panel::AgeGenderDistribution, OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "mortality_rate by Age & Gender");
        assert_eq!(lines.len(), 5);
        assert!(lines[2].trim_start().starts_with("0-18 Female"));
    }

    #[test]
    fn empty_chart_as_json_is_tagged_no_data() {
        let empty = snapshot(Some(FilterEvent::Years(YearRange::single(2008))));
        let text = render(&empty, Panel::Trend, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["title"], "No data available");
        assert_eq!(value["data"]["type"], "no_data");
    }

    #[test]
    fn scalar_panel_prints_its_text() {
        let text = render(&snapshot(None), Panel::FilteredRows, OutputFormat::Csv);
        assert_eq!(text, "Filtered rows: 3\n");
    }
}
