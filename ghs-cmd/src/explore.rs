//! Interactive exploration: filter changes arrive on stdin, snapshots are
//! recomputed on a blocking worker and published through the coordinator.
//!
//! Each input line is one event, `key=value`:
//!
//! ```text
//! country=India
//! disease=All
//! gender=Female
//! years=2000..2010
//! trend_metric=Recovery Rate
//! ```
//!
//! Events typed while a recomputation is running supersede it; only the
//! latest filter state is ever printed.

use crate::args::{load_dataset, FilterArgs};
use anyhow::{anyhow, bail, Context};
use ghs_stats::presentation;
use ghs_stats::{Coordinator, DashboardSnapshot, FilterEvent, Selection, Ticket, YearRange};
use log::{info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

pub async fn run_explore(data: &str, filter: &FilterArgs) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    info!("Exploring {} rows from {}", dataset.len(), data);
    let initial = filter.resolve(&dataset)?;
    let coordinator = Arc::new(Coordinator::new(dataset));

    let (tx, rx) = watch::channel(coordinator.submit(initial));
    let worker = tokio::spawn(recompute_loop(Arc::clone(&coordinator), rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        match parse_event(line) {
            Ok(event) => {
                let ticket = coordinator.dispatch(event);
                tx.send_replace(ticket);
            }
            Err(e) => eprintln!("{:#}", e),
        }
    }

    drop(tx);
    worker.await?
}

/// Recompute whenever a new ticket arrives. Tickets replaced before the
/// worker gets to them are skipped by the channel.
async fn recompute_loop(
    coordinator: Arc<Coordinator>,
    mut rx: watch::Receiver<Ticket>,
) -> anyhow::Result<()> {
    loop {
        let ticket = rx.borrow_and_update().clone();
        let worker = Arc::clone(&coordinator);
        let published = tokio::task::spawn_blocking(move || worker.compute(&ticket)).await?;
        match published {
            Some(snapshot) => print_snapshot(&snapshot),
            None => warn!("Discarded a superseded recomputation"),
        }
        if rx.changed().await.is_err() {
            return Ok(());
        }
    }
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    let filter = &snapshot.filter;
    println!(
        "[{}] country={} disease={} gender={} years={}",
        snapshot.generation, filter.country, filter.disease, filter.gender, filter.years
    );
    for value_box in presentation::value_boxes(snapshot) {
        println!("  {}: {}", value_box.title, value_box.text);
    }
    println!("  {}", presentation::filtered_rows_text(snapshot.filtered_rows));
}

/// Parse one `key=value` line into a filter event.
pub fn parse_event(line: &str) -> anyhow::Result<FilterEvent> {
    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected key=value, got {:?}", line))?;
    let value = value.trim();
    let event = match key.trim().to_ascii_lowercase().as_str() {
        "country" => FilterEvent::Country(Selection::from_label(value)),
        "disease" => FilterEvent::Disease(Selection::from_label(value)),
        "gender" => FilterEvent::Gender(Selection::parse_gender(value)?),
        "years" | "year" => FilterEvent::Years(parse_years(value)?),
        "trend_metric" | "trend" => FilterEvent::TrendMetric(value.parse()?),
        "country_metric" => FilterEvent::CountryMetric(value.parse()?),
        "age_metric" | "age" => FilterEvent::AgeMetric(value.parse()?),
        other => bail!("Unknown filter {:?}", other),
    };
    Ok(event)
}

/// `2000..2010`, `2000-2010` or a single year.
fn parse_years(value: &str) -> anyhow::Result<YearRange> {
    let parse = |s: &str| {
        s.trim()
            .parse::<i32>()
            .with_context(|| format!("Invalid year {:?}", s.trim()))
    };
    let bounds = value.split_once("..").or_else(|| value.split_once('-'));
    match bounds {
        Some((a, b)) => Ok(YearRange::new(parse(a)?, parse(b)?)),
        None => Ok(YearRange::single(parse(value)?)),
    }
}
