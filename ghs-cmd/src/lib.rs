//! Command implementations for GHS CLI.
//!
//! Provides subcommands for listing filter choices, printing dashboard
//! panels for a filter selection, exporting every panel as JSON and
//! exploring the dataset interactively from stdin.

use clap::Subcommand;
use ghs_stats::Panel;

pub mod args;
pub mod explore;
pub mod report;

pub use args::{FilterArgs, OutputFormat, DEFAULT_DATA};

#[derive(Subcommand)]
pub enum Command {
    /// List the countries, diseases, genders and years available as filters
    Choices {
        /// Path to the health statistics CSV (optionally gzipped)
        #[arg(short = 'd', long, default_value = DEFAULT_DATA)]
        data: String,
    },

    /// Print the overview value boxes for a filter selection
    Summary {
        #[arg(short = 'd', long, default_value = DEFAULT_DATA)]
        data: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the data behind one dashboard panel
    Panel {
        /// Panel name, e.g. `prevalence`, `trend` or `age-gender-distribution`
        panel: Panel,

        #[arg(short = 'd', long, default_value = DEFAULT_DATA)]
        data: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write every panel for a filter selection to a JSON file
    Export {
        #[arg(short = 'd', long, default_value = DEFAULT_DATA)]
        data: String,

        /// Output path for the JSON document
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Read filter changes such as `country=India` from stdin and print
    /// the dashboard summary after each one
    Explore {
        #[arg(short = 'd', long, default_value = DEFAULT_DATA)]
        data: String,

        /// Starting selections
        #[command(flatten)]
        filter: FilterArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Choices { data } => report::run_choices(&data),
        Command::Summary { data, filter } => report::run_summary(&data, &filter),
        Command::Panel {
            panel,
            data,
            format,
            filter,
        } => report::run_panel(&data, panel, format, &filter),
        Command::Export {
            data,
            output,
            filter,
        } => report::run_export(&data, &output, &filter),
        Command::Explore { data, filter } => explore::run_explore(&data, &filter).await,
    }
}
