//! GHS CLI - Command line tool for exploring global health statistics.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ghs-cli",
    version,
    about = "Global Health Statistics Explorer toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ghs_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting ghs-cli");
    ghs_cmd::run(cli.command).await
}
