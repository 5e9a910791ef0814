//! GED CLI - Command line tool for exploring global electricity production.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ged-cli",
    version,
    about = "Global electricity production by source, 2000-2020"
)]
struct Cli {
    #[command(subcommand)]
    command: ged_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("ged-cli starting");
    ged_cmd::run(cli.command).await
}
