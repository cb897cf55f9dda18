//! WMS CLI - terminal access to the waste management sensor network.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wms-cli",
    version,
    about = "Waste management sensor network toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wms_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wms_cmd::run(cli.command).await
}
