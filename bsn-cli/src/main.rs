//! Basin Sentinels CLI - query the sensor seed and the AI narrative service
//! from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bsn-cli",
    version,
    about = "Godavari basin water-quality and crowd monitoring toolkit"
)]
struct Cli {
    /// Gemini API key (overrides GEMINI_API_KEY / API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: bsn_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bsn_cmd::run(cli.command, cli.api_key).await
}
