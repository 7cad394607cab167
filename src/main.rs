use aqi_reporter::cli::{run, Cli};
use aqi_reporter::error::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
