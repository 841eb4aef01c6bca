use anyhow::Result;
use clap::Parser;
use fxgate::core::config::AppConfig;
use fxgate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Listen port, overrides the PORT environment variable
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = start(cli).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Server failed");
    }
    result
}

async fn start(cli: Cli) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    fxgate::run(config).await
}
