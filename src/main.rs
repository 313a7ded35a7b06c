use anyhow::Result;
use clap::Parser;
use console::style;
use std::time::Duration;
use xrate::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Source currency code, e.g. USD
    from: String,

    /// Target currency code, e.g. EUR
    to: String,

    /// Reuse a fetched rate for this many seconds
    #[arg(short = 't', long)]
    cache_ttl: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long)]
    config_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = xrate::run(
        &cli.from,
        &cli.to,
        cli.cache_ttl.map(Duration::from_secs),
        cli.config_path.as_deref(),
    )
    .await;

    match &result {
        Ok(rate) => {
            println!(
                "1 {} = {} {}",
                cli.from.to_uppercase(),
                style(rate).green().bold(),
                cli.to.to_uppercase()
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Rate lookup failed");
        }
    }

    result.map(|_| ())
}
