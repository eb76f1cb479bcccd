mod commands;
mod output;
mod xml_output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stockcat_lib::{CachedClient, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stockcat")]
#[command(about = "Monthly revenue and YoY growth for Taiwan listed stocks, from FinMind")]
struct Cli {
    /// Output format: table, json, csv, markdown or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly revenue series with year-over-year growth
    Revenue(commands::revenue::RevenueArgs),
    /// Directory record for one stock
    Info(commands::info::InfoArgs),
    /// List or search listed stocks
    Stocks(commands::stocks::StocksArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockcat=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_name(&cli.output);

    let config = Config::from_env();
    let client = CachedClient::from_config(&config);

    match &cli.command {
        Commands::Revenue(args) => commands::revenue::run(args, &client, &format).await?,
        Commands::Info(args) => commands::info::run(args, &client, &format).await?,
        Commands::Stocks(args) => commands::stocks::run(args, &client, &format).await?,
    }

    Ok(())
}
