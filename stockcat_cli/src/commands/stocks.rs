use anyhow::Result;
use clap::Args;
use stockcat_lib::stocks::search_stocks;
use stockcat_lib::types::StockInfo;
use stockcat_lib::validation;
use stockcat_lib::CachedClient;

use crate::output::{
    print_json, print_stocks_csv, print_stocks_markdown, print_stocks_table, print_stocks_xml,
    OutputFormat,
};

#[derive(Args)]
pub struct StocksArgs {
    /// Match by id prefix or name substring
    #[arg(long)]
    pub search: Option<String>,

    /// Maximum number of stocks to show
    #[arg(long, default_value = "20")]
    pub limit: usize,
}

pub async fn run(args: &StocksArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let limit = validation::validate_limit(args.limit)?;
    let term = match &args.search {
        Some(search) => validation::validate_search(search)?,
        None => String::new(),
    };

    let all = client.stock_list().await?;
    let matched: Vec<StockInfo> = search_stocks(&all, &term, limit)
        .into_iter()
        .cloned()
        .collect();

    eprintln!("{} of {} listed stocks", matched.len(), all.len());

    match format {
        OutputFormat::Table => print_stocks_table(&matched),
        OutputFormat::Json => print_json(&matched),
        OutputFormat::Csv => print_stocks_csv(&matched)?,
        OutputFormat::Markdown => print_stocks_markdown(&matched),
        OutputFormat::Xml => print_stocks_xml(&matched)?,
    }

    Ok(())
}
