use anyhow::Result;
use clap::Args;
use stockcat_lib::validation;
use stockcat_lib::CachedClient;

use crate::output::{
    print_json, print_stocks_csv, print_stocks_markdown, print_stocks_table, print_stocks_xml,
    OutputFormat,
};

#[derive(Args)]
pub struct InfoArgs {
    /// Stock id (e.g. 2330)
    #[arg(long, default_value = "2867")]
    pub stock: String,
}

pub async fn run(args: &InfoArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let stock_id = validation::validate_stock_id(&args.stock)?;
    let info = client.stock_info(&stock_id).await?;

    match format {
        OutputFormat::Table => print_stocks_table(std::slice::from_ref(&info)),
        OutputFormat::Json => print_json(&info),
        OutputFormat::Csv => print_stocks_csv(std::slice::from_ref(&info))?,
        OutputFormat::Markdown => print_stocks_markdown(std::slice::from_ref(&info)),
        OutputFormat::Xml => print_stocks_xml(std::slice::from_ref(&info))?,
    }

    Ok(())
}
