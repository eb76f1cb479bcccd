use anyhow::Result;
use chrono::Local;
use clap::Args;
use stockcat_lib::analysis::SeriesSummary;
use stockcat_lib::validation;
use stockcat_lib::CachedClient;

use crate::output::{
    print_json, print_revenue_csv, print_revenue_markdown, print_revenue_table, print_revenue_xml,
    print_summary_csv, print_summary_markdown, print_summary_table, print_summary_xml,
    OutputFormat,
};

#[derive(Args)]
pub struct RevenueArgs {
    /// Stock id (e.g. 2330)
    #[arg(long, default_value = "2867")]
    pub stock: String,

    /// Time range in years: 1, 3, 5 or 8
    #[arg(long, default_value = "5")]
    pub years: u32,

    /// Print headline figures instead of the monthly rows
    #[arg(long)]
    pub summary: bool,
}

pub async fn run(args: &RevenueArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let stock_id = validation::validate_stock_id(&args.stock)?;
    let range = validation::validate_years(args.years)?;
    let today = Local::now().date_naive();

    let (info, series) = tokio::try_join!(
        client.stock_info(&stock_id),
        client.revenue_series(&stock_id, range, today),
    )?;

    eprintln!(
        "{} {} ({}) {}: {} months",
        info.stock_id,
        info.stock_name,
        info.industry_category,
        range.label(),
        series.len()
    );

    if args.summary {
        let summary = SeriesSummary::from_points(&series);
        match format {
            OutputFormat::Table => print_summary_table(&summary),
            OutputFormat::Json => print_json(&summary),
            OutputFormat::Csv => print_summary_csv(&summary)?,
            OutputFormat::Markdown => print_summary_markdown(&summary),
            OutputFormat::Xml => print_summary_xml(&summary)?,
        }
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_revenue_table(&series),
        OutputFormat::Json => print_json(&series),
        OutputFormat::Csv => print_revenue_csv(&series)?,
        OutputFormat::Markdown => print_revenue_markdown(&series),
        OutputFormat::Xml => print_revenue_xml(&series)?,
    }

    Ok(())
}
