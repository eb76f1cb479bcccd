use anyhow::Result;
use serde::Serialize;
use stockcat_lib::analysis::SeriesSummary;
use stockcat_lib::types::StockInfo;
use stockcat_lib::RevenuePoint;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    /// Unknown names fall back to the table layout.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            "xml" => OutputFormat::Xml,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct RevenueRow {
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Revenue (K)")]
    #[serde(rename = "Revenue (K)")]
    revenue: String,
    #[tabled(rename = "YoY (%)")]
    #[serde(rename = "YoY (%)")]
    yoy: String,
}

#[derive(Tabled, Serialize)]
struct StockRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    stock_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Industry")]
    #[serde(rename = "Industry")]
    industry: String,
    #[tabled(rename = "Market")]
    #[serde(rename = "Market")]
    market: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
}

#[derive(Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    #[serde(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_revenue_rows(points: &[RevenuePoint]) -> Vec<RevenueRow> {
    points
        .iter()
        .map(|p| RevenueRow {
            period: p.period.clone(),
            revenue: format_thousands(p.revenue),
            yoy: format_growth(p.yoy_growth_rate),
        })
        .collect()
}

fn build_stock_rows(stocks: &[StockInfo]) -> Vec<StockRow> {
    stocks
        .iter()
        .map(|s| StockRow {
            stock_id: s.stock_id.clone(),
            name: s.stock_name.clone(),
            industry: s.industry_category.clone(),
            market: s.market.clone(),
            date: s.date.clone(),
        })
        .collect()
}

fn build_summary_rows(summary: &SeriesSummary) -> Vec<SummaryRow> {
    let dash = || "-".to_string();
    let row = |metric: &str, value: String| SummaryRow {
        metric: metric.to_string(),
        value,
    };
    vec![
        row("Months", summary.months.to_string()),
        row(
            "Range",
            match (&summary.first_period, &summary.last_period) {
                (Some(first), Some(last)) => format!("{} - {}", first, last),
                _ => dash(),
            },
        ),
        row("Total revenue (K)", format_thousands(summary.total_revenue)),
        row(
            "Latest",
            summary
                .latest
                .as_ref()
                .map(|p| format!("{}: {}", p.period, format_thousands(p.revenue)))
                .unwrap_or_else(dash),
        ),
        row(
            "Latest YoY (%)",
            summary
                .latest
                .as_ref()
                .map(|p| format_growth(p.yoy_growth_rate))
                .unwrap_or_else(dash),
        ),
        row(
            "Peak",
            summary
                .peak
                .as_ref()
                .map(|p| format!("{}: {}", p.period, format_thousands(p.revenue)))
                .unwrap_or_else(dash),
        ),
        row(
            "Average YoY (%)",
            summary.average_growth.map(format_growth).unwrap_or_else(dash),
        ),
    ]
}

// -- Table output --

pub fn print_revenue_table(points: &[RevenuePoint]) {
    println!("{}", Table::new(build_revenue_rows(points)));
}

pub fn print_stocks_table(stocks: &[StockInfo]) {
    println!("{}", Table::new(build_stock_rows(stocks)));
}

pub fn print_summary_table(summary: &SeriesSummary) {
    println!("{}", Table::new(build_summary_rows(summary)));
}

// -- Markdown output --

pub fn print_revenue_markdown(points: &[RevenuePoint]) {
    let mut table = Table::new(build_revenue_rows(points));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_stocks_markdown(stocks: &[StockInfo]) {
    let mut table = Table::new(build_stock_rows(stocks));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_summary_markdown(summary: &SeriesSummary) {
    let mut table = Table::new(build_summary_rows(summary));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn write_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_revenue_csv(points: &[RevenuePoint]) -> Result<()> {
    write_csv(build_revenue_rows(points))
}

pub fn print_stocks_csv(stocks: &[StockInfo]) -> Result<()> {
    write_csv(build_stock_rows(stocks))
}

pub fn print_summary_csv(summary: &SeriesSummary) -> Result<()> {
    write_csv(build_summary_rows(summary))
}

// -- XML output --

pub fn print_revenue_xml(points: &[RevenuePoint]) -> Result<()> {
    println!("{}", xml_output::revenue_to_xml(points)?);
    Ok(())
}

pub fn print_stocks_xml(stocks: &[StockInfo]) -> Result<()> {
    println!("{}", xml_output::stocks_to_xml(stocks)?);
    Ok(())
}

pub fn print_summary_xml(summary: &SeriesSummary) -> Result<()> {
    println!("{}", xml_output::summary_to_xml(summary)?);
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Revenue in thousands of TWD, rounded, with comma grouping: `587040` -> `587`.
fn format_thousands(value: i64) -> String {
    let thousands = (value as f64 / 1000.0).round() as i64;
    let digits = thousands.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if thousands < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn format_growth(rate: f64) -> String {
    format!("{:.2}", rate)
}
