//! Monthly revenue records from the `TaiwanStockMonthRevenue` dataset.

use serde::{Deserialize, Serialize};

use super::StockID;

/// One month of reported revenue for a single stock.
///
/// `date` is the reporting date FinMind attaches to the record and is usually
/// the first day of the month *after* the revenue month; `revenue_year` and
/// `revenue_month` identify the month the revenue belongs to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonthRevenue {
    /// Reporting date, `YYYY-MM-DD`.
    pub date: String,

    pub stock_id: StockID,

    #[serde(default)]
    pub country: String,

    /// Revenue in TWD.
    pub revenue: i64,

    pub revenue_month: u32,

    pub revenue_year: i32,
}

impl MonthRevenue {
    /// Convenience constructor mostly used by tests and fixtures.
    pub fn new(date: &str, stock_id: &str, revenue_year: i32, revenue_month: u32, revenue: i64) -> Self {
        Self {
            date: date.to_string(),
            stock_id: stock_id.to_string(),
            country: "Taiwan".to_string(),
            revenue,
            revenue_month,
            revenue_year,
        }
    }
}
