//! Monthly revenue series: year-over-year growth, period labels, and windowing.
//!
//! [`build_series`] turns the raw records of one ticker, in whatever order the
//! source returned them, into a de-duplicated, chronologically sorted list of
//! [`RevenuePoint`]s. [`window_recent_years`] then selects the trailing years
//! shown to the user. Both are pure and perform no I/O.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate};
use finmind_api::types::MonthRevenue;
use serde::{Deserialize, Serialize};

/// A record's `date` field could not be parsed. Fatal for the whole batch:
/// dropping the record would shift the YoY alignment of later months.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed revenue date '{date}'")]
pub struct MalformedDateError {
    pub date: String,
}

/// One month of the normalized series.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    /// `YYYY/MM`, derived from the record's reporting date.
    pub period: String,
    /// Revenue in TWD, copied from the record.
    pub revenue: i64,
    /// Percentage change against the same month one year earlier; `0` when
    /// there is no usable prior-year figure.
    pub yoy_growth_rate: f64,
}

type MonthKey = (i32, u32);

/// Builds the sorted series for one ticker.
///
/// Records are keyed by `(revenue_year, revenue_month)`. When a key appears
/// more than once the last record in input order wins, both as the YoY base
/// for the following year and as the emitted point. Every record's date is
/// parsed, including overwritten duplicates.
pub fn build_series(records: &[MonthRevenue]) -> Result<Vec<RevenuePoint>, MalformedDateError> {
    let mut last_index: HashMap<MonthKey, usize> = HashMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        last_index.insert((record.revenue_year, record.revenue_month), idx);
    }

    let mut keyed: Vec<(MonthKey, RevenuePoint)> = Vec::with_capacity(last_index.len());
    let mut misaligned = 0usize;
    for (idx, record) in records.iter().enumerate() {
        let date = parse_date(&record.date)?;
        let key = (record.revenue_year, record.revenue_month);
        if last_index.get(&key) != Some(&idx) {
            continue;
        }
        if date.year() != record.revenue_year || date.month() != record.revenue_month {
            misaligned += 1;
        }

        let prior = record
            .revenue_year
            .checked_sub(1)
            .and_then(|year| last_index.get(&(year, record.revenue_month)))
            .map(|&i| records[i].revenue);

        keyed.push((
            key,
            RevenuePoint {
                period: period_label(date),
                revenue: record.revenue,
                yoy_growth_rate: growth_rate(record.revenue, prior),
            },
        ));
    }

    if misaligned > 0 {
        tracing::debug!(
            "{} of {} revenue records carry a date outside their revenue month",
            misaligned,
            keyed.len()
        );
    }

    // Two revenue months can share a reporting-date period.
    keyed.sort_by(|(ka, a), (kb, b)| a.period.cmp(&b.period).then(ka.cmp(kb)));
    Ok(keyed.into_iter().map(|(_, point)| point).collect())
}

/// Returns the trailing `years * 12` points of a sorted series, or the whole
/// series when it is shorter. Gaps in the monthly data are not filled.
pub fn window_recent_years(series: &[RevenuePoint], years: u32) -> &[RevenuePoint] {
    let months = (years as usize).saturating_mul(12);
    let start = series.len().saturating_sub(months);
    &series[start..]
}

/// `(current / prior - 1) * 100`, or `0` when `prior` is missing or zero.
pub fn growth_rate(current: i64, prior: Option<i64>) -> f64 {
    match prior {
        Some(prior) if prior != 0 => {
            let rate = (current as f64 / prior as f64 - 1.0) * 100.0;
            if rate.is_finite() {
                rate
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Normalizes a reporting date to its `YYYY/MM` period label.
pub fn format_period(date: &str) -> Result<String, MalformedDateError> {
    parse_date(date).map(period_label)
}

fn period_label(date: NaiveDate) -> String {
    date.format("%Y/%m").to_string()
}

/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, and RFC 3339 timestamps.
fn parse_date(raw: &str) -> Result<NaiveDate, MalformedDateError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"))
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| MalformedDateError {
            date: raw.to_string(),
        })
}
