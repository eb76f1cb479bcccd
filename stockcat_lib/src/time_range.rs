//! Selectable lookback windows for the revenue view.

use std::str::FromStr;

use chrono::{Months, NaiveDate};

use crate::error::StockCatError;
use crate::series::{window_recent_years, RevenuePoint};

/// Lookback window in whole years. Only these options are offered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    OneYear = 1,
    ThreeYears = 3,
    #[default]
    FiveYears = 5,
    EightYears = 8,
}

impl TimeRange {
    /// Longest supported lookback.
    pub const MAX: TimeRange = TimeRange::EightYears;

    /// Every option, shortest first.
    pub fn all() -> &'static [TimeRange] {
        &[
            TimeRange::OneYear,
            TimeRange::ThreeYears,
            TimeRange::FiveYears,
            TimeRange::EightYears,
        ]
    }

    pub fn years(self) -> u32 {
        self as u32
    }

    pub fn months(self) -> usize {
        self.years() as usize * 12
    }

    /// Selector label, e.g. `近5年`.
    pub fn label(self) -> String {
        format!("近{}年", self.years())
    }

    /// The trailing part of a sorted series covered by this range.
    pub fn window(self, series: &[RevenuePoint]) -> &[RevenuePoint] {
        window_recent_years(series, self.years())
    }

    /// Date range to request from the source: `years + 1` years ending
    /// `today`. The extra year is the YoY base for the earliest shown month.
    /// A Feb 29 start clamps to Feb 28.
    pub fn fetch_window(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = today
            .checked_sub_months(Months::new((self.years() + 1) * 12))
            .unwrap_or(NaiveDate::MIN);
        (start, today)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}y", self.years())
    }
}

impl TryFrom<u32> for TimeRange {
    type Error = StockCatError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        match years {
            1 => Ok(TimeRange::OneYear),
            3 => Ok(TimeRange::ThreeYears),
            5 => Ok(TimeRange::FiveYears),
            8 => Ok(TimeRange::EightYears),
            _ => Err(StockCatError::InvalidInput(format!(
                "unsupported time range {} years. Valid: 1, 3, 5, 8",
                years
            ))),
        }
    }
}

impl FromStr for TimeRange {
    type Err = StockCatError;

    /// Accepts `5` or `5y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix(['y', 'Y']).unwrap_or(trimmed);
        let years = digits.parse::<u32>().map_err(|_| {
            StockCatError::InvalidInput(format!(
                "invalid time range '{}'. Valid: 1, 3, 5, 8",
                s
            ))
        })?;
        TimeRange::try_from(years)
    }
}
