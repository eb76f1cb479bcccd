//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`Dataset`].

use chrono::NaiveDate;
use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for the ticker and date filters.
pub trait Query {
    /// The FinMind dataset this query targets.
    fn dataset(&self) -> Dataset;

    /// Returns a shared reference to the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("dataset", &self.dataset().to_string());
        self.common().add_to_url(&url)
    }

    /// Restricts the query to a single ticker.
    fn with_data_id(mut self, data_id: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().data_id = Some(data_id.to_string());
        self
    }

    /// Sets the first date (inclusive) of the requested range.
    fn with_start_date(mut self, start_date: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_common().start_date = Some(start_date);
        self
    }

    /// Sets the last date (inclusive) of the requested range.
    fn with_end_date(mut self, end_date: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_common().end_date = Some(end_date);
        self
    }

    /// Sets both ends of the requested range.
    fn with_date_range(self, start_date: NaiveDate, end_date: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.with_start_date(start_date).with_end_date(end_date)
    }
}

/// FinMind datasets used by this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    /// Monthly revenue per stock.
    TaiwanStockMonthRevenue,
    /// Stock directory: names, industries, listing market.
    TaiwanStockInfo,
}
impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Dataset::TaiwanStockMonthRevenue => "TaiwanStockMonthRevenue",
                Dataset::TaiwanStockInfo => "TaiwanStockInfo",
            }
        )?;
        Ok(())
    }
}

/// Fields shared by all query types: ticker and date range.
#[derive(Clone, Debug, Default)]
pub struct QueryCommon {
    /// Ticker filter. `None` requests every stock in the dataset.
    pub data_id: Option<String>,
    /// First date of the range, inclusive.
    pub start_date: Option<NaiveDate>,
    /// Last date of the range, inclusive.
    pub end_date: Option<NaiveDate>,
}

impl QueryCommon {
    /// Appends the ticker and date parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(data_id) = &self.data_id {
            url.query_pairs_mut().append_pair("data_id", data_id);
        };
        if let Some(start_date) = self.start_date {
            url.query_pairs_mut()
                .append_pair("start_date", &start_date.format("%Y-%m-%d").to_string());
        };
        if let Some(end_date) = self.end_date {
            url.query_pairs_mut()
                .append_pair("end_date", &end_date.format("%Y-%m-%d").to_string());
        };
        url
    }
}
