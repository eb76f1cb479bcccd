//! Caching and retrying wrapper around the FinMind client.

use chrono::NaiveDate;
use finmind_api::types::{MonthRevenue, StockInfo};
use finmind_api::{Client, MonthRevenueQuery, Query, StockInfoQuery};

use crate::cache::MemoryCache;
use crate::config::{Config, RetryConfig};
use crate::error::StockCatError;
use crate::series::{build_series, RevenuePoint};
use crate::stocks::unique_listed_stocks;
use crate::time_range::TimeRange;

/// API client wrapper that validates FinMind envelopes, caches successful
/// results in memory, and retries transient failures with backoff.
///
/// Cache hits bypass the network entirely. Only validated data is cached, so
/// an envelope error is reported again on the next call.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
    retry: RetryConfig,
}

impl CachedClient {
    /// Creates an anonymous cached client using the production API URL.
    pub fn new(cache: MemoryCache) -> Self {
        Self {
            inner: Client::new(),
            cache,
            retry: RetryConfig::default(),
        }
    }

    /// Creates a cached client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, cache: MemoryCache) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            cache,
            retry: RetryConfig::default(),
        }
    }

    /// Builds a client from environment-derived settings.
    pub fn from_config(config: &Config) -> Self {
        let inner = match &config.api_url {
            Some(url) => Client::with_base_url(url),
            None => Client::new(),
        };
        let inner = match &config.token {
            Some(token) => inner.with_token(token),
            None => inner,
        };
        Self {
            inner,
            cache: MemoryCache::new(config.cache_ttl),
            retry: config.retry.clone(),
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    async fn with_retry<T, F, Fut>(&self, label: &str, mut f: F) -> Result<T, StockCatError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, StockCatError>>,
    {
        let mut attempt = 0usize;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt > self.retry.max_retries || !is_retryable(&err) {
                        return Err(err);
                    }
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{} request failed (attempt {}/{}), retrying in {:.1}s",
                        label,
                        attempt,
                        self.retry.max_retries,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Fetches the raw monthly revenue records needed to show `range` as of
    /// `today`: `range.years() + 1` years of history, in source order.
    pub async fn month_revenue(
        &self,
        stock_id: &str,
        range: TimeRange,
        today: NaiveDate,
    ) -> Result<Vec<MonthRevenue>, StockCatError> {
        let (start, end) = range.fetch_window(today);
        let cache_key = format!("revenue:{}:{}:{}", stock_id, start, end);

        if let Some(records) = self.cache.get_json::<Vec<MonthRevenue>>(&cache_key)? {
            tracing::debug!("cache hit for {}", cache_key);
            return Ok(records);
        }

        let query = MonthRevenueQuery::for_stock(stock_id).with_date_range(start, end);
        let records = self
            .with_retry("revenue", || async {
                Ok(self.inner.get_month_revenue(&query).await?.into_data()?)
            })
            .await?;
        self.cache.set_json(cache_key, &records);
        Ok(records)
    }

    /// Fetches, transforms and windows the revenue series for one ticker.
    pub async fn revenue_series(
        &self,
        stock_id: &str,
        range: TimeRange,
        today: NaiveDate,
    ) -> Result<Vec<RevenuePoint>, StockCatError> {
        let records = self.month_revenue(stock_id, range, today).await?;
        let series = build_series(&records)?;
        Ok(range.window(&series).to_vec())
    }

    /// Fetches the directory record for one ticker. The first record returned
    /// is used; an empty result is [`StockCatError::NotFound`].
    pub async fn stock_info(&self, stock_id: &str) -> Result<StockInfo, StockCatError> {
        let cache_key = format!("stock_info:{}", stock_id);

        if let Some(info) = self.cache.get_json::<StockInfo>(&cache_key)? {
            tracing::debug!("cache hit for {}", cache_key);
            return Ok(info);
        }

        let query = StockInfoQuery::default().with_data_id(stock_id);
        let records = self
            .with_retry("stock info", || async {
                Ok(self.inner.get_stock_info(&query).await?.into_data()?)
            })
            .await?;
        let info = records
            .into_iter()
            .next()
            .ok_or_else(|| StockCatError::NotFound(format!("no stock info for '{}'", stock_id)))?;
        self.cache.set_json(cache_key, &info);
        Ok(info)
    }

    /// Fetches the whole directory, reduced to one record per listed stock.
    pub async fn stock_list(&self) -> Result<Vec<StockInfo>, StockCatError> {
        let cache_key = "stock_list".to_string();

        if let Some(list) = self.cache.get_json::<Vec<StockInfo>>(&cache_key)? {
            tracing::debug!("cache hit for {}", cache_key);
            return Ok(list);
        }

        let query = StockInfoQuery::default();
        let records = self
            .with_retry("stock list", || async {
                Ok(self.inner.get_stock_info(&query).await?.into_data()?)
            })
            .await?;
        let list = unique_listed_stocks(records);
        self.cache.set_json(cache_key, &list);
        Ok(list)
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

fn is_retryable(err: &StockCatError) -> bool {
    match err {
        StockCatError::Api(api_err) => match api_err {
            finmind_api::Error::RequestFailed => true,
            finmind_api::Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            finmind_api::Error::Api { .. } | finmind_api::Error::MissingData => false,
        },
        _ => false,
    }
}
