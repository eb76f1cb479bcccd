//! HTTP client for the FinMind v4 data API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{MonthRevenueQuery, Query, StockInfoQuery},
    types::{ApiResponse, MonthRevenue, StockInfo},
    Error,
};

/// Production API root. Every dataset is served from `{root}/data`.
pub const DEFAULT_BASE_URL: &str = "https://api.finmindtrade.com/api/v4";

/// Sent with every request.
pub const USER_AGENT: &str = concat!("stockcat/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the FinMind v4 data API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
/// The API token, when set, is sent as the `token` query parameter; FinMind
/// serves anonymous requests at a lower rate limit.
pub struct Client {
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    token: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new anonymous client pointing at the production FinMind API.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attaches an API token. Blank tokens are ignored.
    pub fn with_token(mut self, token: &str) -> Self {
        let token = token.trim();
        self.token = if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        };
        self
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        let mut url = query.add_to_url(&url);
        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair("token", token);
        }
        Ok(url)
    }

    async fn get<T, Q>(&self, query: &Q) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url("/data", query)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "zh-TW,zh;q=0.9,en-US;q=0.8,en;q=0.7")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get dataset {}: {}", query.dataset(), e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<ApiResponse<T>>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches monthly revenue records matching the given query.
    ///
    /// The envelope is returned unvalidated; call [`ApiResponse::into_data`]
    /// to check the FinMind status.
    pub async fn get_month_revenue(
        &self,
        query: &MonthRevenueQuery,
    ) -> Result<ApiResponse<MonthRevenue>, Error> {
        self.get::<MonthRevenue, MonthRevenueQuery>(query).await
    }

    /// Fetches stock directory records matching the given query.
    pub async fn get_stock_info(
        &self,
        query: &StockInfoQuery,
    ) -> Result<ApiResponse<StockInfo>, Error> {
        self.get::<StockInfo, StockInfoQuery>(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
