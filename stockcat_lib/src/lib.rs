//! Library layer for StockCat: monthly revenue series, stock directory
//! helpers, and a cached FinMind client.
//!
//! The revenue transformation in [`series`] is pure. Everything that talks to
//! the network goes through [`CachedClient`], which wraps the `finmind_api`
//! crate with envelope validation, an in-memory TTL cache and retries.

pub mod analysis;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod series;
pub mod stocks;
pub mod time_range;
pub mod validation;

pub use finmind_api;
pub use finmind_api::types;

pub use client::CachedClient;
pub use config::{Config, RetryConfig};
pub use error::StockCatError;
pub use series::{build_series, window_recent_years, MalformedDateError, RevenuePoint};
pub use time_range::TimeRange;
