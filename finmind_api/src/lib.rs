mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, USER_AGENT};
pub use self::errors::Error;
pub use self::query::{Dataset, MonthRevenueQuery, Query, QueryCommon, StockInfoQuery};
