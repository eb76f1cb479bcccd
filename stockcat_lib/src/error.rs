//! Error types for the library layer.

use std::fmt;

use crate::series::MalformedDateError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding data, cache, serialization, and input validation failures.
#[derive(Debug)]
pub enum StockCatError {
    /// An error from the underlying API client, including envelope failures.
    Api(finmind_api::Error),
    /// A revenue record carried an unparseable date.
    MalformedDate(MalformedDateError),
    /// The API answered successfully but had no record for the request.
    NotFound(String),
    /// A cache operation failed (e.g. deserialization of cached data).
    Cache(String),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for StockCatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::MalformedDate(e) => write!(f, "Data error: {}", e),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Cache(msg) => write!(f, "Cache error: {}", msg),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for StockCatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::MalformedDate(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<finmind_api::Error> for StockCatError {
    fn from(e: finmind_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<MalformedDateError> for StockCatError {
    fn from(e: MalformedDateError) -> Self {
        Self::MalformedDate(e)
    }
}

impl From<serde_json::Error> for StockCatError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
