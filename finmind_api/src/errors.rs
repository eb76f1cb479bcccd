//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success HTTP status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The HTTP call succeeded but the FinMind envelope reported a failure.
    #[error("API returned status {status}: {msg}")]
    Api { status: i64, msg: String },
    /// The envelope reported success but carried no `data` array.
    #[error("Response carried no data")]
    MissingData,
}
