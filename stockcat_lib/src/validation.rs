use crate::error::StockCatError;
use crate::time_range::TimeRange;

pub const MAX_SEARCH_LENGTH: usize = 50;
pub const MAX_STOCK_ID_LENGTH: usize = 10;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, StockCatError> {
    if input.len() > max_len {
        return Err(StockCatError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(StockCatError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search string for the stock directory.
pub fn validate_search(input: &str) -> Result<String, StockCatError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a ticker: trimmed, uppercased, ASCII alphanumeric only.
pub fn validate_stock_id(input: &str) -> Result<String, StockCatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StockCatError::InvalidInput(
            "stock id must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_STOCK_ID_LENGTH {
        return Err(StockCatError::InvalidInput(format!(
            "stock id '{}' exceeds {} characters",
            trimmed, MAX_STOCK_ID_LENGTH
        )));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(StockCatError::InvalidInput(format!(
            "stock id '{}' must contain only letters and digits (e.g. 2330)",
            trimmed
        )));
    }
    Ok(trimmed.to_uppercase())
}

/// Validate a time range given in years: 1, 3, 5 or 8.
pub fn validate_years(years: u32) -> Result<TimeRange, StockCatError> {
    TimeRange::try_from(years)
}

/// Validate a result limit: 1 to 500.
pub fn validate_limit(limit: usize) -> Result<usize, StockCatError> {
    if (1..=500).contains(&limit) {
        Ok(limit)
    } else {
        Err(StockCatError::InvalidInput(format!(
            "limit must be between 1 and 500, got {}",
            limit
        )))
    }
}
