//! Stock directory records from the `TaiwanStockInfo` dataset.

use serde::{Deserialize, Serialize};

/// Ticker identifier, e.g. `"2330"`. Listed equities use purely numeric ids;
/// warrants, ETNs and indices may not.
pub type StockID = String;

/// Basic listing information for a stock.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StockInfo {
    /// Date of the directory snapshot.
    #[serde(default)]
    pub date: String,

    pub stock_id: StockID,

    pub stock_name: String,

    #[serde(default)]
    pub industry_category: String,

    /// Listing market: `twse`, `tpex`, `emerging`, ...
    #[serde(rename = "type", default)]
    pub market: String,
}
