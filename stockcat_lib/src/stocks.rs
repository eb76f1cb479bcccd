//! Stock directory filtering and search.
//!
//! The `TaiwanStockInfo` directory lists every instrument FinMind knows about,
//! once per snapshot date and listing market. These helpers reduce it to one
//! record per listed equity and search it the way the search box does.

use std::collections::HashSet;

use finmind_api::types::StockInfo;

/// Listed equities have purely numeric ids (`2330`, `00878`). Indices,
/// warrants and foreign listings do not.
pub fn is_listed_stock_id(stock_id: &str) -> bool {
    !stock_id.is_empty() && stock_id.bytes().all(|b| b.is_ascii_digit())
}

/// Keeps numeric-id stocks only and drops repeated ids. The first record for
/// an id wins and directory order is preserved.
pub fn unique_listed_stocks(stocks: Vec<StockInfo>) -> Vec<StockInfo> {
    let mut seen: HashSet<String> = HashSet::new();
    stocks
        .into_iter()
        .filter(|s| is_listed_stock_id(&s.stock_id))
        .filter(|s| seen.insert(s.stock_id.clone()))
        .collect()
}

/// Finds stocks by id or name, case-insensitively.
///
/// Exact id matches rank first, then id prefixes, then name substrings.
/// Within a rank the directory order is kept. A blank term returns the head
/// of the directory.
pub fn search_stocks<'a>(stocks: &'a [StockInfo], term: &str, limit: usize) -> Vec<&'a StockInfo> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return stocks.iter().take(limit).collect();
    }

    let mut ranked: Vec<(u8, &StockInfo)> = stocks
        .iter()
        .filter_map(|s| match_rank(s, &needle).map(|rank| (rank, s)))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().take(limit).map(|(_, s)| s).collect()
}

fn match_rank(stock: &StockInfo, needle: &str) -> Option<u8> {
    let id = stock.stock_id.to_lowercase();
    if id == needle {
        Some(0)
    } else if id.starts_with(needle) {
        Some(1)
    } else if stock.stock_name.to_lowercase().contains(needle) {
        Some(2)
    } else {
        None
    }
}
