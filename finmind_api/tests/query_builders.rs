use chrono::NaiveDate;
use finmind_api::{Dataset, MonthRevenueQuery, Query, StockInfoQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/data").unwrap()
}

#[test]
fn month_revenue_query_defaults() {
    let url = MonthRevenueQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert_eq!(query, "dataset=TaiwanStockMonthRevenue");
}

#[test]
fn month_revenue_query_with_dates() {
    let url = MonthRevenueQuery::for_stock("2330")
        .with_start_date(NaiveDate::from_ymd_opt(2020, 1, 5).unwrap())
        .with_end_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("data_id=2330"));
    assert!(query.contains("start_date=2020-01-05"));
    assert!(query.contains("end_date=2025-12-31"));
}

#[test]
fn stock_info_query_without_ticker() {
    let url = StockInfoQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("dataset=TaiwanStockInfo"));
    assert!(!query.contains("data_id"));
}

#[test]
fn data_id_is_url_encoded() {
    let url = StockInfoQuery::default()
        .with_data_id("00 & 1")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("data_id=00+%26+1"));
}

#[test]
fn dataset_display_matches_api_names() {
    assert_eq!(Dataset::TaiwanStockMonthRevenue.to_string(), "TaiwanStockMonthRevenue");
    assert_eq!(Dataset::TaiwanStockInfo.to_string(), "TaiwanStockInfo");
}
