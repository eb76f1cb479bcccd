use std::time::Duration;

use chrono::NaiveDate;
use serde_json::json;
use stockcat_lib::cache::MemoryCache;
use stockcat_lib::{CachedClient, RetryConfig, StockCatError, TimeRange};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
}

fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_retries: 2,
        base_delay_ms: 1,
        max_delay_ms: 5,
    }
}

fn client(server: &MockServer) -> CachedClient {
    CachedClient::with_base_url(&server.uri(), MemoryCache::new(Duration::from_secs(60)))
        .with_retry_config(fast_retry())
}

fn revenue_record(year: i32, month: u32, revenue: i64) -> serde_json::Value {
    json!({
        "date": format!("{:04}-{:02}-01", year, month),
        "stock_id": "2867",
        "country": "Taiwan",
        "revenue": revenue,
        "revenue_month": month,
        "revenue_year": year
    })
}

/// 2018-01 through 2024-09, newest first, as the source sometimes returns.
fn revenue_body() -> serde_json::Value {
    let mut data = Vec::new();
    for year in (2018..=2024).rev() {
        let last_month = if year == 2024 { 9 } else { 12 };
        for month in (1..=last_month).rev() {
            data.push(revenue_record(year, month, 1_000_000 + (year as i64 - 2018) * 1000));
        }
    }
    json!({ "msg": "success", "status": 200, "data": data })
}

#[tokio::test]
async fn revenue_series_requests_extra_year_and_windows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(query_param("dataset", "TaiwanStockMonthRevenue"))
        .and(query_param("data_id", "2867"))
        .and(query_param("start_date", "2020-10-16"))
        .and(query_param("end_date", "2024-10-16"))
        .respond_with(ResponseTemplate::new(200).set_body_json(revenue_body()))
        .expect(1)
        .mount(&server)
        .await;

    let series = client(&server)
        .revenue_series("2867", TimeRange::ThreeYears, today())
        .await
        .unwrap();

    assert_eq!(series.len(), 36);
    assert_eq!(series.first().unwrap().period, "2021/10");
    assert_eq!(series.last().unwrap().period, "2024/09");
    assert!(series.windows(2).all(|w| w[0].period < w[1].period));
    let expected = (1_006_000.0 / 1_005_000.0 - 1.0) * 100.0;
    assert!((series.last().unwrap().yoy_growth_rate - expected).abs() < 1e-9);
}

#[tokio::test]
async fn revenue_is_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(revenue_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let first = client
        .month_revenue("2867", TimeRange::OneYear, today())
        .await
        .unwrap();
    let second = client
        .month_revenue("2867", TimeRange::OneYear, today())
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn transient_failure_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(revenue_body()))
        .mount(&server)
        .await;

    let records = client(&server)
        .month_revenue("2867", TimeRange::OneYear, today())
        .await
        .unwrap();
    assert!(!records.is_empty());
}

#[tokio::test]
async fn envelope_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": "Your level is register. Please update your user level.",
            "status": 400
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .month_revenue("2867", TimeRange::FiveYears, today())
        .await;
    match result {
        Err(StockCatError::Api(finmind_api::Error::Api { status, .. })) => assert_eq!(status, 400),
        _ => panic!("expected envelope error"),
    }
}

#[tokio::test]
async fn malformed_date_fails_series() {
    let server = MockServer::start().await;
    let mut bad = revenue_record(2024, 1, 10);
    bad["date"] = json!("2024/13/45");

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": "success",
            "status": 200,
            "data": [revenue_record(2023, 12, 5), bad]
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .revenue_series("2867", TimeRange::OneYear, today())
        .await;
    match result {
        Err(StockCatError::MalformedDate(e)) => assert_eq!(e.date, "2024/13/45"),
        _ => panic!("expected malformed date error"),
    }
}

#[tokio::test]
async fn stock_info_takes_first_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(query_param("dataset", "TaiwanStockInfo"))
        .and(query_param("data_id", "2330"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": "success",
            "status": 200,
            "data": [
                {"industry_category": "半導體業", "stock_id": "2330", "stock_name": "台積電", "type": "twse", "date": "2024-05-06"},
                {"industry_category": "半導體業", "stock_id": "2330", "stock_name": "台積電(舊)", "type": "twse", "date": "2024-05-03"}
            ]
        })))
        .mount(&server)
        .await;

    let info = client(&server).stock_info("2330").await.unwrap();
    assert_eq!(info.stock_name, "台積電");
}

#[tokio::test]
async fn stock_info_empty_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msg": "success",
            "status": 200,
            "data": []
        })))
        .mount(&server)
        .await;

    let result = client(&server).stock_info("9999").await;
    assert!(matches!(result, Err(StockCatError::NotFound(_))));
}

#[tokio::test]
async fn stock_list_is_filtered_and_deduplicated() {
    let server = MockServer::start().await;
    let body = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../finmind_api/tests/fixtures/stock_info.json"
    ))
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let list = client(&server).stock_list().await.unwrap();
    let ids: Vec<&str> = list.iter().map(|s| s.stock_id.as_str()).collect();
    assert_eq!(ids, vec!["2867", "2330", "020000"]);
}
