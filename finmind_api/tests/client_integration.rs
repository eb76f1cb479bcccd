use finmind_api::{Client, Error, MonthRevenueQuery, Query, StockInfoQuery, USER_AGENT};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_month_revenue_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("month_revenue.json");

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(query_param("dataset", "TaiwanStockMonthRevenue"))
        .and(query_param("data_id", "2867"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client
        .get_month_revenue(&MonthRevenueQuery::for_stock("2867"))
        .await;
    assert!(result.is_ok());

    let data = result.unwrap().into_data().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0].revenue, 382000);
    assert_eq!(data[0].revenue_year, 2022);
}

#[tokio::test]
async fn get_month_revenue_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client
        .get_month_revenue(&MonthRevenueQuery::for_stock("2867"))
        .await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        _ => panic!("expected HttpStatus error"),
    }
}

#[tokio::test]
async fn get_month_revenue_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client
        .get_month_revenue(&MonthRevenueQuery::for_stock("2867"))
        .await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}

#[tokio::test]
async fn get_month_revenue_envelope_error() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("error_status.json");

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client
        .get_month_revenue(&MonthRevenueQuery::for_stock("2867"))
        .await
        .unwrap();
    match resp.into_data() {
        Err(Error::Api { status, msg }) => {
            assert_eq!(status, 402);
            assert!(msg.contains("upper limit"));
        }
        _ => panic!("expected Api error"),
    }
}

#[tokio::test]
async fn get_stock_info_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("stock_info.json");

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(query_param("dataset", "TaiwanStockInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let data = client
        .get_stock_info(&StockInfoQuery::default())
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data[0].stock_name, "三商壽");
    assert_eq!(data[0].market, "twse");
}

#[tokio::test]
async fn token_is_sent_as_query_param() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("stock_info.json");

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(query_param("token", "my-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).with_token("my-token");
    let result = client
        .get_stock_info(&StockInfoQuery::default().with_data_id("2867"))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn fixed_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("stock_info.json");

    Mock::given(method("GET"))
        .and(path("/data"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_stock_info(&StockInfoQuery::default()).await;
    assert!(result.is_ok());
    assert!(USER_AGENT.starts_with("stockcat/"));
}
