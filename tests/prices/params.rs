use httpmock::Method::GET;
use simfin_rs::{Cell, PricesBuilder, SfError};

use crate::common::{KEY, client, fixture, setup_server};

#[tokio::test]
async fn prices_send_date_bounds_and_ratios() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/prices")
            .query_param("ticker", "AAPL,MSFT")
            .query_param("ratios", "true")
            .query_param("start", "2020-01-01")
            .query_param("end", "2021-12-31")
            .query_param("api-key", KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("prices", "AAPL-MSFT", "json"));
    });

    let table = PricesBuilder::new(&client(&server), ["AAPL", "MSFT"])
        .year_start(2020)
        .year_end(2021)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(table.len(), 6);
    assert_eq!(table.unique("Ticker"), vec!["AAPL", "MSFT"]);
    assert_eq!(table.get(0, "Dividend"), Some(&Cell::Null));
    assert_eq!(table.get(3, "Adj. Close"), Some(&Cell::Number(155.93)));
}

#[tokio::test]
async fn ratios_can_be_turned_off() {
    let server = setup_server();
    let without = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/prices")
            .query_param_missing("ratios");
        then.status(200).body("[]");
    });

    PricesBuilder::new(&client(&server), ["AAPL"])
        .ratios(false)
        .fetch()
        .await
        .unwrap();
    without.assert_calls(1);
}

#[tokio::test]
async fn not_found_is_reported() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/prices");
        then.status(404);
    });

    let err = PricesBuilder::new(&client(&server), ["AAPL"])
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, SfError::NotFound { .. }));
}

#[tokio::test]
async fn html_instead_of_json_is_a_decode_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/prices");
        then.status(200).body("<html>maintenance</html>");
    });

    let err = PricesBuilder::new(&client(&server), ["AAPL"])
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, SfError::Json(_)));
}
