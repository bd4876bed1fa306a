use httpmock::Method::GET;
use simfin_rs::{Dashboard, ErrorKind, Preset, Query, SfError, ValidationError};

use crate::common::{client, setup_server};

#[tokio::test]
async fn eleven_tickers_are_rejected_before_any_request() {
    let server = setup_server();
    let statements = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body("[]");
    });
    let prices = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/prices");
        then.status(200).body("[]");
    });

    let dash = Dashboard::new(client(&server));
    let tickers: Vec<String> = (0..11).map(|i| format!("T{i}")).collect();
    let query = Query::new(tickers, 2019, 2020);

    let err = dash.fundamentals(&query).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("up to 10 tickers"));
    assert!(dash.prices(&query).await.is_err());

    statements.assert_calls(0);
    prices.assert_calls(0);
}

#[tokio::test]
async fn inverted_years_are_rejected_before_any_request() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body("[]");
    });

    let dash = Dashboard::new(client(&server));
    let err = dash
        .fundamentals(&Query::from_preset(Preset::BigTech, 2021, 2019))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SfError::Validation(ValidationError::InvertedYears { start: 2021, end: 2019 })
    ));
    mock.assert_calls(0);
}

#[tokio::test]
async fn a_failed_fetch_is_scoped_to_that_query() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/statements")
            .query_param("ticker", "BAD");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/statements")
            .query_param("ticker", "AAPL");
        then.status(200).body("[]");
    });

    let dash = Dashboard::new(client(&server));
    let err = dash
        .fundamentals(&Query::new(["BAD"], 2019, 2020))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Fetch);

    let view = dash
        .fundamentals(&Query::new(["AAPL"], 2019, 2020))
        .await
        .unwrap();
    assert!(view.is_empty());
}
