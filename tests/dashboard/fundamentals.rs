use httpmock::Method::GET;
use simfin_rs::{Cell, Dashboard, Query, SfError, Statement};

use crate::common::{cached_client, fixture, setup_server};

#[tokio::test]
async fn derived_ratios_for_one_ticker_end_to_end() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/statements")
            .query_param("statement", "derived")
            .query_param("ticker", "AAPL")
            .query_param("fyear", "2019,2020");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("statements_derived", "AAPL", "json"));
    });

    let dash = Dashboard::new(cached_client(&server));
    let query = Query::new(["AAPL"], 2019, 2020).statement(Statement::Derived);
    let view = dash.fundamentals(&query).await.unwrap();
    mock.assert();

    assert_eq!(view.raw.len(), 8);
    assert_eq!(view.projected.len(), 8);
    assert_eq!(view.projected.index_name(), Some("Publish Date"));
    assert!(!view.projected.has_column("SimFinId"));
    assert!(!view.projected.has_column("Restated Date"));
    assert!(!view.projected.has_column("Earnings Per Share, Basic"));

    assert_eq!(view.indicators.first().map(String::as_str), Some("EBITDA"));
    assert_eq!(view.indicators.last().map(String::as_str), Some("Piotroski F-Score"));
    assert_eq!(view.indicators.len(), 11);
    for base in ["Ticker", "Fiscal Year", "Fiscal Period", "Publish Date", "Report Date"] {
        assert!(!view.indicators.iter().any(|i| i == base));
    }

    let chart = view.line_chart("Net Profit Margin").unwrap();
    assert_eq!(chart.visible_categories(), ["AAPL"]);
    assert_eq!(chart.figure.reference_line(), Some(0.0));
    assert_eq!(
        chart.figure.x_range(),
        Some(&[
            Cell::Text("2018-12-31".into()),
            Cell::Text("2020-09-30".into())
        ])
    );

    // same query again comes from the cache
    dash.fundamentals(&query).await.unwrap();
    mock.assert_calls(1);
}

#[tokio::test]
async fn unknown_indicator_is_rejected() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200)
            .body(fixture("statements_derived", "AAPL", "json"));
    });

    let dash = Dashboard::new(cached_client(&server));
    let view = dash
        .fundamentals(&Query::new(["AAPL"], 2019, 2020).statement(Statement::Derived))
        .await
        .unwrap();
    assert!(matches!(
        view.line_chart("Report Date"),
        Err(SfError::UnknownIndicator(_))
    ));
}

#[tokio::test]
async fn no_data_gives_an_empty_view() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body(r#"[{"found": false}]"#);
    });

    let dash = Dashboard::new(cached_client(&server));
    let view = dash
        .fundamentals(&Query::new(["ZZZZ"], 2019, 2020))
        .await
        .unwrap();
    assert!(view.is_empty());
    assert!(view.indicators.is_empty());
}
