use httpmock::Method::GET;
use simfin_rs::{Cell, SchemaPolicy, SfError, StatementsBuilder};

use crate::common::{client, setup_server};

const MIXED: &str = r#"[
    {"found": true, "columns": ["Ticker", "Publish Date", "Revenue"], "data": [["AAPL", "2020-05-01", 58313000000]]},
    {"found": false},
    {"found": true, "columns": ["Ticker", "Publish Date", "Revenue"], "data": []},
    {"found": true, "columns": ["Ticker", "Publish Date", "Revenue"], "data": [["MSFT", "2020-04-29", 35021000000]]}
]"#;

#[tokio::test]
async fn missing_and_empty_pages_are_skipped() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body(MIXED);
    });

    let table = StatementsBuilder::new(&client(&server), ["AAPL", "ZZZZ", "NODATA", "MSFT"])
        .year_start(2020)
        .year_end(2020)
        .fetch()
        .await
        .unwrap();

    assert_eq!(table.columns(), ["Ticker", "Publish Date", "Revenue"]);
    assert_eq!(table.unique("Ticker"), vec!["AAPL", "MSFT"]);
    assert_eq!(table.get(1, "Revenue"), Some(&Cell::Number(35_021_000_000.0)));
}

#[tokio::test]
async fn nothing_found_is_empty_not_an_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body(r#"[{"found": false}, {"found": false}]"#);
    });

    let table = StatementsBuilder::new(&client(&server), ["ZZZZ", "YYYY"])
        .fetch()
        .await
        .unwrap();
    assert!(table.is_empty());
    assert_eq!(table.width(), 0);
}

#[tokio::test]
async fn strict_schema_policy_rejects_drifting_pages() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body(
            r#"[
            {"found": true, "columns": ["Ticker", "Revenue"], "data": [["AAPL", 1]]},
            {"found": true, "columns": ["Ticker", "Net Income"], "data": [["MSFT", 2]]}
        ]"#,
        );
    });

    let builder = StatementsBuilder::new(&client(&server), ["AAPL", "MSFT"]);
    let loose = builder.clone().fetch().await.unwrap();
    assert_eq!(loose.len(), 2);

    let err = builder
        .schema_policy(SchemaPolicy::Strict)
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, SfError::SchemaMismatch { page: 1, .. }));
}
