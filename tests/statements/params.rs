use httpmock::Method::GET;
use simfin_rs::{Period, Statement, StatementsBuilder};

use crate::common::{KEY, client, fixture, setup_server};

#[tokio::test]
async fn statements_send_the_expected_query() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/statements")
            .query_param("statement", "derived")
            .query_param("ticker", "AAPL")
            .query_param("period", "quarters")
            .query_param("fyear", "2019,2020")
            .query_param("api-key", KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("statements_derived", "AAPL", "json"));
    });

    let table = StatementsBuilder::new(&client(&server), ["AAPL"])
        .statement(Statement::Derived)
        .year_start(2019)
        .year_end(2020)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(table.len(), 8);
    assert_eq!(table.unique("Ticker"), vec!["AAPL"]);
    assert_eq!(table.unique("Fiscal Year"), vec!["2019", "2020"]);
}

#[tokio::test]
async fn tickers_are_comma_joined_and_period_is_configurable() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/statements")
            .query_param("statement", "bs")
            .query_param("ticker", "AAPL,MSFT")
            .query_param("period", "fy")
            .query_param("fyear", "2018,2019,2020");
        then.status(200).body("[]");
    });

    let table = StatementsBuilder::new(&client(&server), ["AAPL", "MSFT"])
        .statement(Statement::BalanceSheet)
        .period(Period::FullYear)
        .year_start(2018)
        .year_end(2020)
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert!(table.is_empty());
}

#[tokio::test]
async fn setting_only_the_end_year_asks_for_two_years() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/statements")
            .query_param("fyear", "2015,2016");
        then.status(200).body("[]");
    });

    StatementsBuilder::new(&client(&server), ["AAPL"])
        .year_end(2016)
        .fetch()
        .await
        .unwrap();
    mock.assert();
}
