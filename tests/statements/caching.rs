use httpmock::Method::GET;
use simfin_rs::{CacheMode, Statement, StatementsBuilder};

use crate::common::{cached_client, client, fixture, setup_server};

#[tokio::test]
async fn repeated_request_is_served_from_cache() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("statements_derived", "AAPL", "json"));
    });

    let builder = StatementsBuilder::new(&cached_client(&server), ["AAPL"])
        .statement(Statement::Derived)
        .year_start(2019)
        .year_end(2020);

    let first = builder.clone().fetch().await.unwrap();
    mock.assert_calls(1);
    let second = builder.clone().fetch().await.unwrap();
    mock.assert_calls(1);
    assert_eq!(first, second);

    // different parameters are a different entry
    builder.clone().year_start(2018).fetch().await.unwrap();
    mock.assert_calls(2);
}

#[tokio::test]
async fn refresh_refetches_and_bypass_skips_the_cache() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200)
            .body(fixture("statements_derived", "AAPL", "json"));
    });

    let c = cached_client(&server);
    let builder = StatementsBuilder::new(&c, ["AAPL"]).statement(Statement::Derived);

    builder.clone().fetch().await.unwrap();
    mock.assert_calls(1);

    builder
        .clone()
        .cache_mode(CacheMode::Refresh)
        .fetch()
        .await
        .unwrap();
    mock.assert_calls(2);

    builder
        .clone()
        .cache_mode(CacheMode::Bypass)
        .fetch()
        .await
        .unwrap();
    mock.assert_calls(3);

    builder.fetch().await.unwrap();
    mock.assert_calls(3);
    assert_eq!(c.cache().unwrap().len().await, 1);
}

#[tokio::test]
async fn without_a_cache_every_call_hits_the_network() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body("[]");
    });

    let builder = StatementsBuilder::new(&client(&server), ["AAPL"]);
    builder.clone().fetch().await.unwrap();
    builder.fetch().await.unwrap();
    mock.assert_calls(2);
}
