use httpmock::Method::GET;
use simfin_rs::{ErrorKind, SfClient, SfError, StatementsBuilder, ValidationError};
use url::Url;

use crate::common::{KEY, client, setup_server};

#[tokio::test]
async fn server_errors_carry_a_redacted_url() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(500).body("oops");
    });

    let err = StatementsBuilder::new(&client(&server), ["AAPL"])
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match err {
        SfError::ServerError { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/api/v2/companies/statements"));
            assert!(!url.contains(KEY));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn status_codes_map_to_variants() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/statements")
            .query_param("ticker", "LIMIT");
        then.status(429);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/statements")
            .query_param("ticker", "DENIED");
        then.status(403);
    });

    let c = client(&server);
    let limited = StatementsBuilder::new(&c, ["LIMIT"]).fetch().await.unwrap_err();
    assert!(matches!(limited, SfError::RateLimited { .. }));

    let denied = StatementsBuilder::new(&c, ["DENIED"]).fetch().await.unwrap_err();
    assert!(matches!(denied, SfError::Status { status: 403, .. }));
    assert_eq!(denied.kind(), ErrorKind::Fetch);
}

#[tokio::test]
async fn provider_error_object_is_an_error() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body(r#"{"error": "Invalid API key"}"#);
    });

    let err = StatementsBuilder::new(&client(&server), ["AAPL"])
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, SfError::Api(ref m) if m == "Invalid API key"));
}

#[tokio::test]
async fn invalid_requests_never_reach_the_network() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body("[]");
    });
    let c = client(&server);

    let many: Vec<String> = (0..11).map(|i| format!("T{i}")).collect();
    let err = StatementsBuilder::new(&c, many).fetch().await.unwrap_err();
    assert!(matches!(
        err,
        SfError::Validation(ValidationError::TooManyTickers { count: 11, max: 10 })
    ));

    let err = StatementsBuilder::new(&c, ["AAPL"])
        .year_start(2021)
        .year_end(2019)
        .fetch()
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = StatementsBuilder::new(&c, Vec::<String>::new())
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, SfError::Validation(ValidationError::NoTickers)));

    mock.assert_calls(0);
}

#[tokio::test]
async fn a_client_without_key_fails_before_sending() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/statements");
        then.status(200).body("[]");
    });
    let c = SfClient::builder()
        .base_url(Url::parse(&format!("{}/api/v2/", server.base_url())).unwrap())
        .build()
        .unwrap();

    let err = StatementsBuilder::new(&c, ["AAPL"]).fetch().await.unwrap_err();
    assert!(matches!(err, SfError::MissingApiKey(_)));
    mock.assert_calls(0);
}

#[tokio::test]
async fn transport_errors_never_carry_the_key() {
    // nothing listens on the discard port
    let c = SfClient::builder()
        .base_url(Url::parse("http://127.0.0.1:9/api/v2/").unwrap())
        .api_key("SUPERSECRETKEY")
        .build()
        .unwrap();

    let err = StatementsBuilder::new(&c, ["AAPL"]).fetch().await.unwrap_err();
    assert!(matches!(err, SfError::Http(_)));
    assert_eq!(err.kind(), ErrorKind::Fetch);

    let shown = err.to_string();
    assert!(!shown.contains("SUPERSECRETKEY"), "{shown}");
    assert!(shown.contains("/api/v2/companies/statements"), "{shown}");
    assert!(!format!("{err:?}").contains("SUPERSECRETKEY"));
}
