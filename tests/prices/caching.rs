use httpmock::Method::GET;
use simfin_rs::PricesBuilder;

use crate::common::{cached_client, fixture, setup_server};

#[tokio::test]
async fn ratio_flag_is_part_of_the_cache_key() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/companies/prices");
        then.status(200)
            .body(fixture("prices", "AAPL-MSFT", "json"));
    });

    let builder = PricesBuilder::new(&cached_client(&server), ["AAPL", "MSFT"])
        .year_start(2020)
        .year_end(2020);

    builder.clone().fetch().await.unwrap();
    builder.clone().fetch().await.unwrap();
    mock.assert_calls(1);

    builder.ratios(false).fetch().await.unwrap();
    mock.assert_calls(2);
}
