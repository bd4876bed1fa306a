use httpmock::Method::GET;
use simfin_rs::{Dashboard, Query, SpreadPreset};

use crate::common::{client, fixture, setup_server};

#[tokio::test]
async fn prices_view_offers_ratio_charts() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/companies/prices")
            .query_param("ticker", "AAPL,MSFT")
            .query_param("start", "2020-01-01")
            .query_param("end", "2020-12-31");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("prices", "AAPL-MSFT", "json"));
    });

    let dash = Dashboard::new(client(&server));
    let view = dash
        .prices(&Query::new(["AAPL", "MSFT"], 2020, 2020))
        .await
        .unwrap();
    mock.assert();

    assert_eq!(view.projected.index_name(), Some("Date"));
    assert_eq!(view.projected.width(), 18);
    assert!(!view.projected.has_column("Shares Outstanding"));
    assert_eq!(view.indicators.len(), 12);
    assert!(!view.indicators.iter().any(|i| i == "Adj. Close"));

    let altman = view.line_chart("Altman Z Score (ttm)").unwrap();
    assert_eq!(altman.figure.reference_line(), Some(3.0));
    assert_eq!(altman.visible_categories(), ["AAPL", "MSFT"]);
    assert_eq!(altman.figure.data[1].y[0], Some(6.89));

    let spreads: Vec<_> = view
        .spread_charts()
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(spreads[0].preset, SpreadPreset::EarningsAndRevenue);
    assert!(spreads[0].expanded);
    assert_eq!(spreads[0].visible_categories(), ["AAPL"]);
    // two indicators per ticker
    assert_eq!(spreads[0].figure.data.len(), 4);
    assert_eq!(spreads[0].figure.data[2].name, "MSFT, EV/Sales (ttm)");
}
