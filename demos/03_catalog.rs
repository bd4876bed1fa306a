use std::time::Duration;

use simfin_rs::{CatalogBuilder, SfClient, TableCache};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    simfin_rs::init_tracing();

    let client = SfClient::builder()
        .api_key_from_env(simfin_rs::core::client::API_KEY_ENV)
        .timeout(Duration::from_secs(30))
        .cache(TableCache::new())
        .build()?;

    let tickers = CatalogBuilder::new(&client).tickers().await?;
    println!("{} tickers, first ten: {:?}", tickers.len(), &tickers[..tickers.len().min(10)]);

    // Second call is answered by the cache.
    let again = CatalogBuilder::new(&client).tickers().await?;
    assert_eq!(tickers, again);
    Ok(())
}
