use crate::core::pages::fetch_paged;
use crate::core::{CacheKey, CacheMode, FiscalYears, SchemaPolicy, SfClient, SfError, Table};

pub(super) async fn fetch_prices(
    client: &SfClient,
    tickers: &[String],
    ratios: bool,
    years: FiscalYears,
    cache_mode: CacheMode,
    policy: SchemaPolicy,
) -> Result<Table, SfError> {
    let key = CacheKey::Prices {
        tickers: tickers.to_vec(),
        ratios,
        years,
    };
    if cache_mode == CacheMode::Use
        && let Some(t) = client.cache_get(&key).await
    {
        #[cfg(feature = "tracing")]
        tracing::debug!("prices served from cache");
        return Ok(t);
    }

    let joined = tickers.join(",");
    let mut url = client.prices_url().clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("ticker", &joined);
        if ratios {
            qp.append_pair("ratios", "true");
        }
        qp.append_pair("start", &years.first_day());
        qp.append_pair("end", &years.last_day());
    }
    client.sign(&mut url)?;

    let table = fetch_paged(client, &url, "prices", &joined, policy).await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = table.len(), columns = table.width(), "prices assembled");

    if cache_mode != CacheMode::Bypass {
        client.cache_put(key, &table).await;
    }
    Ok(table)
}
