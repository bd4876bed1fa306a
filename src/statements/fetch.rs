use crate::core::pages::fetch_paged;
use crate::core::{CacheKey, CacheMode, FiscalYears, SchemaPolicy, SfClient, SfError, Table};

use super::{Period, Statement};

pub(super) async fn fetch_statements(
    client: &SfClient,
    tickers: &[String],
    statement: Statement,
    period: Period,
    years: FiscalYears,
    cache_mode: CacheMode,
    policy: SchemaPolicy,
) -> Result<Table, SfError> {
    let key = CacheKey::Statements {
        tickers: tickers.to_vec(),
        statement: statement.as_str(),
        period: period.as_str(),
        years,
    };
    if cache_mode == CacheMode::Use
        && let Some(t) = client.cache_get(&key).await
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(statement = statement.as_str(), "statements served from cache");
        return Ok(t);
    }

    let joined = tickers.join(",");
    let mut url = client.statements_url().clone();
    url.query_pairs_mut()
        .append_pair("statement", statement.as_str())
        .append_pair("ticker", &joined)
        .append_pair("period", period.as_str())
        .append_pair("fyear", &years.joined());
    client.sign(&mut url)?;

    let endpoint = format!("statements_{}", statement.as_str());
    let table = fetch_paged(client, &url, &endpoint, &joined, policy).await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = table.len(), columns = table.width(), "statements assembled");

    if cache_mode != CacheMode::Bypass {
        client.cache_put(key, &table).await;
    }
    Ok(table)
}
