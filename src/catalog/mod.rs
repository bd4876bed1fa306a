//! Ticker catalog: every company the provider knows about.

use crate::core::pages::fetch_single;
use crate::core::{CacheKey, CacheMode, SfClient, SfError, Table};
use crate::project::columns::TICKER;

/// Fetches the full company list as a table (`SimFinId`, `Ticker`, ...).
///
/// # Errors
///
/// Returns `SfError` if the request fails or the body is not a company list.
pub async fn companies(client: &SfClient) -> Result<Table, SfError> {
    CatalogBuilder::new(client).fetch().await
}

/// Fetches the known tickers, in provider order, without duplicates.
///
/// # Errors
///
/// Returns `SfError` if the request fails, the body is malformed, or the list has no `Ticker` column.
pub async fn tickers(client: &SfClient) -> Result<Vec<String>, SfError> {
    CatalogBuilder::new(client).tickers().await
}

/// A builder for the company list request.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    client: SfClient,
    cache_mode: CacheMode,
}

impl CatalogBuilder {
    /// Creates a new `CatalogBuilder`.
    #[must_use]
    pub fn new(client: &SfClient) -> Self {
        Self {
            client: client.clone(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `SfError` if the request fails or the body is not a company list.
    /// A failure is never turned into an empty catalog.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Table, SfError> {
        let key = CacheKey::Catalog;
        if self.cache_mode == CacheMode::Use
            && let Some(t) = self.client.cache_get(&key).await
        {
            #[cfg(feature = "tracing")]
            tracing::debug!("company list served from cache");
            return Ok(t);
        }

        let mut url = self.client.companies_url().clone();
        self.client.sign(&mut url)?;
        let table = fetch_single(&self.client, &url, "companies_list", "all").await?;

        if self.cache_mode != CacheMode::Bypass {
            self.client.cache_put(key, &table).await;
        }
        Ok(table)
    }

    /// Executes the request and returns just the tickers.
    ///
    /// # Errors
    ///
    /// As [`fetch`](Self::fetch), plus `SfError::MissingColumn` if the list has no `Ticker` column.
    pub async fn tickers(self) -> Result<Vec<String>, SfError> {
        let table = self.fetch().await?;
        if !table.has_column(TICKER) {
            return Err(SfError::MissingColumn(TICKER.to_string()));
        }
        Ok(table.unique(TICKER))
    }
}
