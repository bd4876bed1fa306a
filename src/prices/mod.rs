//! Daily prices and valuation ratios for a basket of tickers.

mod fetch;

use crate::core::{CacheMode, FiscalYears, SchemaPolicy, SfClient, SfError, Table};
use fetch::fetch_prices;

/// A builder for fetching daily price and ratio rows.
///
/// Years are calendar years here: the request spans January 1st of the first
/// year through December 31st of the last. Defaults match [`StatementsBuilder`](crate::StatementsBuilder).
#[derive(Debug, Clone)]
pub struct PricesBuilder {
    client: SfClient,
    tickers: Vec<String>,
    ratios: bool,
    year_start: Option<i32>,
    year_end: Option<i32>,
    cache_mode: CacheMode,
    schema_policy: Option<SchemaPolicy>,
}

impl PricesBuilder {
    /// Creates a new `PricesBuilder` for the given tickers.
    pub fn new<I, S>(client: &SfClient, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client: client.clone(),
            tickers: tickers.into_iter().map(Into::into).collect(),
            ratios: true,
            year_start: None,
            year_end: None,
            cache_mode: CacheMode::Use,
            schema_policy: None,
        }
    }

    /// Sets whether valuation ratio columns are requested. (Default: `true`)
    #[must_use]
    pub const fn ratios(mut self, yes: bool) -> Self {
        self.ratios = yes;
        self
    }

    /// Sets the first year.
    #[must_use]
    pub const fn year_start(mut self, year: i32) -> Self {
        self.year_start = Some(year);
        self
    }

    /// Sets the last year.
    #[must_use]
    pub const fn year_end(mut self, year: i32) -> Self {
        self.year_end = Some(year);
        self
    }

    /// Sets both bounds from an already validated range.
    #[must_use]
    pub const fn years(mut self, years: FiscalYears) -> Self {
        self.year_start = Some(years.start());
        self.year_end = Some(years.end());
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's schema policy for this call.
    #[must_use]
    pub const fn schema_policy(mut self, policy: SchemaPolicy) -> Self {
        self.schema_policy = Some(policy);
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// `SfError::Validation` (before any request) if the ticker list is empty or
    /// too long or the years are inverted; otherwise any fetch or decode failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(tickers = ?self.tickers))
    )]
    pub async fn fetch(self) -> Result<Table, SfError> {
        self.client.check_tickers(&self.tickers)?;
        let years = FiscalYears::resolve(self.year_start, self.year_end)?;
        fetch_prices(
            &self.client,
            &self.tickers,
            self.ratios,
            years,
            self.cache_mode,
            self.schema_policy
                .unwrap_or_else(|| self.client.schema_policy()),
        )
        .await
    }
}
