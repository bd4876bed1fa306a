//! Fundamental statements for a basket of tickers over a range of fiscal years.

mod fetch;
mod model;

pub use model::{Period, Statement};

use crate::core::{CacheMode, FiscalYears, SchemaPolicy, SfClient, SfError, Table};
use fetch::fetch_statements;

/// A builder for fetching fundamental statements.
///
/// The year range defaults to the previous and current year (US/Eastern clock);
/// setting only the end year makes the start default to the year before it.
///
/// # Example
///
/// ```no_run
/// # use simfin_rs::{SfClient, Statement, StatementsBuilder};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SfClient::from_env()?;
/// let table = StatementsBuilder::new(&client, ["AAPL", "MSFT"])
///     .statement(Statement::Derived)
///     .year_start(2019)
///     .year_end(2020)
///     .fetch()
///     .await?;
/// println!("{} rows", table.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StatementsBuilder {
    client: SfClient,
    tickers: Vec<String>,
    statement: Statement,
    period: Period,
    year_start: Option<i32>,
    year_end: Option<i32>,
    cache_mode: CacheMode,
    schema_policy: Option<SchemaPolicy>,
}

impl StatementsBuilder {
    /// Creates a new `StatementsBuilder` for the given tickers.
    pub fn new<I, S>(client: &SfClient, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client: client.clone(),
            tickers: tickers.into_iter().map(Into::into).collect(),
            statement: Statement::ProfitLoss,
            period: Period::Quarters,
            year_start: None,
            year_end: None,
            cache_mode: CacheMode::Use,
            schema_policy: None,
        }
    }

    /// Sets the statement kind. (Default: [`Statement::ProfitLoss`])
    #[must_use]
    pub const fn statement(mut self, statement: Statement) -> Self {
        self.statement = statement;
        self
    }

    /// Sets the reporting period. (Default: [`Period::Quarters`])
    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Sets the first fiscal year.
    #[must_use]
    pub const fn year_start(mut self, year: i32) -> Self {
        self.year_start = Some(year);
        self
    }

    /// Sets the last fiscal year.
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
    /// Pages the provider reports as not found, or that carry no rows, are skipped.
    /// If nothing is left the result is an empty table with no columns.
    ///
    /// # Errors
    ///
    /// `SfError::Validation` (before any request) if the ticker list is empty or
    /// too long or the years are inverted; otherwise any fetch or decode failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(tickers = ?self.tickers, statement = %self.statement))
    )]
    pub async fn fetch(self) -> Result<Table, SfError> {
        self.client.check_tickers(&self.tickers)?;
        let years = FiscalYears::resolve(self.year_start, self.year_end)?;
        fetch_statements(
            &self.client,
            &self.tickers,
            self.statement,
            self.period,
            years,
            self.cache_mode,
            self.schema_policy
                .unwrap_or_else(|| self.client.schema_policy()),
        )
        .await
    }
}
