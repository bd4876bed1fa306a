//! The dashboard flow without the UI: validate the controls, fetch, project,
//! list chartable indicators, compose charts.
//!
//! Every failure is scoped to the action that triggered it. Validation errors
//! are returned before any request is sent; an empty view means the provider
//! had no matching data, which is distinct from an error.

mod model;

pub use model::{FIRST_SELECTABLE_YEAR, Preset, Query, year_choices};

use crate::catalog::CatalogBuilder;
use crate::chart::{BEAR_REGIMES, LineChart, SpreadChart, SpreadPreset};
use crate::core::{SfClient, SfError, Table};
use crate::prices::PricesBuilder;
use crate::project::columns::{DATE, REPORT_DATE, TICKER};
use crate::project::{
    FUNDAMENTAL_BASE_COLUMNS, PRICE_BASE_COLUMNS, indicator_choices, project_fundamentals,
    project_prices,
};
use crate::statements::StatementsBuilder;

/// Runs dashboard queries against one client (and therefore one cache).
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: SfClient,
}

impl Dashboard {
    #[must_use]
    pub const fn new(client: SfClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub const fn client(&self) -> &SfClient {
        &self.client
    }

    /// Tickers for the selection control.
    ///
    /// # Errors
    ///
    /// Any catalog fetch failure. An unreachable provider is an error, never an empty list.
    pub async fn ticker_choices(&self) -> Result<Vec<String>, SfError> {
        CatalogBuilder::new(&self.client).tickers().await
    }

    /// Fetches and projects fundamentals for `query`.
    ///
    /// # Errors
    ///
    /// `SfError::Validation` without any request when the query is invalid;
    /// otherwise fetch failures.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fundamentals(&self, query: &Query) -> Result<FundamentalsView, SfError> {
        let years = query.validate(self.client.max_tickers())?;
        let raw = StatementsBuilder::new(&self.client, query.tickers.iter().cloned())
            .statement(query.statement)
            .years(years)
            .fetch()
            .await?;
        Ok(FundamentalsView::new(raw))
    }

    /// Fetches and projects prices and ratios for `query`. The statement kind is ignored.
    ///
    /// # Errors
    ///
    /// `SfError::Validation` without any request when the query is invalid;
    /// otherwise fetch failures.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn prices(&self, query: &Query) -> Result<PricesView, SfError> {
        let years = query.validate(self.client.max_tickers())?;
        let raw = PricesBuilder::new(&self.client, query.tickers.iter().cloned())
            .years(years)
            .fetch()
            .await?;
        Ok(PricesView::new(raw))
    }
}

fn check_indicator(indicators: &[String], indicator: &str) -> Result<(), SfError> {
    if indicators.iter().any(|i| i == indicator) {
        Ok(())
    } else {
        Err(SfError::UnknownIndicator(indicator.to_string()))
    }
}

/// Fundamentals as fetched, as projected, and the indicators offered for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct FundamentalsView {
    pub raw: Table,
    pub projected: Table,
    pub indicators: Vec<String>,
}

impl FundamentalsView {
    /// Projects `raw` and derives the indicator list.
    #[must_use]
    pub fn new(raw: Table) -> Self {
        let projected = project_fundamentals(&raw);
        let indicators = indicator_choices(&projected, &FUNDAMENTAL_BASE_COLUMNS);
        Self {
            raw,
            projected,
            indicators,
        }
    }

    /// True when the provider had no matching rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projected.is_empty()
    }

    /// `indicator` by report date, one line per ticker, bear regimes shaded.
    ///
    /// # Errors
    ///
    /// `SfError::UnknownIndicator` if `indicator` is not offered,
    /// `SfError::TypeConversion` if it holds non-numeric values.
    pub fn line_chart(&self, indicator: &str) -> Result<LineChart, SfError> {
        check_indicator(&self.indicators, indicator)?;
        LineChart::compose(&self.projected, REPORT_DATE, indicator, TICKER, &BEAR_REGIMES)
    }
}

/// Prices as fetched, as projected, and the indicators offered for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct PricesView {
    pub raw: Table,
    pub projected: Table,
    pub indicators: Vec<String>,
}

impl PricesView {
    #[must_use]
    pub fn new(raw: Table) -> Self {
        let projected = project_prices(&raw);
        let indicators = indicator_choices(&projected, &PRICE_BASE_COLUMNS);
        Self {
            raw,
            projected,
            indicators,
        }
    }

    /// True when the provider had no matching rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projected.is_empty()
    }

    /// `indicator` by date, one line per ticker, bear regimes shaded.
    ///
    /// # Errors
    ///
    /// `SfError::UnknownIndicator` if `indicator` is not offered,
    /// `SfError::TypeConversion` if it holds non-numeric values.
    pub fn line_chart(&self, indicator: &str) -> Result<LineChart, SfError> {
        check_indicator(&self.indicators, indicator)?;
        LineChart::compose(&self.projected, DATE, indicator, TICKER, &BEAR_REGIMES)
    }

    /// The three spread charts in display order; only the first starts expanded.
    /// Each is composed independently, so one failing does not hide the others.
    #[must_use]
    pub fn spread_charts(&self) -> Vec<Result<SpreadChart, SfError>> {
        SpreadPreset::DISPLAY_ORDER
            .into_iter()
            .enumerate()
            .map(|(i, preset)| {
                SpreadChart::compose(&self.projected, DATE, TICKER, preset, &BEAR_REGIMES, i == 0)
            })
            .collect()
    }
}
