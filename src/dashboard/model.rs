use std::str::FromStr;

use crate::core::client::check_ticker_count;
use crate::core::{FiscalYears, SfError, ValidationError};
use crate::statements::Statement;

/// Oldest year offered by the year selectors.
pub const FIRST_SELECTABLE_YEAR: i32 = 2001;

/// Sector baskets used to pre-fill the ticker selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    BigTech,
    Banks,
    Fintech,
    Energy,
}

impl Preset {
    /// Every preset, in selector order.
    pub const ALL: [Self; 4] = [Self::BigTech, Self::Banks, Self::Fintech, Self::Energy];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BigTech => "Big Tech",
            Self::Banks => "Banks",
            Self::Fintech => "Fintech",
            Self::Energy => "Energy",
        }
    }

    /// The tickers pre-selected for this sector.
    #[must_use]
    pub const fn tickers(self) -> [&'static str; 3] {
        match self {
            Self::BigTech => ["AAPL", "MSFT", "GOOG"],
            Self::Banks => ["BAC", "WFC", "JPM"],
            Self::Fintech => ["PYPL", "V", "MA"],
            Self::Energy => ["XOM", "CVX", "VLO"],
        }
    }
}

impl FromStr for Preset {
    type Err = SfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::UnknownChoice {
                    field: "preset",
                    value: s.trim().to_string(),
                }
                .into()
            })
    }
}

/// Year selector contents: `current` down to [`FIRST_SELECTABLE_YEAR`].
#[must_use]
pub fn year_choices(current: i32) -> Vec<i32> {
    (FIRST_SELECTABLE_YEAR..=current).rev().collect()
}

/// What the user picked in the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub tickers: Vec<String>,
    pub year_start: i32,
    pub year_end: i32,
    pub statement: Statement,
}

impl Query {
    /// A query for `tickers` over `[year_start, year_end]` with the default statement.
    pub fn new<I, S>(tickers: I, year_start: i32, year_end: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tickers: tickers.into_iter().map(Into::into).collect(),
            year_start,
            year_end,
            statement: Statement::default(),
        }
    }

    /// A query pre-filled from a sector preset.
    #[must_use]
    pub fn from_preset(preset: Preset, year_start: i32, year_end: i32) -> Self {
        Self::new(preset.tickers(), year_start, year_end)
    }

    #[must_use]
    pub const fn statement(mut self, statement: Statement) -> Self {
        self.statement = statement;
        self
    }

    /// Checks the ticker count against `max_tickers` and the year order.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found: ticker count is checked before years.
    pub fn validate(&self, max_tickers: usize) -> Result<FiscalYears, ValidationError> {
        check_ticker_count(self.tickers.len(), max_tickers)?;
        FiscalYears::new(self.year_start, self.year_end)
    }
}
