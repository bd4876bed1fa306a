use std::fmt;
use std::str::FromStr;

use crate::core::{SfError, ValidationError};

/// Which fundamental statement to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Statement {
    /// Profit and loss (income statement).
    #[default]
    ProfitLoss,
    /// Balance sheet.
    BalanceSheet,
    /// Cash flow statement.
    CashFlow,
    /// Ratios derived from the three statements.
    Derived,
    /// Every statement at once.
    All,
}

impl Statement {
    /// Every variant, in selector order.
    pub const ALL: [Self; 5] = [
        Self::ProfitLoss,
        Self::BalanceSheet,
        Self::CashFlow,
        Self::Derived,
        Self::All,
    ];

    /// The provider's code for this statement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfitLoss => "pl",
            Self::BalanceSheet => "bs",
            Self::CashFlow => "cf",
            Self::Derived => "derived",
            Self::All => "all",
        }
    }

    /// The human-readable name shown in a selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProfitLoss => "Profit Loss",
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlow => "Cash Flow",
            Self::Derived => "Derived Ratios",
            Self::All => "All",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Statement {
    type Err = SfError;

    /// Accepts either the provider code (`pl`) or the label (`Profit Loss`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s) || st.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ValidationError::UnknownChoice {
                    field: "statement",
                    value: s.to_string(),
                }
                .into()
            })
    }
}

/// Reporting period granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Period {
    /// Every fiscal quarter of the requested years.
    #[default]
    Quarters,
    /// Full fiscal years only.
    FullYear,
}

impl Period {
    /// The provider's code for this period.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quarters => "quarters",
            Self::FullYear => "fy",
        }
    }
}
