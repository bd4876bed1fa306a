use chrono::{Datelike, Utc};
use chrono_tz::US::Eastern;

use super::error::ValidationError;

/// An inclusive range of fiscal years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiscalYears {
    start: i32,
    end: i32,
}

impl FiscalYears {
    /// Creates a range from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvertedYears` if `end < start`.
    pub const fn new(start: i32, end: i32) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvertedYears { start, end });
        }
        Ok(Self { start, end })
    }

    /// Fills in missing bounds: `end` defaults to the current year in US/Eastern,
    /// `start` defaults to the year before `end`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvertedYears` if the resolved range is inverted.
    pub fn resolve(start: Option<i32>, end: Option<i32>) -> Result<Self, ValidationError> {
        Self::resolve_at(start, end, current_year())
    }

    pub(crate) const fn resolve_at(
        start: Option<i32>,
        end: Option<i32>,
        current_year: i32,
    ) -> Result<Self, ValidationError> {
        let end = match end {
            Some(y) => y,
            None => current_year,
        };
        let start = match start {
            Some(y) => y,
            None => end - 1,
        };
        Self::new(start, end)
    }

    /// First year of the range.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Last year of the range.
    #[must_use]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Every year in the range, ascending.
    #[must_use]
    pub fn iter(&self) -> std::ops::RangeInclusive<i32> {
        self.start..=self.end
    }

    /// Comma-separated list of the years, e.g. `2019,2020`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `YYYY-01-01` of the first year.
    #[must_use]
    pub fn first_day(&self) -> String {
        format!("{:04}-01-01", self.start)
    }

    /// `YYYY-12-31` of the last year.
    #[must_use]
    pub fn last_day(&self) -> String {
        format!("{:04}-12-31", self.end)
    }
}

/// The current calendar year on the US/Eastern clock.
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().with_timezone(&Eastern).year()
}
