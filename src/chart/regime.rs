use chrono::NaiveDate;

use super::figure::Shape;

/// A date interval of broad market decline, drawn as a shaded band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearRegime {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BearRegime {
    /// Creates a regime from its first and last day.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub(crate) fn band(&self) -> Shape {
        Shape::vrect(
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
            "red",
            0.1,
        )
    }
}

const fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid regime date"),
    }
}

/// COVID crash and the 2021/22 growth sell-off.
pub const BEAR_REGIMES: [BearRegime; 2] = [
    BearRegime::new(day(2020, 2, 1), day(2020, 4, 15)),
    BearRegime::new(day(2021, 11, 1), day(2022, 1, 15)),
];
