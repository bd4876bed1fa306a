//! Column projection: cut a raw provider table down to a fixed allow-list.
//!
//! The two variants differ on purpose and callers should not rely on them
//! agreeing: fundamentals keep the raw table's column order and drop whatever
//! is missing, prices are reindexed to the allow-list order and gain all-null
//! columns for whatever is missing.

pub mod columns;

use crate::core::Table;
use columns::*;

/// Fundamentals allow-list.
pub const FUNDAMENTAL_COLUMNS: [&str; 45] = [
    TICKER,
    FISCAL_YEAR,
    FISCAL_PERIOD,
    PUBLISH_DATE,
    REPORT_DATE,
    REVENUE,
    COST_OF_REVENUE,
    OPERATING_EXPENSE,
    SELLING_AND_MARKETING,
    GENERAL_AND_ADMINISTRATIVE,
    RESEARCH_AND_DEVELOPMENT,
    OPERATING_INCOME,
    NON_OPERATING_INCOME,
    GROSS_PROFIT,
    NET_INCOME,
    CASH_AND_EQUIVALENTS,
    SHORT_TERM_INVESTMENTS,
    ACCOUNTS_AND_NOTES_RECEIVABLE,
    INVENTORIES,
    TOTAL_CURRENT_ASSETS,
    TOTAL_NONCURRENT_ASSETS,
    TOTAL_ASSETS,
    ACCOUNTS_PAYABLE,
    TOTAL_CURRENT_LIABILITIES,
    TOTAL_NONCURRENT_LIABILITIES,
    TOTAL_LIABILITIES,
    RETAINED_EARNINGS,
    TOTAL_EQUITY,
    STOCK_BASED_COMPENSATION,
    EBITDA,
    TOTAL_DEBT,
    FREE_CASH_FLOW,
    GROSS_PROFIT_MARGIN,
    OPERATING_MARGIN,
    NET_PROFIT_MARGIN,
    RETURN_ON_EQUITY,
    RETURN_ON_ASSETS,
    FCF_TO_NET_INCOME,
    CURRENT_RATIO,
    LIABILITIES_TO_EQUITY,
    DEBT_RATIO,
    PIOTROSKI_F_SCORE,
    RETURN_ON_INVESTED_CAPITAL,
    NET_DEBT_TO_EBITDA,
    NET_DEBT_TO_EBIT,
];

/// Prices allow-list, in output order.
pub const PRICE_COLUMNS: [&str; 18] = [
    DATE,
    TICKER,
    HIGH,
    LOW,
    ADJ_CLOSE,
    VOLUME,
    MARKET_CAP,
    ENTERPRISE_VALUE_TTM,
    PE_QUARTERLY,
    PE_TTM,
    PS_QUARTERLY,
    PS_TTM,
    PFCF_QUARTERLY,
    PFCF_TTM,
    EV_EBITDA_TTM,
    EV_SALES_TTM,
    EV_FCF_TTM,
    ALTMAN_Z_SCORE_TTM,
];

/// Fundamentals columns that identify a row rather than measure something.
pub const FUNDAMENTAL_BASE_COLUMNS: [&str; 5] =
    [TICKER, FISCAL_YEAR, FISCAL_PERIOD, PUBLISH_DATE, REPORT_DATE];

/// Price columns that are not offered as chart indicators.
pub const PRICE_BASE_COLUMNS: [&str; 6] = [TICKER, DATE, HIGH, LOW, ADJ_CLOSE, VOLUME];

/// Keeps the allow-listed fundamentals columns, in the raw table's order.
///
/// The result is indexed by `Publish Date` when that column survives. Without it,
/// including when nothing was found and the table has no columns, the result
/// carries no index.
#[must_use]
pub fn project_fundamentals(raw: &Table) -> Table {
    let mut out = raw.filter_columns(|c| FUNDAMENTAL_COLUMNS.contains(&c));
    out.set_index_if_present(PUBLISH_DATE);
    out
}

/// Reindexes to the prices allow-list, indexed by `Date`.
///
/// Allow-listed columns the raw table lacks come back with every value null.
#[must_use]
pub fn project_prices(raw: &Table) -> Table {
    let mut out = raw.reindex_columns(&PRICE_COLUMNS);
    let indexed = out.set_index_if_present(DATE);
    debug_assert!(indexed, "the prices allow-list contains Date");
    out
}

/// The projected columns a user may chart: everything except `base`.
#[must_use]
pub fn indicator_choices(projected: &Table, base: &[&str]) -> Vec<String> {
    projected
        .columns()
        .iter()
        .filter(|c| !base.contains(&c.as_str()))
        .cloned()
        .collect()
}
