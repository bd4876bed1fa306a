//! simfin-rs: fundamentals, share prices and valuation ratios from the SimFin API.
//!
//! Every fetcher returns a [`Table`]; the `project` module narrows raw tables to
//! chartable columns and the `chart` module turns them into Plotly-ready figures.
//! [`Dashboard`] ties the pieces together the way the interactive app uses them.

pub mod catalog;
pub mod chart;
pub mod core;
pub mod dashboard;
pub mod prices;
pub mod project;
pub mod statements;

pub use catalog::{CatalogBuilder, companies, tickers};
pub use chart::{BEAR_REGIMES, BearRegime, Figure, LineChart, SpreadChart, SpreadPreset};
pub use core::{
    CacheMode, Cell, ErrorKind, FiscalYears, SchemaPolicy, SfClient, SfClientBuilder, SfError,
    Table, TableCache, ValidationError,
};
pub use dashboard::{Dashboard, FundamentalsView, Preset, PricesView, Query};
pub use prices::PricesBuilder;
pub use statements::{Period, Statement, StatementsBuilder};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `simfin_rs=info`).
///
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("simfin_rs=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
