//! Centralized constants for default endpoints and UA.

/// Identifies this crate to the provider.
pub(crate) const USER_AGENT: &str = concat!("simfin-rs/", env!("CARGO_PKG_VERSION"));

/// SimFin v2 API root. Endpoint paths are joined onto it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://simfin.com/api/v2/";

/// Company list, relative to the API root.
pub(crate) const PATH_COMPANIES_LIST: &str = "companies/list";

/// Fundamental statements, relative to the API root.
pub(crate) const PATH_STATEMENTS: &str = "companies/statements";

/// Daily prices and ratios, relative to the API root.
pub(crate) const PATH_PRICES: &str = "companies/prices";

/// Environment variable read by [`SfClient::from_env`](super::SfClient::from_env).
pub const API_KEY_ENV: &str = "SIMFIN_API_KEY";

/// Query parameter carrying the key.
pub(crate) const API_KEY_PARAM: &str = "api-key";

/// Default cap on tickers per request.
pub const DEFAULT_MAX_TICKERS: usize = 10;
