//! Public client surface + builder.
//! Defaults live in `constants`.

mod constants;

pub use constants::{API_KEY_ENV, DEFAULT_MAX_TICKERS};

use crate::core::cache::{CacheKey, TableCache};
use crate::core::pages::SchemaPolicy;
use crate::core::table::Table;
use crate::core::{SfError, ValidationError};
use constants::{
    API_KEY_PARAM, DEFAULT_BASE_URL, PATH_COMPANIES_LIST, PATH_PRICES, PATH_STATEMENTS,
    USER_AGENT,
};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Configured HTTP client, endpoint URLs, API key and optional table cache.
#[derive(Clone)]
pub struct SfClient {
    http: Client,
    companies_url: Url,
    statements_url: Url,
    prices_url: Url,
    api_key: Option<String>,
    max_tickers: usize,
    schema_policy: SchemaPolicy,
    cache: Option<TableCache>,
}

impl fmt::Debug for SfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SfClient")
            .field("companies_url", &self.companies_url.as_str())
            .field("statements_url", &self.statements_url.as_str())
            .field("prices_url", &self.prices_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_tickers", &self.max_tickers)
            .field("schema_policy", &self.schema_policy)
            .field("cache", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl SfClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> SfClientBuilder {
        SfClientBuilder::default()
    }

    /// Builds a client whose key comes from the `SIMFIN_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `SfError::MissingApiKey` if the variable is unset or empty.
    pub fn from_env() -> Result<Self, SfError> {
        Self::builder().api_key_from_env(API_KEY_ENV).build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn companies_url(&self) -> &Url {
        &self.companies_url
    }
    pub(crate) fn statements_url(&self) -> &Url {
        &self.statements_url
    }
    pub(crate) fn prices_url(&self) -> &Url {
        &self.prices_url
    }

    /// Default schema policy for paged responses.
    #[must_use]
    pub const fn schema_policy(&self) -> SchemaPolicy {
        self.schema_policy
    }

    /// Largest ticker list a single request may carry.
    #[must_use]
    pub const fn max_tickers(&self) -> usize {
        self.max_tickers
    }

    /// Appends the key as the `api-key` query parameter.
    pub(crate) fn sign(&self, url: &mut Url) -> Result<(), SfError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(SfError::MissingApiKey(API_KEY_ENV))?;
        url.query_pairs_mut().append_pair(API_KEY_PARAM, key);
        Ok(())
    }

    /// Checks a ticker list against the client's limits.
    ///
    /// # Errors
    ///
    /// `ValidationError::NoTickers` for an empty list, `ValidationError::TooManyTickers`
    /// when the list is longer than [`max_tickers`](Self::max_tickers).
    pub fn check_tickers<S: AsRef<str>>(&self, tickers: &[S]) -> Result<(), ValidationError> {
        check_ticker_count(tickers.len(), self.max_tickers)
    }

    /// The cache attached to this client, if any.
    #[must_use]
    pub fn cache(&self) -> Option<&TableCache> {
        self.cache.as_ref()
    }

    pub(crate) async fn cache_get(&self, key: &CacheKey) -> Option<Table> {
        self.cache.as_ref()?.get(key).await
    }

    pub(crate) async fn cache_put(&self, key: CacheKey, table: &Table) {
        if let Some(cache) = &self.cache {
            cache.put(key, table.clone()).await;
        }
    }
}

pub(crate) const fn check_ticker_count(count: usize, max: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::NoTickers);
    }
    if count > max {
        return Err(ValidationError::TooManyTickers { count, max });
    }
    Ok(())
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SfClientBuilder {
    api_key: Option<String>,
    api_key_env: Option<&'static str>,
    user_agent: Option<String>,
    base_url: Option<Url>,
    companies_url: Option<Url>,
    statements_url: Option<Url>,
    prices_url: Option<Url>,
    max_tickers: Option<usize>,
    schema_policy: SchemaPolicy,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache: Option<TableCache>,
}

impl SfClientBuilder {
    /// Sets the API key explicitly.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Reads the API key from the named environment variable at build time,
    /// unless one was set with [`api_key`](Self::api_key).
    #[must_use]
    pub const fn api_key_from_env(mut self, var: &'static str) -> Self {
        self.api_key_env = Some(var);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API root (e.g., `https://simfin.com/api/v2/`). Endpoint paths are joined onto it.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the company list endpoint.
    #[must_use]
    pub fn companies_url(mut self, url: Url) -> Self {
        self.companies_url = Some(url);
        self
    }

    /// Override the statements endpoint.
    #[must_use]
    pub fn statements_url(mut self, url: Url) -> Self {
        self.statements_url = Some(url);
        self
    }

    /// Override the prices endpoint.
    #[must_use]
    pub fn prices_url(mut self, url: Url) -> Self {
        self.prices_url = Some(url);
        self
    }

    /// Maximum tickers per request. Default: 10.
    #[must_use]
    pub const fn max_tickers(mut self, n: usize) -> Self {
        self.max_tickers = Some(n);
        self
    }

    /// How paged responses with differing columns are treated. Default: [`SchemaPolicy::FirstPage`].
    #[must_use]
    pub const fn schema_policy(mut self, policy: SchemaPolicy) -> Self {
        self.schema_policy = policy;
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Memoize decoded tables in `cache`.
    /// If not set, caching is disabled.
    #[must_use]
    pub fn cache(mut self, cache: TableCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if a URL cannot be parsed, the HTTP client cannot be built, or an
    /// environment key was requested but is missing.
    pub fn build(self) -> Result<SfClient, SfError> {
        let base = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let companies_url = match self.companies_url {
            Some(u) => u,
            None => base.join(PATH_COMPANIES_LIST)?,
        };
        let statements_url = match self.statements_url {
            Some(u) => u,
            None => base.join(PATH_STATEMENTS)?,
        };
        let prices_url = match self.prices_url {
            Some(u) => u,
            None => base.join(PATH_PRICES)?,
        };

        let api_key = match (self.api_key, self.api_key_env) {
            (Some(k), _) => Some(k),
            (None, Some(var)) => Some(
                std::env::var(var)
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .ok_or(SfError::MissingApiKey(var))?,
            ),
            (None, None) => None,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(SfClient {
            http,
            companies_url,
            statements_url,
            prices_url,
            api_key,
            max_tickers: self.max_tickers.unwrap_or(DEFAULT_MAX_TICKERS),
            schema_policy: self.schema_policy,
            cache: self.cache,
        })
    }
}
