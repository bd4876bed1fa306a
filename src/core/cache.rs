//! Memoization of decoded tables, keyed by the exact request parameters.
//!
//! Entries are never evicted. Whatever the provider returned first for a key is
//! served for as long as the cache lives, so a long-running process will not see
//! upstream revisions unless a call opts into [`CacheMode::Refresh`].

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::table::Table;
use super::years::FiscalYears;

/// Defines the behavior of the in-memory cache for an API call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if an entry is present; otherwise, fetch from the network
    /// and write the result to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new result to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

/// Identifies one cached request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The full company list.
    Catalog,
    /// A statements request.
    Statements {
        /// Tickers in the order they were requested.
        tickers: Vec<String>,
        /// Statement wire code (`pl`, `bs`, ...).
        statement: &'static str,
        /// Period wire code (`quarters`, `fy`).
        period: &'static str,
        /// Fiscal years requested.
        years: FiscalYears,
    },
    /// A prices request.
    Prices {
        /// Tickers in the order they were requested.
        tickers: Vec<String>,
        /// Whether ratio columns were requested.
        ratios: bool,
        /// Years requested.
        years: FiscalYears,
    },
}

/// An explicitly owned, shareable table cache.
///
/// Cloning is cheap and clones share the same storage. Hand one to
/// [`SfClientBuilder::cache`](crate::core::client::SfClientBuilder::cache) to
/// enable memoization for that client.
#[derive(Debug, Clone, Default)]
pub struct TableCache {
    map: Arc<RwLock<HashMap<CacheKey, Table>>>,
}

impl TableCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the cached table for `key`, if any.
    pub async fn get(&self, key: &CacheKey) -> Option<Table> {
        self.map.read().await.get(key).cloned()
    }

    /// Stores `table` under `key`, replacing any previous entry.
    pub async fn put(&self, key: CacheKey, table: Table) {
        self.map.write().await.insert(key, table);
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    /// True if nothing has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }
}
