//! Core components of the `simfin-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`SfClient`] and its builder.
//! - The primary [`SfError`] type and its validation sub-errors.
//! - The dynamically-typed [`Table`] every fetcher returns.
//! - The explicit [`TableCache`] used for memoization.
//! - Internal networking and page-assembly logic.

/// Table memoization keyed by request parameters.
pub mod cache;
/// The main client (`SfClient`), builder, and configuration.
pub mod client;
/// The primary error type (`SfError`) for the crate.
pub mod error;
/// Page concatenation and schema policy.
pub mod pages;
/// The `Table`/`Cell` data model.
pub mod table;
/// Fiscal year ranges and their defaults.
pub mod years;

pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

/// Polars integration (feature `dataframe`).
#[cfg(feature = "dataframe")]
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::SfClient`
pub use cache::{CacheKey, CacheMode, TableCache};
pub use client::{SfClient, SfClientBuilder};
pub use error::{ErrorKind, SfError, ValidationError};
pub use pages::SchemaPolicy;
pub use table::{Cell, Table};
pub use years::FiscalYears;
