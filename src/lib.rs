//! Paystore - cached, dirty-tracked client data store for a payments admin
//! dashboard.
//!
//! This crate provides the single in-memory store behind a merchant-facing
//! payments dashboard: a dozen independently owned server domains (deposits,
//! transactions, disputes, documents, ...) cached behind one registry, with
//! lazy, memoized, single-flight fetch-on-demand, plus an optimistic settings
//! draft layered over the last-saved baseline with one atomic save operation.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Plain data types: entities, query types, the tagged
//!   per-field draft/baseline state, and query-key canonicalization.
//! - **`port`** - The outbound seam: the [`port::Backend`] trait with one
//!   method per resolver query and a single atomic settings save.
//! - **`store`** - The core: single-flight resolvers, per-domain handles,
//!   the settings slice with per-field dirty tracking, the save gateway,
//!   and the [`store::StoreHandle`] aggregator.
//! - **`adapter`** - The reqwest-backed HTTP implementation of the backend.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`domain`] - Entities, queries, settings, and field state
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definition for backend implementations
//! - [`store`] - Resolvers, slices, save gateway, and the store aggregator
//! - [`adapter`] - HTTP backend adapter
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use paystore::adapter::HttpBackend;
//! use paystore::config::Config;
//! use paystore::store::StoreHandle;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("config.toml")?;
//! config.init_logging();
//!
//! let backend = Arc::new(HttpBackend::from_config(&config.api)?);
//! let store = StoreHandle::new(backend);
//!
//! store.settings().load().await?;
//! store.settings().set_statement_descriptor("MYSTORE");
//! store.settings().save().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
