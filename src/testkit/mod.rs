//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`backend`] — [`MockBackend`](backend::MockBackend): a scripted
//!   [`Backend`](crate::port::Backend) with per-method call counters and
//!   gates for holding requests in flight.
//! - [`fixtures`] — Builders for domain values used across test suites.

pub mod backend;
pub mod fixtures;

pub use backend::MockBackend;
