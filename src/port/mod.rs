//! Outbound ports.
//!
//! The store core talks to the server exclusively through the [`Backend`]
//! trait; adapters (HTTP in production, `testkit::MockBackend` in tests)
//! implement it.

pub mod backend;

pub use backend::Backend;
