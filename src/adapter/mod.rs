//! Backend adapters.

pub mod http;

pub use http::HttpBackend;
