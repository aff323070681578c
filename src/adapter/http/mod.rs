//! HTTP implementation of the backend port.

pub mod client;
pub mod dto;

pub use client::HttpBackend;
