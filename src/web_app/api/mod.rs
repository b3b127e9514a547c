// web_app/api/mod.rs - Remote API access (server side and CLI tools)
//
// This module contains the HTTP client for the product API together with
// its configuration and the process-wide client registry used by the
// server functions.

pub mod client;
pub mod config;
pub mod error;
pub mod registry;

pub use client::DummyJsonClient;
pub use config::CatalogConfig;
pub use error::ApiError;
