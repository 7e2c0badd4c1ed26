//! Translate Proxy - forwards text translation requests to Azure Translator
//!
//! This library provides the HTTP handler, the upstream translation client
//! and the request/response models used by the `translate-proxy` server.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use core::{
    client::TranslatorClient,
    config::ProxyConfig,
    errors::ProxyError,
    models::{ProviderCredentials, TranslatedText, TranslationRequest},
};

pub use server::api::{router, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
