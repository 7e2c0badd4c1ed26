//! HTTP server exposing the translation proxy

pub mod api;
