//! Core proxy engine module

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
