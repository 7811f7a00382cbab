//! Shared infrastructure-free helpers (configuration).

pub mod config;

pub use config::AppConfig;
