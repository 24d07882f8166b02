//! Shared configuration and logging bootstrap for Coinage.
//!
//! This crate provides the ambient pieces used by the other crates:
//! - Configuration management (locale and logging settings)
//! - Tracing subscriber initialisation for binaries

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, LocaleConfig, LoggingConfig};
