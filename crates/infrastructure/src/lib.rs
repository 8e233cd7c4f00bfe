//! urltpl Infrastructure - Adapters and implementations
//!
//! This crate provides the reqwest-backed `HttpClient`, which runs the
//! pre-request hooks defined in the application layer, plus settings and
//! logging helpers.

pub mod adapters;
pub mod config;
pub mod logging;

pub use adapters::ReqwestHttpClient;
pub use config::{ClientSettings, SettingsError};
pub use logging::{init_tracing, log_route, route_logger};
