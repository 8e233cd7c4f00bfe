//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the expansion core and the HTTP
//! client hosting it. Each port is a trait implemented by adapters in the
//! infrastructure layer.

mod hooks;
mod http_client;

pub use hooks::{RequestHook, RequestHookRegistry, ResponseHook, ResponseHookRegistry};
pub use http_client::{HttpClient, HttpClientError};
