//! HTTP Request domain types

mod config;
mod method;
mod transport;

pub use config::{ExtraFields, RequestConfig};
pub use method::HttpMethod;
pub use transport::{Header, HttpRequestOptions, QueryParam};
