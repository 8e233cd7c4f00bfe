//! urltpl Application - Template expansion and request transformation
//!
//! This crate defines:
//! - the URI template parser and expansion engine
//! - the request transformer deciding when a URL is a template
//! - port traits for attaching the transformer to an HTTP client
//! - application-level error handling

pub mod error;
pub mod hooks;
pub mod interceptor;
pub mod ports;
pub mod template;

pub use error::{ApplicationError, ApplicationResult};
pub use hooks::HookChain;
pub use interceptor::{TemplateInterceptor, attach, make_template_interceptor};
pub use ports::{
    HttpClient, HttpClientError, RequestHook, RequestHookRegistry, ResponseHook,
    ResponseHookRegistry,
};
pub use template::{UriTemplate, expand};
