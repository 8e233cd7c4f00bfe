//! urltpl Domain - Core types
//!
//! Request configuration with URL template data, template parameters,
//! expansion options and the errors raised while parsing templates.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod options;
pub mod params;
pub mod request;
pub mod response;

pub use error::{DomainError, DomainResult, SyntaxErrorReason, TemplateSyntaxError};
pub use options::ExpansionOptions;
pub use params::{ParamValue, TemplateParams};
pub use request::{ExtraFields, HttpMethod, HttpRequestOptions, RequestConfig};
pub use response::{ResponseSpec, RouteInfo, StatusCode};
