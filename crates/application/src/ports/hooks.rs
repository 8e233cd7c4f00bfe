//! Hook registration ports
//!
//! A host HTTP client exposes these so the request transformer can be
//! attached without the core depending on any particular client.

use urltpl_domain::{RequestConfig, ResponseSpec};

use crate::ApplicationResult;

/// Pre-request hook: receives the outgoing configuration and returns the one to send.
pub type RequestHook<T> =
    Box<dyn Fn(RequestConfig<T>) -> ApplicationResult<RequestConfig<T>> + Send + Sync>;

/// Post-response hook: observes a completed response.
pub type ResponseHook = Box<dyn Fn(&ResponseSpec) + Send + Sync>;

/// Port for clients that run hooks on every outgoing request.
///
/// Implementations must run each registered hook exactly once per request,
/// in registration order, before any transport-level processing.
pub trait RequestHookRegistry<T> {
    /// Appends `hook` to the pre-request chain.
    fn add_request_hook(&mut self, hook: RequestHook<T>);
}

/// Port for clients that notify observers of completed responses.
pub trait ResponseHookRegistry {
    /// Appends `hook` to the post-response chain.
    fn add_response_hook(&mut self, hook: ResponseHook);
}
