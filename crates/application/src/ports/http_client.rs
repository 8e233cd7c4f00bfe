//! HTTP Client port

use std::future::Future;

use thiserror::Error;
use urltpl_domain::{HttpRequestOptions, RequestConfig, ResponseSpec};

use crate::ApplicationError;

/// Errors surfaced by an `HttpClient`.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// A pre-request hook failed; nothing was sent.
    #[error(transparent)]
    Hook(#[from] ApplicationError),

    /// No URL remained after the pre-request hooks ran.
    #[error("request has no URL")]
    MissingUrl,

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure.
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Port for executing templated HTTP requests.
///
/// This trait abstracts the HTTP client implementation, so the expansion
/// core stays independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Runs the pre-request hooks on `config`, sends it, and returns the
    /// response with the route it was requested through.
    ///
    /// # Errors
    ///
    /// Returns an error if a hook fails, the URL is missing or invalid,
    /// or the transport fails.
    fn execute(
        &self,
        config: RequestConfig<HttpRequestOptions>,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
