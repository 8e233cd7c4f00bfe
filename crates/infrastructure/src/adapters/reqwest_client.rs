//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Every outgoing configuration runs through the registered pre-request
//! hooks before the transport touches it; every response is handed to the
//! post-response hooks with the route it was requested through.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, Request, Url};
use urltpl_application::{
    HookChain, HttpClient, HttpClientError, RequestHook, RequestHookRegistry, ResponseHook,
    ResponseHookRegistry, attach,
};
use urltpl_domain::{
    HttpMethod, HttpRequestOptions, RequestConfig, ResponseSpec, RouteInfo, StatusCode,
};

use crate::config::ClientSettings;

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` with a pre-request hook chain (where the URL
/// template interceptor lives) and a post-response hook chain.
pub struct ReqwestHttpClient {
    client: Client,
    request_hooks: HookChain<HttpRequestOptions>,
    response_hooks: Vec<ResponseHook>,
}

impl ReqwestHttpClient {
    /// Creates a client with default settings and no hooks.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Ok(Self::with_client(Self::build_client(&ClientSettings::default())?))
    }

    /// Creates a client from `settings` with the URL template interceptor
    /// attached using `settings.expansion`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_settings(settings: &ClientSettings) -> Result<Self, HttpClientError> {
        let mut client = Self::with_client(Self::build_client(settings)?);
        attach(&mut client, settings.expansion);
        Ok(client)
    }

    /// Creates a client around an existing reqwest client, with no hooks.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self {
            client,
            request_hooks: HookChain::new(),
            response_hooks: Vec::new(),
        }
    }

    fn build_client(settings: &ClientSettings) -> Result<Client, HttpClientError> {
        let redirect = if settings.max_redirects == 0 {
            reqwest::redirect::Policy::none()
        } else {
            reqwest::redirect::Policy::limited(settings.max_redirects)
        };

        Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(redirect)
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Runs the pre-request hooks and builds the request to send.
    ///
    /// Transport query pairs are appended after the hooks, so they follow
    /// any query produced by template expansion.
    ///
    /// # Errors
    ///
    /// Returns `HttpClientError::Hook` if a hook fails,
    /// `HttpClientError::MissingUrl` if no URL remains, and
    /// `HttpClientError::InvalidUrl` if it cannot be parsed.
    pub fn prepare(
        &self,
        config: RequestConfig<HttpRequestOptions>,
    ) -> Result<(RequestConfig<HttpRequestOptions>, Request), HttpClientError> {
        let config = self.request_hooks.apply(config)?;

        let url = config.url.as_deref().ok_or(HttpClientError::MissingUrl)?;
        let mut parsed_url =
            Url::parse(url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

        let options = &config.transport;
        if !options.query.is_empty() {
            let mut pairs = parsed_url.query_pairs_mut();
            for param in &options.query {
                pairs.append_pair(&param.key, &param.value);
            }
        }

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(options.method), parsed_url);

        for header in &options.headers {
            builder = builder.header(&header.name, &header.value);
        }
        if let Some(body) = &options.body {
            builder = builder.body(body.clone());
        }
        if let Some(timeout_ms) = options.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let request = builder.build().map_err(Self::map_error)?;
        Ok((config, request))
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout;
        }
        if error.is_connect() {
            return HttpClientError::ConnectionFailed(error.to_string());
        }
        if error.is_builder() {
            return HttpClientError::InvalidUrl(error.to_string());
        }
        HttpClientError::Other(error.to_string())
    }
}

impl RequestHookRegistry<HttpRequestOptions> for ReqwestHttpClient {
    fn add_request_hook(&mut self, hook: RequestHook<HttpRequestOptions>) {
        self.request_hooks.add_request_hook(hook);
    }
}

impl ResponseHookRegistry for ReqwestHttpClient {
    fn add_response_hook(&mut self, hook: ResponseHook) {
        self.response_hooks.push(hook);
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        config: RequestConfig<HttpRequestOptions>,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        async move {
            let (config, request) = self.prepare(config)?;
            tracing::debug!(
                method = %request.method(),
                url = %request.url(),
                route = config.route().unwrap_or_default(),
                "sending request"
            );

            let start = Instant::now();
            let response = self
                .client
                .execute(request)
                .await
                .map_err(Self::map_error)?;

            let status = StatusCode::new(response.status().as_u16());
            let headers = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();
            let body = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?
                .to_vec();

            let response = ResponseSpec {
                status,
                headers,
                body,
                duration: start.elapsed(),
                route: RouteInfo::from(&config),
            };

            for hook in &self.response_hooks {
                hook(&response);
            }

            Ok(response)
        }
    }
}
