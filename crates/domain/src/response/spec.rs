//! Response specification type
//!
//! A response keeps the route it was requested through, so consumers can
//! label logs and metrics by template rather than by concrete URL.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::params::TemplateParams;
use crate::request::RequestConfig;

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is a 3xx redirection status.
    #[must_use]
    pub const fn is_redirection(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }

    /// Returns true if this is a 4xx client error status.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    /// Returns true if this is a 5xx server error status.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.0 >= 500 && self.0 < 600
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// The URL a response was fetched from and the template behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    /// The concrete URL that was requested.
    pub url: Option<String>,
    /// The template `url` was expanded from, if any.
    pub url_template: Option<String>,
    /// Parameters used for expansion, if a template was applied.
    pub url_template_params: Option<TemplateParams>,
}

impl RouteInfo {
    /// Low-cardinality route label: the template, or the URL when none was used.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.url_template.as_deref().or(self.url.as_deref())
    }
}

impl<T> From<&RequestConfig<T>> for RouteInfo {
    fn from(config: &RequestConfig<T>) -> Self {
        Self {
            url: config.url.clone(),
            url_template: config.url_template.clone(),
            url_template_params: config.url_template_params.clone(),
        }
    }
}

/// HTTP response with the route it was requested through.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers in received order.
    pub headers: Vec<(String, String)>,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Time from send to fully read body.
    pub duration: Duration,
    /// URL and template data recorded from the request configuration.
    pub route: RouteInfo,
}

impl ResponseSpec {
    /// Returns the first header value matching `name`, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the body as a lossy UTF-8 string.
    #[must_use]
    pub fn body_as_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_classes() {
        assert!(StatusCode::new(201).is_success());
        assert!(StatusCode::new(302).is_redirection());
        assert!(StatusCode::new(404).is_client_error());
        assert!(StatusCode::new(503).is_server_error());
        assert!(!StatusCode::new(404).is_success());
    }

    #[test]
    fn test_route_info_from_config() {
        let config: RequestConfig = RequestConfig::new()
            .url("https://x.test/status/201")
            .url_template("https://x.test/status/{status}")
            .url_template_params(TemplateParams::new().with("status", 201));

        let route = RouteInfo::from(&config);
        assert_eq!(route.route(), Some("https://x.test/status/{status}"));
        assert_eq!(route.url.as_deref(), Some("https://x.test/status/201"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = ResponseSpec {
            status: StatusCode::new(200),
            headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
            body: b"ok".to_vec(),
            duration: Duration::from_millis(3),
            route: RouteInfo::default(),
        };
        assert_eq!(response.header("content-type"), Some("text/plain"));
        assert_eq!(response.body_as_string_lossy(), "ok");
    }
}
