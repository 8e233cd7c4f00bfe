//! Request configuration carrying URL template data
//!
//! The template fields sit next to a transport-owned part `T`, which is
//! embedded by composition and never inspected here.

use serde::{Deserialize, Serialize};

use crate::params::TemplateParams;

/// Transport fields that have no dedicated type, kept as raw JSON.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Per-request configuration flowing through the pre-request hooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig<T = ExtraFields> {
    /// Literal URL, or a template when `url_as_template` is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// The template that produced (or will produce) `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_template: Option<String>,

    /// Parameters substituted into the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_template_params: Option<TemplateParams>,

    /// Transport-owned fields, passed through unchanged.
    #[serde(flatten)]
    pub transport: T,
}

impl<T> RequestConfig<T> {
    /// Creates a configuration with no URL data around `transport`.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self {
            url: None,
            url_template: None,
            url_template_params: None,
            transport,
        }
    }

    /// Sets the literal URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the explicit URL template.
    #[must_use]
    pub fn url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = Some(template.into());
        self
    }

    /// Sets the template parameters.
    #[must_use]
    pub fn url_template_params(mut self, params: TemplateParams) -> Self {
        self.url_template_params = Some(params);
        self
    }

    /// Label for the request's route: the template if known, otherwise the URL.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.url_template.as_deref().or(self.url.as_deref())
    }

    /// Replaces the transport part, keeping the URL data.
    pub fn map_transport<U>(self, f: impl FnOnce(T) -> U) -> RequestConfig<U> {
        RequestConfig {
            url: self.url,
            url_template: self.url_template,
            url_template_params: self.url_template_params,
            transport: f(self.transport),
        }
    }
}

impl<T: Default> RequestConfig<T> {
    /// Creates an empty configuration with default transport fields.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(T::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_route_prefers_template() {
        let config: RequestConfig = RequestConfig::new()
            .url("https://x.test/test/1")
            .url_template("https://x.test/test/{id}");
        assert_eq!(config.route(), Some("https://x.test/test/{id}"));

        let config: RequestConfig = RequestConfig::new().url("https://x.test/plain");
        assert_eq!(config.route(), Some("https://x.test/plain"));

        assert_eq!(RequestConfig::<ExtraFields>::new().route(), None);
    }

    #[test]
    fn test_deserialize_keeps_unknown_fields() {
        let config: RequestConfig = serde_json::from_value(json!({
            "url": "https://x.test/test/{id}",
            "urlTemplateParams": {"id": 1},
            "method": "get",
            "timeout": 500
        }))
        .unwrap();

        assert_eq!(config.url.as_deref(), Some("https://x.test/test/{id}"));
        assert_eq!(config.url_template, None);
        assert_eq!(config.transport.get("method"), Some(&json!("get")));
        assert_eq!(config.transport.get("timeout"), Some(&json!(500)));
    }

    #[test]
    fn test_serialize_uses_camel_case_and_skips_absent() {
        let config: RequestConfig = RequestConfig::new()
            .url_template("https://x.test/{id}")
            .url_template_params(TemplateParams::new().with("id", 5));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "urlTemplate": "https://x.test/{id}",
                "urlTemplateParams": {"id": 5}
            })
        );
    }

    #[test]
    fn test_map_transport_keeps_url_data() {
        let config: RequestConfig<u8> = RequestConfig::with_transport(1).url("https://x.test");
        let mapped = config.map_transport(|n| n + 1);
        assert_eq!(mapped.transport, 2);
        assert_eq!(mapped.url.as_deref(), Some("https://x.test"));
    }
}
