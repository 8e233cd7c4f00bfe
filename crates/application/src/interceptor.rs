//! Request transformer
//!
//! Decides, per request configuration, whether to expand a URL template:
//!
//! 1. an explicit `url_template` always wins, even over a present `url`;
//! 2. otherwise, with `url_as_template` enabled, `url` itself is the template
//!    and is recorded into `url_template`;
//! 3. otherwise the configuration passes through untouched.
//!
//! When a template is applied, `url_template_params` is always set on the
//! result (empty if the caller supplied none).

use urltpl_domain::{ExpansionOptions, RequestConfig, TemplateSyntaxError};

use crate::ApplicationError;
use crate::ports::RequestHookRegistry;
use crate::template::expand;

/// Applies template expansion to request configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateInterceptor {
    options: ExpansionOptions,
}

impl TemplateInterceptor {
    /// Creates an interceptor with the given options.
    #[must_use]
    pub const fn new(options: ExpansionOptions) -> Self {
        Self { options }
    }

    /// The options this interceptor was created with.
    #[must_use]
    pub const fn options(&self) -> ExpansionOptions {
        self.options
    }

    /// Transforms one request configuration.
    ///
    /// # Errors
    ///
    /// Returns `TemplateSyntaxError` if the selected template is malformed.
    pub fn apply<T>(
        &self,
        mut config: RequestConfig<T>,
    ) -> Result<RequestConfig<T>, TemplateSyntaxError> {
        let Some(template) = config.url_template.take().or_else(|| {
            self.options
                .url_as_template
                .then(|| config.url.clone())
                .flatten()
        }) else {
            tracing::trace!("no URL template to expand");
            return Ok(config);
        };

        let params = config.url_template_params.take().unwrap_or_default();
        let url = expand(&template, &params)?;
        tracing::debug!(template = %template, url = %url, "expanded request URL");

        Ok(RequestConfig {
            url: Some(url),
            url_template: Some(template),
            url_template_params: Some(params),
            ..config
        })
    }
}

/// Builds a standalone transformer function for `options`.
///
/// # Examples
///
/// ```
/// use urltpl_application::make_template_interceptor;
/// use urltpl_domain::{ExpansionOptions, RequestConfig, TemplateParams};
///
/// let interceptor = make_template_interceptor(ExpansionOptions::default());
/// let config: RequestConfig = RequestConfig::new()
///     .url("https://x.test/status/{status}")
///     .url_template_params(TemplateParams::new().with("status", 201));
///
/// let config = interceptor(config).unwrap();
/// assert_eq!(config.url.as_deref(), Some("https://x.test/status/201"));
/// assert_eq!(config.url_template.as_deref(), Some("https://x.test/status/{status}"));
/// ```
pub fn make_template_interceptor<T>(
    options: ExpansionOptions,
) -> impl Fn(RequestConfig<T>) -> Result<RequestConfig<T>, TemplateSyntaxError> + Clone + Send + Sync
{
    let interceptor = TemplateInterceptor::new(options);
    move |config| interceptor.apply(config)
}

/// Registers the transformer as a pre-request hook on `client`.
pub fn attach<T, R>(client: &mut R, options: ExpansionOptions)
where
    T: 'static,
    R: RequestHookRegistry<T> + ?Sized,
{
    let interceptor = TemplateInterceptor::new(options);
    client.add_request_hook(Box::new(move |config: RequestConfig<T>| {
        interceptor.apply(config).map_err(ApplicationError::from)
    }));
    tracing::debug!(
        url_as_template = options.url_as_template,
        "attached URL template interceptor"
    );
}
