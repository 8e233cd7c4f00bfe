//! Template expansion options

use serde::{Deserialize, Serialize};

/// Options controlling when a request URL is treated as a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpansionOptions {
    /// Treat a literal `url` as a template when no explicit `url_template` is given.
    pub url_as_template: bool,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            url_as_template: true,
        }
    }
}

impl ExpansionOptions {
    /// Creates options with the given `url_as_template` flag.
    #[must_use]
    pub const fn new(url_as_template: bool) -> Self {
        Self { url_as_template }
    }

    /// Options that only ever expand an explicit `url_template`.
    #[must_use]
    pub const fn explicit_only() -> Self {
        Self::new(false)
    }
}
