//! Client settings
//!
//! Settings for the reqwest adapter, including the expansion options handed
//! to the URL template interceptor. Loadable from YAML.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use urltpl_domain::ExpansionOptions;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The YAML document could not be parsed.
    #[error("invalid client settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Settings for `ReqwestHttpClient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientSettings {
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Default request timeout.
    pub timeout_ms: u64,
    /// Redirects followed before giving up; `0` disables redirects.
    pub max_redirects: usize,
    /// Options for the URL template interceptor.
    pub expansion: ExpansionOptions,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            user_agent: concat!("urltpl/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            expansion: ExpansionOptions::default(),
        }
    }
}

impl ClientSettings {
    /// Parses settings from a YAML document; missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Parse` if the document is not valid YAML for
    /// these settings.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::default();
        assert_eq!(settings.timeout_ms, 30_000);
        assert_eq!(settings.max_redirects, 10);
        assert!(settings.expansion.url_as_template);
        assert!(settings.user_agent.starts_with("urltpl/"));
    }

    #[test]
    fn test_from_yaml_overrides_some_keys() {
        let settings = ClientSettings::from_yaml_str(
            "timeoutMs: 500\nexpansion:\n  urlAsTemplate: false\n",
        )
        .unwrap();

        assert_eq!(settings.timeout_ms, 500);
        assert_eq!(settings.max_redirects, 10);
        assert_eq!(settings.expansion, ExpansionOptions::explicit_only());
    }

    #[test]
    fn test_from_yaml_rejects_wrong_types() {
        let result = ClientSettings::from_yaml_str("timeoutMs: soon\n");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }
}
