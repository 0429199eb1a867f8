//! Backend connection configuration.
use std::env;

/// Base URL used when `API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Connection settings for the detection backend.
///
/// Read once at start-up and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `API_BASE_URL` - Backend base URL (default: `http://localhost:8000`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("API_BASE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            config.base_url = url;
        }

        config
    }

    /// Base URL with any trailing slashes removed.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_loopback() {
        let config = ApiConfig::from_lookup(lookup(&[]));
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn reads_base_url_override() {
        let config = ApiConfig::from_lookup(lookup(&[("API_BASE_URL", "http://nvr.lan:9000/")]));
        assert_eq!(config.base_url, "http://nvr.lan:9000/");
        assert_eq!(config.trimmed_base_url(), "http://nvr.lan:9000");
    }

    #[test]
    fn blank_override_keeps_default() {
        let config = ApiConfig::from_lookup(lookup(&[("API_BASE_URL", "   ")]));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn strips_every_trailing_slash() {
        let config = ApiConfig::new("http://host:8000///");
        assert_eq!(config.trimmed_base_url(), "http://host:8000");
    }
}
