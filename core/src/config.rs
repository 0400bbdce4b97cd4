//! # Client Configuration
//!
//! The only setting the workflow needs is where the REST backend lives. It is
//! fixed at build time because the client ships as a static bundle.

/// Backend used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Build-time variable overriding [`DEFAULT_API_BASE_URL`]
pub const API_URL_VAR: &str = "SPEECHDOWN_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value} (expected an http:// or https:// URL)")]
    InvalidBaseUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// Create a config for the given base URL, e.g. `https://speechdown.example/api`
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                var: API_URL_VAR,
                value: api_base_url.to_string(),
            });
        }
        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    /// Read `SPEECHDOWN_API_URL` as captured at compile time.
    ///
    /// An unset variable selects the default; a malformed one is an error.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_optional(option_env!("SPEECHDOWN_API_URL"))
    }

    fn from_optional(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Ok(Self::default()),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Join the base URL with an absolute API path such as `/activities/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = ClientConfig::from_optional(None).unwrap();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);

        let config = ClientConfig::from_optional(Some("  ")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://therapy.example/api/").unwrap();
        assert_eq!(config.api_base_url(), "https://therapy.example/api");
        assert_eq!(
            config.endpoint("/activities/abc/progress"),
            "https://therapy.example/api/activities/abc/progress"
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        let error = ClientConfig::from_optional(Some("ftp://example")).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidBaseUrl { .. }));
    }
}
