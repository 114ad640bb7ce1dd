//! Client configuration

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "NMP_API_URL";

/// Default backend host, used when no override is set
pub const DEFAULT_BASE_URL: &str = "https://nonprofit-management-api.example.workers.dev";

/// API client configuration
///
/// The base URL is read once at client construction and never re-resolved.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, no trailing slash
    pub base_url: String,
}

impl ClientConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from the environment, falling back to the default host
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new().with_base_url(base_url)
    }

    /// With an explicit base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
