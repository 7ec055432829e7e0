//! Application configuration.
//!
//! `ClientConfig` is baked in at build time so the hydrated bundle and the
//! server render agree on the endpoints. `Config` (server only) is loaded
//! with `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default REST API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";

/// Default video-conferencing domain for live classes
pub const DEFAULT_MEET_DOMAIN: &str = "meet.jit.si";

/// Endpoints used by both the server render and the browser bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API base URL, without a trailing slash
    pub api_url: String,

    /// Hosted auth provider URL, without a trailing slash
    pub auth_url: String,

    /// Public (anon) key sent as the `apikey` header to the auth provider
    pub auth_anon_key: String,

    pub meet_domain: String,
}

impl ClientConfig {
    /// Configuration compiled into this build.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ZPLUSE_API_URL"),
            option_env!("ZPLUSE_AUTH_URL"),
            option_env!("ZPLUSE_AUTH_ANON_KEY"),
            option_env!("ZPLUSE_MEET_DOMAIN"),
        )
    }

    /// Build from optional raw values, applying defaults and trimming
    pub fn from_values(
        api_url: Option<&str>,
        auth_url: Option<&str>,
        auth_anon_key: Option<&str>,
        meet_domain: Option<&str>,
    ) -> Self {
        Self {
            api_url: url_or(api_url, DEFAULT_API_URL),
            auth_url: url_or(auth_url, ""),
            auth_anon_key: non_empty(auth_anon_key).unwrap_or_default().to_string(),
            meet_domain: non_empty(meet_domain)
                .unwrap_or(DEFAULT_MEET_DOMAIN)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Check if the hosted auth provider is configured
    pub fn has_auth_provider(&self) -> bool {
        !self.auth_url.is_empty()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn url_or(value: Option<&str>, default: &str) -> String {
    non_empty(value)
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}

/// Server settings loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime override of the REST API URL, reported at startup
    pub api_url: Option<String>,

    /// Hosted auth provider URL
    pub auth_url: Option<String>,

    /// Public key for the auth provider
    pub auth_anon_key: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("ZPLUSE_API_URL").ok(),
            auth_url: std::env::var("ZPLUSE_AUTH_URL").ok(),
            auth_anon_key: std::env::var("ZPLUSE_AUTH_ANON_KEY").ok(),
        }
    }

    /// Check if an API URL is configured
    pub fn has_api_url(&self) -> bool {
        self.api_url.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    /// Check if the auth provider URL is configured
    pub fn has_auth_url(&self) -> bool {
        self.auth_url.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    /// Check if the auth provider key is configured
    pub fn has_auth_anon_key(&self) -> bool {
        self.auth_anon_key
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Client endpoints with runtime values taking precedence over build-time ones
    pub fn client(&self) -> ClientConfig {
        let built = ClientConfig::from_build_env();
        ClientConfig::from_values(
            self.api_url.as_deref().or(Some(built.api_url.as_str())),
            self.auth_url.as_deref().or(Some(built.auth_url.as_str())),
            self.auth_anon_key
                .as_deref()
                .or(Some(built.auth_anon_key.as_str())),
            Some(built.meet_domain.as_str()),
        )
    }
}

#[cfg(feature = "ssr")]
impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // ClientConfig Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::from_values(None, None, None, None);

        assert_eq!(config.api_url, "http://localhost:5000/api/v1");
        assert_eq!(config.meet_domain, "meet.jit.si");
        assert!(config.auth_url.is_empty());
        assert!(config.auth_anon_key.is_empty());
        assert!(!config.has_auth_provider());
    }

    #[test]
    fn test_client_config_trims_trailing_slashes() {
        let config = ClientConfig::from_values(
            Some("https://api.zpluse.edu/api/v1/"),
            Some("https://auth.zpluse.edu/"),
            Some("anon-key"),
            Some("meet.zpluse.edu/"),
        );

        assert_eq!(config.api_url, "https://api.zpluse.edu/api/v1");
        assert_eq!(config.auth_url, "https://auth.zpluse.edu");
        assert_eq!(config.meet_domain, "meet.zpluse.edu");
        assert!(config.has_auth_provider());
    }

    #[test]
    fn test_client_config_blank_values_fall_back() {
        let config = ClientConfig::from_values(Some("   "), Some(""), Some(" "), Some(""));

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.meet_domain, DEFAULT_MEET_DOMAIN);
        assert!(config.auth_anon_key.is_empty());
    }

    // ========================================================================
    // Config Struct Tests
    // ========================================================================

    #[cfg(feature = "ssr")]
    #[test]
    fn test_has_helpers() {
        let config = Config {
            api_url: Some("http://api".to_string()),
            auth_url: Some("  ".to_string()),
            auth_anon_key: None,
        };

        assert!(config.has_api_url());
        assert!(!config.has_auth_url());
        assert!(!config.has_auth_anon_key());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_runtime_values_override_build_values() {
        let config = Config {
            api_url: Some("https://runtime.example/api/v1/".to_string()),
            auth_url: Some("https://auth.runtime.example".to_string()),
            auth_anon_key: Some("runtime-key".to_string()),
        };

        let client = config.client();
        assert_eq!(client.api_url, "https://runtime.example/api/v1");
        assert_eq!(client.auth_url, "https://auth.runtime.example");
        assert_eq!(client.auth_anon_key, "runtime-key");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_clone_and_debug() {
        let config = Config {
            api_url: None,
            auth_url: Some("https://auth".to_string()),
            auth_anon_key: None,
        };

        let cloned = config.clone();
        assert_eq!(cloned.auth_url, config.auth_url);
        assert!(format!("{:?}", config).contains("auth_url"));
    }
}
