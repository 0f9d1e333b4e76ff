//! Site configuration.
//!
//! On the server, load it with `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The server writes the API base into the document shell as
//! `<meta name="api-base-url">` so the hydrated client can read it back with
//! `Config::from_document()`.

/// Name of the meta tag carrying the API base URL to the browser
pub const API_BASE_META: &str = "api-base-url";

/// API base used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Site configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Base URL of the lead intake API
    /// Example: https://crm.example.com/api
    pub api_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("API_BASE_URL").ok())
    }

    /// Read the configuration the server published in the document head,
    /// falling back to the value baked in at compile time.
    #[cfg(not(feature = "ssr"))]
    pub fn from_document() -> Self {
        let from_meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));

        Self::resolve(from_meta, option_env!("API_BASE_URL"))
    }

    /// Published value first, then the compile-time value. Blank counts as unset.
    pub fn resolve(published: Option<String>, compiled: Option<&str>) -> Self {
        let published = Self::from_value(published);
        if published.has_api_base_url() {
            return published;
        }
        Self::from_value(compiled.map(String::from))
    }

    /// Blank values count as unset
    pub fn from_value(api_base_url: Option<String>) -> Self {
        Self {
            api_base_url: api_base_url
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }

    /// Check if the API base is configured
    pub fn has_api_base_url(&self) -> bool {
        self.api_base_url.is_some()
    }

    /// Value for the shell meta tag: empty when unset so the client keeps
    /// its own fallbacks
    pub fn published_api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or("")
    }

    /// Configured API base or the same-origin default
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_api_base() {
        let config = Config::from_value(Some("https://crm.example.com/api".to_string()));

        assert!(config.has_api_base_url());
        assert_eq!(config.api_base_url(), "https://crm.example.com/api");
    }

    #[test]
    fn test_config_without_api_base_uses_default() {
        let config = Config::from_value(None);

        assert!(!config.has_api_base_url());
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_value(Some("   ".to_string()));

        assert!(!config.has_api_base_url());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = Config::from_value(Some(" https://crm.example.com \n".to_string()));
        assert_eq!(config.api_base_url(), "https://crm.example.com");
    }

    #[test]
    fn test_config_from_env_matches_environment() {
        let config = Config::from_env();
        let expected = Config::from_value(std::env::var("API_BASE_URL").ok());

        assert_eq!(config, expected);
        assert!(!config.api_base_url().is_empty());
    }

    #[test]
    fn test_unset_server_publishes_blank_and_client_uses_compiled_base() {
        let server = Config::from_value(None);
        assert_eq!(server.published_api_base_url(), "");

        let client = Config::resolve(
            Some(server.published_api_base_url().to_string()),
            Some("https://crm.example.com/api"),
        );
        assert!(client.has_api_base_url());
        assert_eq!(client.api_base_url(), "https://crm.example.com/api");
    }

    #[test]
    fn test_published_base_wins_over_compiled() {
        let server = Config::from_value(Some("https://leads.example.com".to_string()));

        let client = Config::resolve(
            Some(server.published_api_base_url().to_string()),
            Some("https://crm.example.com/api"),
        );
        assert_eq!(client.api_base_url(), "https://leads.example.com");
    }

    #[test]
    fn test_nothing_configured_falls_back_to_default() {
        let client = Config::resolve(Some(String::new()), None);

        assert!(!client.has_api_base_url());
        assert_eq!(client.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_config_debug() {
        let config = Config::from_value(Some("https://crm.example.com".to_string()));
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("api_base_url"));
    }
}
