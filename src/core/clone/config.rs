//! Configuration for the voice cloning generation API.

use url::Url;

// =============================================================================
// Constants
// =============================================================================

/// Path of the generation endpoint, relative to the service base URL.
pub const CLONE_ENDPOINT_PATH: &str = "/api/clone-voice";

/// Default service base URL (local development server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

// =============================================================================
// Clone API Configuration
// =============================================================================

/// Connection settings for the generation service.
///
/// # Example
///
/// ```rust
/// use voxclone_client::core::clone::CloneApiConfig;
///
/// let config = CloneApiConfig::new("https://voxclone.example.com");
/// assert_eq!(
///     config.endpoint_url(),
///     "https://voxclone.example.com/api/clone-voice"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CloneApiConfig {
    /// Base URL of the service; the fixed endpoint path is appended.
    pub base_url: String,

    /// Full endpoint override (for custom deployments). When set, the base
    /// URL and fixed path are ignored.
    pub custom_endpoint: Option<String>,
}

impl Default for CloneApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            custom_endpoint: None,
        }
    }
}

impl CloneApiConfig {
    /// Create a configuration pointing at the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// The URL generation requests are posted to.
    pub fn endpoint_url(&self) -> String {
        if let Some(ref custom) = self.custom_endpoint {
            return custom.clone();
        }

        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CLONE_ENDPOINT_PATH
        )
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Base URL is required".to_string());
        }

        let endpoint = self.endpoint_url();
        let parsed = Url::parse(&endpoint)
            .map_err(|e| format!("Invalid endpoint URL '{endpoint}': {e}"))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(format!(
                "Unsupported endpoint scheme '{other}' (expected http or https)"
            )),
        }
    }
}
