use std::env;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:6005/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub access_token: Option<String>,
    pub user_id: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("CLINIC_API_URL")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_API_URL not set, using default {}", DEFAULT_API_URL);
                    DEFAULT_API_URL.to_string()
                }),
            access_token: env::var("CLINIC_ACCESS_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            user_id: env::var("CLINIC_USER_ID")
                .unwrap_or_else(|_| "local".to_string()),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - CLINIC_API_URL is not an http(s) URL");
        }

        if config.access_token.is_none() {
            warn!("CLINIC_ACCESS_TOKEN not set, appointment management stays inactive");
        }

        config
    }

    /// Build a config pointing at an explicit base URL, mostly for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            access_token: None,
            user_id: "local".to_string(),
        }
    }

    /// Whether the API base URL is usable: non-empty and http(s).
    pub fn is_configured(&self) -> bool {
        let url = self.api_base_url.trim();
        !url.is_empty() && (url.starts_with("http://") || url.starts_with("https://"))
    }
}
