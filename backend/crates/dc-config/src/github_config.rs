use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GITHUB_API_BASE_URL, DEFAULT_GITHUB_PAGE_SIZE,
    DEFAULT_GITHUB_TIMEOUT_SECS, DEFAULT_GITHUB_USER_AGENT, MAX_GITHUB_PAGE_SIZE,
    MAX_GITHUB_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Upstream used to list a user's public repositories
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_GITHUB_API_BASE_URL),
            page_size: DEFAULT_GITHUB_PAGE_SIZE,
            timeout_secs: DEFAULT_GITHUB_TIMEOUT_SECS,
            user_agent: String::from(DEFAULT_GITHUB_USER_AGENT),
            client_id: None,
            client_secret: None,
        }
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_base_url", &self.api_base_url)
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GithubConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::github(format!(
                "github.api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if !(1..=MAX_GITHUB_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::github(format!(
                "github.page_size must be 1-{}, got {}",
                MAX_GITHUB_PAGE_SIZE, self.page_size
            )));
        }

        if !(1..=MAX_GITHUB_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::github(format!(
                "github.timeout_secs must be 1-{}, got {}",
                MAX_GITHUB_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.client_id.is_some() != self.client_secret.is_some() {
            return Err(ConfigError::github(
                "github.client_id and github.client_secret must be set together",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
