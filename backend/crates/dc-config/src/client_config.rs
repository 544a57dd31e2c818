use crate::{ConfigError, ConfigErrorResult, DEFAULT_SERVER_URL};

use serde::Deserialize;

/// Settings for the `dc` command-line client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(ConfigError::client(format!(
                "client.server_url must be an http(s) URL, got '{}'",
                self.server_url
            )));
        }

        Ok(())
    }
}
