//! Passthrough to the GitHub REST API for a user's public repositories.

use dc_config::GithubConfig;
use dc_core::RepoSummary;

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("GitHub request failed: {source} {location}")]
    Transport {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("GitHub responded with status {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("GitHub response could not be decoded: {source} {location}")]
    Decode {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Invalid GitHub handle '{handle}' {location}")]
    InvalidHandle {
        handle: String,
        location: ErrorLocation,
    },
}

pub struct GithubClient {
    base_url: String,
    page_size: u32,
    credentials: Option<(String, String)>,
    client: ReqwestClient,
}

impl GithubClient {
    /// Build a client with the configured timeout and User-Agent
    #[track_caller]
    pub fn new(config: &GithubConfig) -> Result<Self, GithubError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| GithubError::Transport {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let credentials = match (&config.client_id, &config.client_secret) {
            (Some(id), Some(secret)) => Some((id.clone(), secret.clone())),
            _ => None,
        };

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            credentials,
            client,
        })
    }

    /// Oldest-first public repositories of `handle`, at most one page
    pub async fn list_repos(&self, handle: &str) -> Result<Vec<RepoSummary>, GithubError> {
        if !is_valid_handle(handle) {
            return Err(GithubError::InvalidHandle {
                handle: handle.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let url = format!("{}/users/{}/repos", self.base_url, handle);
        let page_size = self.page_size.to_string();

        let mut req = self.client.get(&url).query(&[
            ("per_page", page_size.as_str()),
            ("sort", "created"),
            ("direction", "asc"),
        ]);

        if let Some((ref id, ref secret)) = self.credentials {
            req = req.basic_auth(id, Some(secret));
        }

        let response = req.send().await.map_err(|source| GithubError::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut repos: Vec<RepoSummary> =
            response.json().await.map_err(|source| GithubError::Decode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        repos.truncate(self.page_size as usize);
        Ok(repos)
    }
}

/// GitHub logins: alphanumerics and inner hyphens, at most 39 chars
fn is_valid_handle(handle: &str) -> bool {
    !handle.is_empty()
        && handle.len() <= 39
        && !handle.starts_with('-')
        && !handle.ends_with('-')
        && handle.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
