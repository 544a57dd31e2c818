use serde::{Deserialize, Serialize};

/// The fields of a GitHub repository listing that are passed through.
/// Unknown upstream fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}
