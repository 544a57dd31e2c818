use dc_core::RepoSummary;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RepoListResponse {
    pub repos: Vec<RepoSummary>,
}
