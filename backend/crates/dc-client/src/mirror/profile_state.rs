use dc_core::{ProfileDto, RepoSummary};

use serde::Serialize;

/// Last failed profile request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileError {
    pub message: String,
    /// `None` when the server was never reached
    pub status: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileState {
    /// The profile being viewed or edited
    pub profile: Option<ProfileDto>,
    pub all_profiles: Vec<ProfileDto>,
    pub external_repos: Vec<RepoSummary>,
    pub is_loading: bool,
    pub last_error: Option<ProfileError>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: None,
            all_profiles: Vec::new(),
            external_repos: Vec::new(),
            is_loading: true,
            last_error: None,
        }
    }
}
