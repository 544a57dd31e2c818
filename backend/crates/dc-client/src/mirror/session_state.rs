use dc_core::UserDto;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Bearer token; never printed
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// `None` until the server has answered whether the token is good
    pub is_authenticated: Option<bool>,
    pub is_loading: bool,
    pub user: Option<UserDto>,
}

impl SessionState {
    /// Start-up state for a process that found `token` on disk
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            is_authenticated: None,
            is_loading: true,
            user: None,
        }
    }

    /// The state every session-ending event leads to
    pub fn signed_out() -> Self {
        Self {
            token: None,
            is_authenticated: Some(false),
            is_loading: false,
            user: None,
        }
    }
}
