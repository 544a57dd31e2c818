use dc_core::{ProfileDto, RepoSummary, UserDto};

/// Outcomes of session requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    UserLoaded(UserDto),
    RegisterSucceeded { token: String },
    LoginSucceeded { token: String },
    RegisterFailed,
    LoginFailed,
    /// The server refused the stored token
    AuthFailed,
    LoggedOut,
    AccountDeleted,
}

impl SessionEvent {
    /// Events after which no one is signed in
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            Self::RegisterFailed
                | Self::LoginFailed
                | Self::AuthFailed
                | Self::LoggedOut
                | Self::AccountDeleted
        )
    }

    /// Token to persist, if this event grants one
    pub fn granted_token(&self) -> Option<&str> {
        match self {
            Self::RegisterSucceeded { token } | Self::LoginSucceeded { token } => Some(token),
            _ => None,
        }
    }
}

/// Outcomes of profile requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    /// The server's copy of one profile, after a read or an edit
    Loaded(ProfileDto),
    ListLoaded(Vec<ProfileDto>),
    ReposLoaded(Vec<RepoSummary>),
    Failed {
        message: String,
        status: Option<u16>,
    },
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Session(SessionEvent),
    Profile(ProfileEvent),
}

impl From<SessionEvent> for Event {
    fn from(event: SessionEvent) -> Self {
        Event::Session(event)
    }
}

impl From<ProfileEvent> for Event {
    fn from(event: ProfileEvent) -> Self {
        Event::Profile(event)
    }
}
