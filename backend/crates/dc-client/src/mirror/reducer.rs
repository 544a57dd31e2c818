use crate::{ProfileError, ProfileEvent, ProfileState, SessionEvent, SessionState};

pub fn reduce_session(state: SessionState, event: &SessionEvent) -> SessionState {
    match event {
        SessionEvent::UserLoaded(user) => SessionState {
            is_authenticated: Some(true),
            is_loading: false,
            user: Some(user.clone()),
            ..state
        },
        SessionEvent::RegisterSucceeded { token } | SessionEvent::LoginSucceeded { token } => {
            SessionState {
                token: Some(token.clone()),
                is_authenticated: Some(true),
                is_loading: false,
                ..state
            }
        }
        SessionEvent::RegisterFailed
        | SessionEvent::LoginFailed
        | SessionEvent::AuthFailed
        | SessionEvent::LoggedOut
        | SessionEvent::AccountDeleted => SessionState::signed_out(),
    }
}

/// The aggregate is always replaced with the server's copy, never patched
pub fn reduce_profile(state: ProfileState, event: &ProfileEvent) -> ProfileState {
    match event {
        ProfileEvent::Loaded(profile) => ProfileState {
            profile: Some(profile.clone()),
            is_loading: false,
            last_error: None,
            ..state
        },
        ProfileEvent::ListLoaded(profiles) => ProfileState {
            all_profiles: profiles.clone(),
            is_loading: false,
            last_error: None,
            ..state
        },
        ProfileEvent::ReposLoaded(repos) => ProfileState {
            external_repos: repos.clone(),
            is_loading: false,
            last_error: None,
            ..state
        },
        ProfileEvent::Failed { message, status } => ProfileState {
            is_loading: false,
            last_error: Some(ProfileError {
                message: message.clone(),
                status: *status,
            }),
            ..state
        },
        // Public listings survive; everything tied to the signed-in user goes
        ProfileEvent::Cleared => ProfileState {
            profile: None,
            external_repos: Vec::new(),
            is_loading: false,
            last_error: None,
            all_profiles: state.all_profiles,
        },
    }
}
