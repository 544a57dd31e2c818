use crate::{
    Event, Notifications, ProfileEvent, ProfileState, SessionState, TokenFile, reduce_profile,
    reduce_session,
};

/// Explicit state container owned by the top-level process
#[derive(Debug)]
pub struct Store {
    session: SessionState,
    profile: ProfileState,
    token_file: Option<TokenFile>,
    pub notifications: Notifications,
}

impl Store {
    /// `initial_token` is whatever was persisted by a previous run
    pub fn new(initial_token: Option<String>) -> Self {
        Self {
            session: SessionState::new(initial_token),
            profile: ProfileState::default(),
            token_file: None,
            notifications: Notifications::new(),
        }
    }

    /// Persist granted tokens to, and discard them from, `token_file`
    pub fn with_token_file(mut self, token_file: TokenFile) -> Self {
        self.token_file = Some(token_file);
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Apply one event. A session-ending event also clears the profile in the
    /// same step and discards the persisted token.
    pub fn dispatch(&mut self, event: impl Into<Event>) {
        match event.into() {
            Event::Session(event) => {
                let session = std::mem::replace(&mut self.session, SessionState::signed_out());
                self.session = reduce_session(session, &event);

                if event.ends_session() {
                    let profile = std::mem::take(&mut self.profile);
                    self.profile = reduce_profile(profile, &ProfileEvent::Cleared);
                    self.discard_token();
                } else if let Some(token) = event.granted_token() {
                    self.persist_token(token);
                }
            }
            Event::Profile(event) => {
                let profile = std::mem::take(&mut self.profile);
                self.profile = reduce_profile(profile, &event);
            }
        }
    }

    fn persist_token(&mut self, token: &str) {
        if let Some(ref file) = self.token_file
            && let Err(e) = file.save(token)
        {
            self.notifications.danger(e.user_message());
        }
    }

    fn discard_token(&mut self) {
        if let Some(ref file) = self.token_file
            && let Err(e) = file.discard()
        {
            self.notifications.danger(e.user_message());
        }
    }
}
