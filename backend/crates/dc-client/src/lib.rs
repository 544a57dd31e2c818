//! dc-client library
//!
//! HTTP client for dc-server, the client-side state mirror and the `dc` CLI
//! definitions.

pub mod actions;
pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod education_commands;
pub mod experience_commands;
pub mod mirror;
pub(crate) mod notifications;
pub mod profile_commands;
pub(crate) mod token_file;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{
    Client, ClientError, ClientResult, EducationForm, ExperienceForm, ProfileForm,
};
pub use commands::Commands;
pub use mirror::{
    events::{Event, ProfileEvent, SessionEvent},
    profile_state::{ProfileError, ProfileState},
    reducer::{reduce_profile, reduce_session},
    session_state::SessionState,
    store::Store,
};
pub use notifications::{Notification, NotificationKind, Notifications};
pub use token_file::TokenFile;
