//! Remote calls paired with the mirror events they produce.
//!
//! Each action calls the server once and dispatches the event describing what
//! the server answered, plus any notification. Failures are dispatched first
//! and then returned so callers can report them.

use crate::{
    Client, ClientError, ClientResult, EducationForm, ExperienceForm, ProfileEvent, ProfileForm,
    SessionEvent, Store,
};

/// Resolve the stored token to its user
pub async fn load_user(store: &mut Store, client: &mut Client) -> ClientResult<()> {
    match client.load_user().await {
        Ok(user) => {
            store.dispatch(SessionEvent::UserLoaded(user));
            Ok(())
        }
        Err(e) => {
            // Only a server verdict ends the session; an unreachable server proves nothing
            if matches!(e, ClientError::Api { .. }) {
                store.dispatch(SessionEvent::AuthFailed);
                sync_token(store, client);
            } else {
                store.notifications.danger(e.user_message());
            }
            Err(e)
        }
    }
}

/// Bring the mirror from its start-up state to a definitive session. Without
/// a stored token there is nothing to ask the server. The outcome lands in
/// the mirror, including any notice.
pub async fn resume_session(store: &mut Store, client: &mut Client) {
    if store.token().is_none() {
        store.dispatch(SessionEvent::AuthFailed);
        return;
    }
    load_user(store, client).await.ok();
}

pub async fn register(
    store: &mut Store,
    client: &mut Client,
    name: &str,
    email: &str,
    password: &str,
) -> ClientResult<()> {
    match client.register(name, email, password).await {
        Ok(token) => {
            store.dispatch(SessionEvent::RegisterSucceeded { token });
            sync_token(store, client);
            load_user(store, client).await
        }
        Err(e) => {
            alert(store, &e);
            store.dispatch(SessionEvent::RegisterFailed);
            sync_token(store, client);
            Err(e)
        }
    }
}

pub async fn login(
    store: &mut Store,
    client: &mut Client,
    email: &str,
    password: &str,
) -> ClientResult<()> {
    match client.login(email, password).await {
        Ok(token) => {
            store.dispatch(SessionEvent::LoginSucceeded { token });
            sync_token(store, client);
            load_user(store, client).await
        }
        Err(e) => {
            alert(store, &e);
            store.dispatch(SessionEvent::LoginFailed);
            sync_token(store, client);
            Err(e)
        }
    }
}

/// Forget the token locally; tokens are not revoked server-side
pub fn logout(store: &mut Store, client: &mut Client) {
    store.dispatch(SessionEvent::LoggedOut);
    sync_token(store, client);
}

pub async fn get_current_profile(store: &mut Store, client: &Client) -> ClientResult<()> {
    let result = client.get_current_profile().await;
    settle(store, result.map(ProfileEvent::Loaded), None)
}

pub async fn get_profiles(store: &mut Store, client: &Client) -> ClientResult<()> {
    let result = client.get_profiles().await;
    settle(store, result.map(ProfileEvent::ListLoaded), None)
}

pub async fn get_profile_by_owner(
    store: &mut Store,
    client: &Client,
    owner_id: &str,
) -> ClientResult<()> {
    let result = client.get_profile_by_owner(owner_id).await;
    settle(store, result.map(ProfileEvent::Loaded), None)
}

pub async fn get_github_repos(store: &mut Store, client: &Client, handle: &str) -> ClientResult<()> {
    let result = client.get_github_repos(handle).await;
    settle(store, result.map(ProfileEvent::ReposLoaded), None)
}

/// `edit` only changes the wording of the success message
pub async fn create_profile(
    store: &mut Store,
    client: &Client,
    form: &ProfileForm,
    edit: bool,
) -> ClientResult<()> {
    let message = if edit { "Profile Updated" } else { "Profile Created" };
    let result = client.upsert_profile(form).await;
    settle(store, result.map(ProfileEvent::Loaded), Some(message))
}

pub async fn add_experience(
    store: &mut Store,
    client: &Client,
    form: &ExperienceForm,
) -> ClientResult<()> {
    let result = client.add_experience(form).await;
    settle(store, result.map(ProfileEvent::Loaded), Some("Experience Added"))
}

pub async fn add_education(
    store: &mut Store,
    client: &Client,
    form: &EducationForm,
) -> ClientResult<()> {
    let result = client.add_education(form).await;
    settle(store, result.map(ProfileEvent::Loaded), Some("Education Added"))
}

pub async fn delete_experience(store: &mut Store, client: &Client, id: &str) -> ClientResult<()> {
    let result = client.delete_experience(id).await;
    settle(store, result.map(ProfileEvent::Loaded), Some("Experience Removed"))
}

pub async fn delete_education(store: &mut Store, client: &Client, id: &str) -> ClientResult<()> {
    let result = client.delete_education(id).await;
    settle(store, result.map(ProfileEvent::Loaded), Some("Education Removed"))
}

/// Delete the profile and the account behind it
pub async fn delete_account(store: &mut Store, client: &mut Client) -> ClientResult<()> {
    match client.delete_account().await {
        Ok(_) => {
            store.dispatch(SessionEvent::AccountDeleted);
            sync_token(store, client);
            store
                .notifications
                .success("Your account has been permanently deleted");
            Ok(())
        }
        Err(e) => {
            alert(store, &e);
            fail(store, &e);
            Err(e)
        }
    }
}

/// Dispatch the outcome of a profile request. `success` is announced only
/// for edits; reads stay quiet on both paths.
fn settle(
    store: &mut Store,
    result: ClientResult<ProfileEvent>,
    success: Option<&str>,
) -> ClientResult<()> {
    match result {
        Ok(event) => {
            store.dispatch(event);
            if let Some(message) = success {
                store.notifications.success(message);
            }
            Ok(())
        }
        Err(e) => {
            if success.is_some() {
                alert(store, &e);
            }
            fail(store, &e);
            Err(e)
        }
    }
}

fn fail(store: &mut Store, e: &ClientError) {
    store.dispatch(ProfileEvent::Failed {
        message: e.user_message(),
        status: e.status(),
    });
}

fn alert(store: &mut Store, e: &ClientError) {
    for message in e.field_messages() {
        store.notifications.danger(message);
    }
}

/// Requests after a session change carry the mirror's current token
fn sync_token(store: &Store, client: &mut Client) {
    client.set_token(store.token());
}
