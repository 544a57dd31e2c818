use crate::tests::fixtures::{profile, user};
use crate::{NotificationKind, ProfileEvent, SessionEvent, Store, TokenFile};

use googletest::prelude::*;
use tempfile::TempDir;

fn store_with_file(initial: Option<&str>) -> (TempDir, TokenFile, Store) {
    let dir = TempDir::new().unwrap();
    let file = TokenFile::new(dir.path().join("token"));
    if let Some(token) = initial {
        file.save(token).unwrap();
    }
    let store = Store::new(file.load().unwrap()).with_token_file(file.clone());
    (dir, file, store)
}

#[test]
fn given_persisted_token_when_store_created_then_session_carries_it() {
    let (_dir, _file, store) = store_with_file(Some("persisted"));

    assert_that!(store.token(), some(eq("persisted")));
    assert_that!(store.session().is_authenticated, none());
}

#[test]
fn given_login_success_when_dispatched_then_token_is_persisted() {
    // Given
    let (_dir, file, mut store) = store_with_file(None);

    // When
    store.dispatch(SessionEvent::LoginSucceeded {
        token: "granted".to_string(),
    });

    // Then
    assert_that!(file.load().unwrap(), some(eq("granted")));
    assert_that!(store.token(), some(eq("granted")));
}

#[test]
fn given_signed_in_with_profile_when_logged_out_then_both_reset_and_token_discarded() {
    // Given
    let (_dir, file, mut store) = store_with_file(Some("tok"));
    store.dispatch(SessionEvent::UserLoaded(user("Ada")));
    store.dispatch(ProfileEvent::Loaded(profile("Dev")));

    // When
    store.dispatch(SessionEvent::LoggedOut);

    // Then
    assert_that!(store.session().is_authenticated, some(eq(false)));
    assert_that!(store.session().user, none());
    assert_that!(store.profile().profile, none());
    assert_that!(file.load().unwrap(), none());
}

#[test]
fn given_profile_loaded_when_account_deleted_then_profile_is_cleared() {
    let (_dir, file, mut store) = store_with_file(Some("tok"));
    store.dispatch(ProfileEvent::Loaded(profile("Dev")));

    store.dispatch(SessionEvent::AccountDeleted);

    assert_that!(store.profile().profile, none());
    assert_that!(store.token(), none());
    assert_that!(file.load().unwrap(), none());
}

#[test]
fn given_profile_event_when_dispatched_then_session_is_untouched() {
    let (_dir, _file, mut store) = store_with_file(Some("tok"));
    let before = store.session().clone();

    store.dispatch(ProfileEvent::Failed {
        message: "Server error".to_string(),
        status: Some(500),
    });

    assert_that!(store.session(), eq(&before));
}

#[test]
fn given_unwritable_token_path_when_login_succeeds_then_danger_is_queued() {
    // Given: the token path is a directory
    let dir = TempDir::new().unwrap();
    let mut store = Store::new(None).with_token_file(TokenFile::new(dir.path().to_path_buf()));

    // When
    store.dispatch(SessionEvent::LoginSucceeded {
        token: "granted".to_string(),
    });

    // Then
    let notifications = store.notifications.drain();
    assert_that!(notifications.len(), eq(1));
    assert_that!(notifications[0].kind, eq(NotificationKind::Danger));
    assert_that!(store.token(), some(eq("granted")));
}

#[test]
fn given_store_without_token_file_when_session_ends_then_nothing_fails() {
    let mut store = Store::new(Some("tok".to_string()));

    store.dispatch(SessionEvent::AuthFailed);

    assert_that!(store.token(), none());
    assert_that!(store.notifications.is_empty(), eq(true));
}
