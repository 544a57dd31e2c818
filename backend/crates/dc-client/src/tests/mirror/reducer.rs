use crate::tests::fixtures::{profile, repo, user};
use crate::{
    ProfileError, ProfileEvent, ProfileState, SessionEvent, SessionState, reduce_profile,
    reduce_session,
};

use googletest::prelude::*;

#[test]
fn given_fresh_session_when_user_loaded_then_authenticated() {
    // Given
    let state = SessionState::new(Some("tok".to_string()));

    // When
    let state = reduce_session(state, &SessionEvent::UserLoaded(user("Ada")));

    // Then
    assert_that!(state.is_authenticated, some(eq(true)));
    assert_that!(state.is_loading, eq(false));
    assert_that!(state.token, some(eq("tok")));
    assert_that!(state.user.map(|u| u.name), some(eq("Ada")));
}

#[test]
fn given_no_token_when_login_succeeds_then_token_is_adopted() {
    let state = SessionState::new(None);

    let state = reduce_session(
        state,
        &SessionEvent::LoginSucceeded {
            token: "fresh".to_string(),
        },
    );

    assert_that!(state.token, some(eq("fresh")));
    assert_that!(state.is_authenticated, some(eq(true)));
}

#[test]
fn given_signed_in_session_when_any_session_ending_event_then_signed_out() {
    for event in [
        SessionEvent::RegisterFailed,
        SessionEvent::LoginFailed,
        SessionEvent::AuthFailed,
        SessionEvent::LoggedOut,
        SessionEvent::AccountDeleted,
    ] {
        // Given
        let signed_in = reduce_session(
            SessionState::new(Some("tok".to_string())),
            &SessionEvent::UserLoaded(user("Ada")),
        );

        // When
        let state = reduce_session(signed_in, &event);

        // Then
        assert_that!(event.ends_session(), eq(true));
        assert_that!(state, eq(&SessionState::signed_out()));
    }
}

#[test]
fn given_profile_state_when_loaded_then_aggregate_is_replaced_wholesale() {
    // Given
    let state = reduce_profile(ProfileState::default(), &ProfileEvent::Loaded(profile("Junior")));

    // When
    let state = reduce_profile(state, &ProfileEvent::Loaded(profile("Senior")));

    // Then
    assert_that!(state.profile, some(eq(&profile("Senior"))));
    assert_that!(state.is_loading, eq(false));
    assert_that!(state.last_error, none());
}

#[test]
fn given_loaded_profile_when_request_fails_then_error_is_recorded_and_profile_kept() {
    // Given
    let state = reduce_profile(ProfileState::default(), &ProfileEvent::Loaded(profile("Dev")));

    // When
    let state = reduce_profile(
        state,
        &ProfileEvent::Failed {
            message: "There is no profile for this user".to_string(),
            status: Some(400),
        },
    );

    // Then
    assert_that!(
        state.last_error,
        some(eq(&ProfileError {
            message: "There is no profile for this user".to_string(),
            status: Some(400),
        }))
    );
    assert_that!(state.profile, some(eq(&profile("Dev"))));
}

#[test]
fn given_everything_loaded_when_cleared_then_only_public_listing_survives() {
    // Given
    let mut state = ProfileState::default();
    for event in [
        ProfileEvent::Loaded(profile("Dev")),
        ProfileEvent::ListLoaded(vec![profile("Dev"), profile("Other")]),
        ProfileEvent::ReposLoaded(vec![repo("hello")]),
    ] {
        state = reduce_profile(state, &event);
    }

    // When
    let state = reduce_profile(state, &ProfileEvent::Cleared);

    // Then
    assert_that!(state.profile, none());
    assert_that!(state.external_repos, is_empty());
    assert_that!(state.all_profiles.len(), eq(2));
    assert_that!(state.is_loading, eq(false));
}

#[test]
fn given_initial_states_then_both_are_loading() {
    assert_that!(SessionState::new(None).is_loading, eq(true));
    assert_that!(SessionState::new(None).is_authenticated, none());
    assert_that!(ProfileState::default().is_loading, eq(true));
}
