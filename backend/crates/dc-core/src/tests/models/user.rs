use crate::{User, UserDto, gravatar_url};

use googletest::prelude::*;

#[test]
fn given_mixed_case_email_when_user_created_then_email_normalized() {
    let user = User::new("Ada".to_string(), "  Ada@Example.COM ", "hash".to_string());

    assert_that!(user.email, eq("ada@example.com"));
    assert_that!(user.avatar, eq(&gravatar_url("ada@example.com")));
}

#[test]
fn given_email_when_gravatar_built_then_sha256_hex_with_options() {
    let url = gravatar_url("ada@example.com");

    assert_that!(url, starts_with("https://www.gravatar.com/avatar/"));
    assert_that!(url, ends_with("?s=200&r=pg&d=mm"));
    let hash = url
        .trim_start_matches("https://www.gravatar.com/avatar/")
        .trim_end_matches("?s=200&r=pg&d=mm");
    assert_that!(hash.len(), eq(64));
    assert_that!(gravatar_url("ADA@example.com "), eq(&url));
}

#[test]
fn given_user_when_converted_to_dto_then_hash_not_exposed() {
    let user = User::new("Ada".to_string(), "ada@example.com", "secret-hash".to_string());
    let id = user.id.to_string();

    let json = serde_json::to_string(&UserDto::from(user)).unwrap();

    assert_that!(json, not(contains_substring("secret-hash")));
    assert_that!(json, contains_substring(id.as_str()));
}
