use crate::{NewEducation, NewExperience, Profile, ProfileFields, SocialLinks};

use chrono::NaiveDate;
use googletest::prelude::*;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn experience(title: &str) -> NewExperience {
    NewExperience {
        title: title.to_string(),
        organization: "Acme".to_string(),
        location: None,
        from: date(2020, 1, 1),
        to: None,
        is_current: true,
        description: None,
    }
}

fn education(school: &str) -> NewEducation {
    NewEducation {
        school: school.to_string(),
        degree: "BSc".to_string(),
        field_of_study: "CS".to_string(),
        from: date(2012, 9, 1),
        to: Some(date(2016, 6, 1)),
        is_current: false,
        description: None,
    }
}

#[test]
fn given_create_with_partial_fields_when_created_then_absent_fields_stay_unset() {
    let owner = Uuid::new_v4();
    let profile = Profile::create(
        owner,
        ProfileFields {
            status: Some("Developer".to_string()),
            skills: Some("rust, go".to_string()),
            ..Default::default()
        },
    );

    assert_that!(profile.owner_id, eq(owner));
    assert_that!(profile.status, some(eq("Developer")));
    assert_that!(profile.skills, elements_are![eq("rust"), eq("go")]);
    assert_that!(profile.company, none());
    assert_that!(profile.bio, none());
    assert_that!(profile.experience, is_empty());
    assert_that!(profile.education, is_empty());
}

#[test]
fn given_existing_profile_when_location_only_applied_then_other_fields_preserved() {
    let mut profile = Profile::create(
        Uuid::new_v4(),
        ProfileFields {
            company: Some("Acme".to_string()),
            status: Some("Developer".to_string()),
            skills: Some("rust".to_string()),
            ..Default::default()
        },
    );
    profile.add_experience(experience("Engineer"));
    let before = profile.clone();

    profile.apply(ProfileFields {
        location: Some("Berlin".to_string()),
        ..Default::default()
    });

    assert_that!(profile.location, some(eq("Berlin")));
    assert_that!(profile.company, eq(&before.company));
    assert_that!(profile.status, eq(&before.status));
    assert_that!(profile.skills, eq(&before.skills));
    assert_that!(profile.experience, eq(&before.experience));
    assert_that!(profile.updated_at, ge(before.updated_at));
}

#[test]
fn given_empty_string_field_when_applied_then_treated_as_absent() {
    let mut profile = Profile::create(
        Uuid::new_v4(),
        ProfileFields {
            bio: Some("hello".to_string()),
            skills: Some("rust".to_string()),
            ..Default::default()
        },
    );

    profile.apply(ProfileFields {
        bio: Some(String::new()),
        skills: Some(String::new()),
        ..Default::default()
    });

    assert_that!(profile.bio, some(eq("hello")));
    assert_that!(profile.skills, elements_are![eq("rust")]);
}

#[test]
fn given_skills_with_padding_when_applied_then_trimmed_and_empties_dropped() {
    let mut profile = Profile::new(Uuid::new_v4());

    profile.apply(ProfileFields {
        skills: Some(" HTML , CSS,, JavaScript ,".to_string()),
        ..Default::default()
    });

    assert_that!(
        profile.skills,
        elements_are![eq("HTML"), eq("CSS"), eq("JavaScript")]
    );
}

#[test]
fn given_social_links_when_partial_social_applied_then_merged_one_level_deep() {
    let mut profile = Profile::create(
        Uuid::new_v4(),
        ProfileFields {
            social: SocialLinks {
                twitter: Some("https://twitter.com/a".to_string()),
                youtube: Some("https://youtube.com/a".to_string()),
                ..Default::default()
            },
            ..Default::default()
        },
    );

    profile.apply(ProfileFields {
        social: SocialLinks {
            twitter: Some("https://twitter.com/b".to_string()),
            ..Default::default()
        },
        ..Default::default()
    });

    assert_that!(profile.social.twitter, some(eq("https://twitter.com/b")));
    assert_that!(profile.social.youtube, some(eq("https://youtube.com/a")));
    assert_that!(profile.social.linkedin, none());
}

#[test]
fn given_two_experiences_when_added_then_newest_is_first() {
    let mut profile = Profile::new(Uuid::new_v4());

    let first = profile.add_experience(experience("Junior"));
    let second = profile.add_experience(experience("Senior"));

    assert_that!(profile.experience.len(), eq(2));
    assert_that!(profile.experience[0].id, eq(second));
    assert_that!(profile.experience[0].title, eq("Senior"));
    assert_that!(profile.experience[1].id, eq(first));
}

#[test]
fn given_added_experience_when_removed_then_previous_sequence_restored() {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.add_experience(experience("Junior"));
    let before = profile.experience.clone();

    let id = profile.add_experience(experience("Senior"));
    let removed = profile.remove_experience(id);

    assert_that!(removed, eq(true));
    assert_that!(profile.experience, eq(&before));
}

#[test]
fn given_unknown_identifier_when_removing_experience_then_profile_unchanged() {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.add_experience(experience("Junior"));
    let before = profile.clone();

    let removed = profile.remove_experience(Uuid::new_v4());

    assert_that!(removed, eq(false));
    assert_that!(profile, eq(&before));
}

#[test]
fn given_education_entries_when_adding_and_removing_then_head_insert_and_removal_by_id() {
    let mut profile = Profile::new(Uuid::new_v4());
    let a = profile.add_education(education("MIT"));
    let b = profile.add_education(education("Stanford"));

    assert_that!(profile.education[0].id, eq(b));
    assert_that!(profile.remove_education(a), eq(true));
    assert_that!(profile.education.len(), eq(1));
    assert_that!(profile.education[0].school, eq("Stanford"));
    assert_that!(profile.remove_education(a), eq(false));
}

#[test]
fn given_entries_when_added_then_identifiers_are_unique() {
    let mut profile = Profile::new(Uuid::new_v4());

    let a = profile.add_experience(experience("One"));
    let b = profile.add_experience(experience("Two"));

    assert_that!(a, not(eq(b)));
}

#[test]
fn given_fields_without_status_or_skills_when_checked_for_create_then_both_reported() {
    // Given
    let fields = ProfileFields {
        company: Some("Acme".to_string()),
        skills: Some("   ".to_string()),
        ..Default::default()
    };

    // When
    let error = fields.check_creatable().unwrap_err();

    // Then
    let rejected: Vec<_> = error
        .field_errors()
        .iter()
        .filter_map(|e| e.field.clone())
        .collect();
    assert_that!(rejected, elements_are![eq("status"), eq("skills")]);
}
