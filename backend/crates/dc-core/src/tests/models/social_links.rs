use crate::SocialLinks;

use googletest::prelude::*;

#[test]
fn given_default_links_when_empty_patch_merged_then_nothing_changes() {
    let mut links = SocialLinks::default();

    links.merge(SocialLinks {
        facebook: Some(String::new()),
        ..Default::default()
    });

    assert_that!(links, eq(&SocialLinks::default()));
}

#[test]
fn given_links_when_patch_has_value_then_only_that_link_overwritten() {
    let mut links = SocialLinks {
        linkedin: Some("in/a".to_string()),
        instagram: Some("ig/a".to_string()),
        ..Default::default()
    };

    links.merge(SocialLinks {
        instagram: Some("ig/b".to_string()),
        ..Default::default()
    });

    assert_that!(links.linkedin, some(eq("in/a")));
    assert_that!(links.instagram, some(eq("ig/b")));
}
