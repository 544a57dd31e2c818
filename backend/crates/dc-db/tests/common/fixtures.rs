use dc_core::{NewEducation, NewExperience, ProfileFields};

use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fields accepted when creating a profile for the first time
pub fn initial_fields() -> ProfileFields {
    ProfileFields {
        company: Some("Acme".to_string()),
        status: Some("Developer".to_string()),
        skills: Some("HTML, CSS, JavaScript".to_string()),
        ..Default::default()
    }
}

pub fn create_test_experience(title: &str) -> NewExperience {
    NewExperience {
        title: title.to_string(),
        organization: "Acme".to_string(),
        location: Some("Remote".to_string()),
        from: date(2019, 5, 1),
        to: None,
        is_current: true,
        description: None,
    }
}

pub fn create_test_education(school: &str) -> NewEducation {
    NewEducation {
        school: school.to_string(),
        degree: "BSc".to_string(),
        field_of_study: "Computer Science".to_string(),
        from: date(2012, 9, 1),
        to: Some(date(2016, 6, 30)),
        is_current: false,
        description: None,
    }
}
