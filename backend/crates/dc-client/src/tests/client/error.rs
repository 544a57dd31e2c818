use crate::ClientError;

use dc_core::FieldError;

use std::panic::Location;

use error_location::ErrorLocation;

fn api_error(errors: Vec<FieldError>) -> ClientError {
    ClientError::Api {
        status: 400,
        code: "VALIDATION_ERROR".to_string(),
        message: "Title is required".to_string(),
        errors,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[test]
fn test_api_error_exposes_status_and_message() {
    let error = api_error(Vec::new());

    assert_eq!(error.status(), Some(400));
    assert_eq!(error.user_message(), "Title is required");
    assert_eq!(error.field_messages(), vec!["Title is required".to_string()]);
}

#[test]
fn test_field_messages_lists_every_rejected_field() {
    let error = api_error(vec![
        FieldError::new("title", "Title is required"),
        FieldError::new("from", "From date is required"),
    ]);

    assert_eq!(
        error.field_messages(),
        vec![
            "Title is required".to_string(),
            "From date is required".to_string()
        ]
    );
}

#[test]
fn test_json_error_has_no_status() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = ClientError::from_json(source);

    assert_eq!(error.status(), None);
    assert_eq!(error.user_message(), "Unexpected server response");
}
