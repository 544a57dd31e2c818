use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8000", Some("abc.def.ghi"));
    assert_eq!(client.token, Some("abc.def.ghi".to_string()));
}

#[test]
fn test_set_token_replaces_and_clears() {
    let mut client = Client::new("http://localhost:8000", Some("old"));

    client.set_token(Some("new"));
    assert_eq!(client.token.as_deref(), Some("new"));

    client.set_token(None);
    assert!(client.token.is_none());
}
