use crate::{AuthResponse, Session, User};

fn user() -> User {
    User {
        id: "u1".to_string(),
        name: "A".to_string(),
        email: "a@b.com".to_string(),
    }
}

#[test]
fn test_session_from_auth_response() {
    let response: AuthResponse = serde_json::from_str(
        r#"{"token":"t1","user":{"id":"u1","name":"A","email":"a@b.com"}}"#,
    )
    .unwrap();

    let session = Session::from(response);

    assert_eq!(session.token, "t1");
    assert_eq!(session.user, user());
}

#[test]
fn test_session_serializes_two_keys() {
    let session = Session::new("t1", user());
    let json = serde_json::to_value(&session).unwrap();

    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 2);
    assert_eq!(json["token"], "t1");
    assert_eq!(json["user"]["email"], "a@b.com");
}

#[test]
fn test_session_debug_redacts_token() {
    let session = Session::new("secret-token", user());

    let debug = format!("{session:?}");

    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("a@b.com"));
}
