use crate::{ClientError, Operation, OperationKind};

use reqwest::StatusCode;

#[test]
fn test_auth_operations_produce_auth_errors() {
    for operation in [Operation::Login, Operation::Register, Operation::Logout] {
        assert_eq!(operation.kind(), OperationKind::Auth);
        let err = ClientError::from_status(operation, StatusCode::BAD_REQUEST);
        assert!(matches!(err, ClientError::Auth { .. }), "{operation:?}");
    }
}

#[test]
fn test_todo_operations_produce_fetch_errors() {
    for operation in [
        Operation::GetTodos,
        Operation::AddTodo,
        Operation::RemoveTodo,
    ] {
        assert_eq!(operation.kind(), OperationKind::Fetch);
        let err = ClientError::from_status(operation, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, ClientError::Fetch { .. }), "{operation:?}");
    }
}

#[test]
fn test_unauthorized_is_checked_by_status() {
    let unauthorized = ClientError::from_status(Operation::GetTodos, StatusCode::UNAUTHORIZED);
    let forbidden = ClientError::from_status(Operation::GetTodos, StatusCode::FORBIDDEN);

    assert!(unauthorized.is_unauthorized());
    assert!(!forbidden.is_unauthorized());
    assert_eq!(unauthorized.status(), Some(StatusCode::UNAUTHORIZED));
}

#[test]
fn test_user_message_is_flat() {
    let err = ClientError::from_status(Operation::Login, StatusCode::UNAUTHORIZED);

    assert_eq!(err.user_message(), "Login failed");
    assert!(err.to_string().starts_with("Login failed (HTTP 401"));
}

#[test]
fn test_failure_messages() {
    assert_eq!(Operation::Register.failure_message(), "Registration failed");
    assert_eq!(Operation::Logout.failure_message(), "Logout failed");
    assert_eq!(Operation::GetTodos.failure_message(), "Failed to fetch todos");
    assert_eq!(Operation::AddTodo.failure_message(), "Failed to add todo");
    assert_eq!(Operation::RemoveTodo.failure_message(), "Failed to delete todo");
}

#[test]
fn test_json_error_has_no_status() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: ClientError = json_err.into();

    assert!(matches!(err, ClientError::Json { .. }));
    assert_eq!(err.status(), None);
    assert!(!err.is_unauthorized());
    assert_eq!(err.user_message(), "Unexpected response from the server");
}
