use crate::Todo;

#[test]
fn test_todo_deserializes_backend_record() {
    let todo: Todo =
        serde_json::from_str(r#"{"id":"1","title":"X","description":"Y"}"#).unwrap();

    assert_eq!(todo, Todo::new("1", "X", "Y"));
    assert_eq!(todo.id(), Some("1"));
}

#[test]
fn test_todo_accepts_underscore_id() {
    let todo: Todo =
        serde_json::from_str(r#"{"_id":"abc","title":"X","description":"Y"}"#).unwrap();

    assert_eq!(todo.id(), Some("abc"));
}

#[test]
fn test_todo_missing_id_and_description() {
    let todo: Todo = serde_json::from_str(r#"{"title":"X"}"#).unwrap();

    assert!(todo.id.is_none());
    assert_eq!(todo.id(), None);
    assert_eq!(todo.description, "");
}

#[test]
fn test_todo_empty_id_is_treated_as_missing() {
    let todo = Todo {
        id: Some(String::new()),
        title: "X".to_string(),
        description: String::new(),
    };

    assert_eq!(todo.id(), None);
    assert!(!todo.has_id(""));
}

#[test]
fn test_todo_has_id() {
    let todo = Todo::new("7", "X", "Y");

    assert!(todo.has_id("7"));
    assert!(!todo.has_id("8"));
}
