use crate::{EMPTY_HINT, EMPTY_TITLE, TodoListView};

use todo_core::Todo;

#[test]
fn test_empty_list_shows_hint() {
    let rendered = TodoListView::new(&[], None).to_string();

    assert!(rendered.contains(EMPTY_TITLE));
    assert!(rendered.contains(EMPTY_HINT));
}

#[test]
fn test_items_rendered_in_order() {
    let todos = vec![Todo::new("1", "First", ""), Todo::new("2", "Second", "")];

    let rendered = TodoListView::new(&todos, None).to_string();

    let first = rendered.find("[1] First").unwrap();
    let second = rendered.find("[2] Second").unwrap();
    assert!(first < second);
    assert!(!rendered.contains(EMPTY_TITLE));
}

#[test]
fn test_error_banner_rendered() {
    let rendered = TodoListView::new(&[], Some("Failed to add todo")).to_string();

    assert!(rendered.contains("! Failed to add todo"));
}
