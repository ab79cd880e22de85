use crate::view::TodoItemView;

use std::fmt;

use todo_core::Todo;

pub const EMPTY_TITLE: &str = "No tasks yet";
pub const EMPTY_HINT: &str = "Get started by adding a new task";

/// Plain-text rendering of the todo page
pub struct TodoListView<'a> {
    todos: &'a [Todo],
    error: Option<&'a str>,
}

impl<'a> TodoListView<'a> {
    pub fn new(todos: &'a [Todo], error: Option<&'a str>) -> Self {
        Self { todos, error }
    }
}

impl fmt::Display for TodoListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "My Tasks")?;

        if let Some(error) = self.error {
            writeln!(f, "! {error}")?;
        }

        if self.todos.is_empty() {
            writeln!(f, "{EMPTY_TITLE}")?;
            return writeln!(f, "{EMPTY_HINT}");
        }

        for todo in self.todos {
            writeln!(f, "{}", TodoItemView::new(todo))?;
        }

        Ok(())
    }
}
