use std::fmt;

use log::error;
use todo_core::Todo;

/// One todo plus its delete affordance.
///
/// The view never deletes anything itself; it hands the id to the caller.
#[derive(Debug, Clone, Copy)]
pub struct TodoItemView<'a> {
    todo: &'a Todo,
}

impl<'a> TodoItemView<'a> {
    pub fn new(todo: &'a Todo) -> Self {
        Self { todo }
    }

    pub fn todo(&self) -> &'a Todo {
        self.todo
    }

    /// Invoke `on_delete` with this item's id.
    ///
    /// A todo without an id cannot be deleted: the request is dropped and
    /// `false` is returned.
    pub fn request_delete<F>(&self, on_delete: F) -> bool
    where
        F: FnOnce(&str),
    {
        match self.todo.id() {
            Some(id) => {
                on_delete(id);
                true
            }
            None => {
                error!("Cannot delete todo without id: {:?}", self.todo);
                false
            }
        }
    }
}

impl fmt::Display for TodoItemView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.todo.id().unwrap_or("-"), self.todo.title)?;
        if !self.todo.description.is_empty() {
            write!(f, "\n    {}", self.todo.description)?;
        }
        Ok(())
    }
}
