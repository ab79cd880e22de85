pub(crate) mod todo_item;
pub(crate) mod todo_list;

pub use todo_item::TodoItemView;
pub use todo_list::{EMPTY_HINT, EMPTY_TITLE, TodoListView};
