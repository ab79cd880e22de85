pub(crate) mod add_todo_form;
pub(crate) mod auth_page;
pub(crate) mod navigation;
pub(crate) mod todo_list;

pub use add_todo_form::AddTodoForm;
pub use auth_page::{AuthMode, AuthPage, REGISTRATION_SUCCESS, REQUIRED_FIELDS_MISSING};
pub use navigation::{Navigation, Route};
pub use todo_list::{
    ADD_FAILED, DELETE_FAILED, LOAD_FAILED, LOGOUT_FAILED, TodoListController, ViewPhase,
};
