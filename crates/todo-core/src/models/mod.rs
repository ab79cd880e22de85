pub mod api_response;
pub mod auth_response;
pub mod session;
pub mod todo;
pub mod todo_draft;
pub mod user;
