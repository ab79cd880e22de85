//! todo-client library
//!
//! HTTP client for the todo backend, the session store, and the page
//! controllers the `todo` binary drives.

pub mod cli;
pub(crate) mod client;
pub(crate) mod controller;
pub(crate) mod error;
pub mod logger;
pub(crate) mod runner;
pub(crate) mod session;
pub(crate) mod view;


pub use client::{
    Client, ClientError, ClientResult, DEFAULT_SESSION_COOKIE, Operation, OperationKind,
    TodoBackend,
};
pub use controller::{
    ADD_FAILED, AddTodoForm, AuthMode, AuthPage, DELETE_FAILED, LOAD_FAILED, LOGOUT_FAILED,
    Navigation, REGISTRATION_SUCCESS, REQUIRED_FIELDS_MISSING, Route, TodoListController,
    ViewPhase,
};
pub use error::{CliError, Result as CliResult};
pub use runner::Runner;
pub use session::{LoadedSession, SessionError, SessionResult, SessionStore};
pub use view::{EMPTY_HINT, EMPTY_TITLE, TodoItemView, TodoListView};
