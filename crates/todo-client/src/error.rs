use crate::{ClientError, SessionError};

use thiserror::Error;
use todo_config::ConfigError;
use todo_core::CoreError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Validation(#[from] CoreError),

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not logged in. Run `todo login --email <EMAIL> --password <PASSWORD>` first.")]
    NotLoggedIn,

    #[error("{message}. Session expired or rejected, please log in again.")]
    SessionExpired { message: String },

    #[error("{message}")]
    Action { message: String },

    #[error("No todo with id '{id}'")]
    UnknownTodo { id: String },
}

impl CliError {
    pub fn action(message: impl Into<String>) -> Self {
        CliError::Action {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
