use crate::client::operation::{Operation, OperationKind};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// login/register/logout answered with a non-2xx status
    #[error("{operation} (HTTP {status}) {location}")]
    Auth {
        operation: Operation,
        status: StatusCode,
        location: ErrorLocation,
    },

    /// Todo CRUD answered with a non-2xx status
    #[error("{operation} (HTTP {status}) {location}")]
    Fetch {
        operation: Operation,
        status: StatusCode,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Build the Auth or Fetch failure for a rejected call
    #[track_caller]
    pub fn from_status(operation: Operation, status: StatusCode) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match operation.kind() {
            OperationKind::Auth => ClientError::Auth {
                operation,
                status,
                location,
            },
            OperationKind::Fetch => ClientError::Fetch {
                operation,
                status,
                location,
            },
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_url(url: &str, message: impl Into<String>) -> Self {
        ClientError::InvalidUrl {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of a rejected call, if the backend answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth { status, .. } | Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend refused the credentials for this call
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Flat message suitable for a banner, without locations or sources
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { operation, .. } | Self::Fetch { operation, .. } => {
                operation.failure_message().to_string()
            }
            Self::Http { .. } => "Could not reach the server".to_string(),
            Self::Json { .. } => "Unexpected response from the server".to_string(),
            Self::InvalidUrl { url, .. } => format!("Invalid server URL: {url}"),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
