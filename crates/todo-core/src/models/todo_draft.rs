use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Validated input for a new todo. Only constructible with a non-blank title.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TodoDraft {
    title: String,
    description: String,
}

impl TodoDraft {
    #[track_caller]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> CoreErrorResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "title is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            title,
            description: description.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
