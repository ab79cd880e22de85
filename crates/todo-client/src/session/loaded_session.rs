use todo_core::Session;

/// Result of loading the session file - distinguishes "not found" from errors.
#[derive(Debug, Default)]
pub struct LoadedSession {
    pub session: Option<Session>,
    /// Present if the file exists but could not be parsed
    pub corruption_error: Option<String>,
}

impl LoadedSession {
    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
