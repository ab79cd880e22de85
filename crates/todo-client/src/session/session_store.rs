use crate::session::{LoadedSession, SessionError, SessionResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use todo_core::Session;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Durable storage for the session token and cached user.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the session file.
    ///
    /// Returns:
    /// - `Ok(LoadedSession { session: Some(...), corruption_error: None })` - loaded successfully
    /// - `Ok(LoadedSession { session: None, corruption_error: None })` - not logged in
    /// - `Ok(LoadedSession { session: None, corruption_error: Some(...) })` - file exists but corrupted
    pub fn load(&self) -> SessionResult<LoadedSession> {
        if !self.path.exists() {
            info!("No session file at {:?}", self.path);
            return Ok(LoadedSession::default());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| SessionError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                info!("Loaded session for {}", session.user.email);
                Ok(LoadedSession {
                    session: Some(session),
                    corruption_error: None,
                })
            }
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                Ok(LoadedSession {
                    session: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    /// Saves the session using atomic write pattern.
    ///
    /// 1. Writes to temp file (owner read/write only on unix)
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    pub fn save(&self, session: &Session) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();
        let json = serde_json::to_string_pretty(session)?;

        {
            let mut file = Self::create_private(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Saved session for {}", session.user.email);
        Ok(())
    }

    /// Removes the session file. Returns whether a file was removed.
    pub fn clear(&self) -> SessionResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared session at {:?}", self.path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SessionError::file_remove(self.path.clone(), e)),
        }
    }

    /// Backs up a corrupted session file for debugging.
    ///
    /// Renames `session.json` to `session.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> SessionResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = PathBuf::from(format!(
            "{}.corrupted.{timestamp}",
            self.path.display()
        ));

        fs::rename(&self.path, &backup_path).map_err(SessionError::backup_failed)?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(Some(backup_path))
    }

    fn temp_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}.tmp.{}",
            self.path.display(),
            std::process::id()
        ))
    }

    #[cfg(unix)]
    fn create_private(path: &Path) -> std::io::Result<fs::File> {
        use std::os::unix::fs::OpenOptionsExt;

        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
    }

    #[cfg(not(unix))]
    fn create_private(path: &Path) -> std::io::Result<fs::File> {
        fs::File::create(path)
    }
}
