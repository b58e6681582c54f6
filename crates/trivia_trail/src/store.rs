//! File-backed session storage.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use tracing::{debug, info, instrument};
use trivia_board::{MalformedDataError, Record};

use crate::GameSession;

/// Session storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<MalformedDataError> for StoreError {
    #[track_caller]
    fn from(err: MalformedDataError) -> Self {
        Self::new(format!("Stored session unreadable: {}", err.message))
    }
}

/// Keeps one serialized [`GameSession`] in a JSON file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store writing to `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored session, or `None` if nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or
    /// decoded.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<GameSession>, StoreError> {
        if !self.path.exists() {
            debug!("No stored session");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let session = GameSession::from_json(&content)?;
        debug!(fields = session.board().len(), "Session loaded");
        Ok(Some(session))
    }

    /// Writes the session, replacing any stored one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the session cannot be encoded or written.
    #[instrument(skip(self, session), fields(path = %self.path.display()))]
    pub fn save(&self, session: &GameSession) -> Result<(), StoreError> {
        let content = session.to_json()?;
        std::fs::write(&self.path, content)?;
        info!("Session saved");
        Ok(())
    }
}
