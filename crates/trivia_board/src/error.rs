//! Error types for board records and generation.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// A serialized record is missing required keys, has a key of the wrong
/// type, or holds a value outside its enumerated domain.
#[derive(Debug, Clone, Display, Error)]
#[display("Malformed data: {} at {}:{}", message, file, line)]
pub struct MalformedDataError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MalformedDataError {
    /// Creates a new malformed data error with caller location tracking.
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

impl From<serde_json::Error> for MalformedDataError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// The question and letter pools could not be supplied to board generation.
#[derive(Debug, Clone, Display, Error)]
#[display("Content pool unavailable: {} at {}:{}", message, file, line)]
pub struct ContentPoolUnavailableError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ContentPoolUnavailableError {
    /// Creates a new pool error with caller location tracking.
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

/// Any failure surfaced by the board core.
#[derive(Debug, Clone, Display, Error, From)]
pub enum BoardError {
    /// A record could not be decoded.
    #[display("{}", _0)]
    MalformedData(MalformedDataError),
    /// Content pools could not be loaded for a new game.
    #[display("{}", _0)]
    ContentPoolUnavailable(ContentPoolUnavailableError),
}
