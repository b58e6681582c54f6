//! Content pools read from JSON files on disk.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_new::new;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use trivia_board::{ContentPoolUnavailableError, ContentPools, ContentSource};

/// A [`ContentSource`] backed by a questions file and a letters file.
///
/// Both files hold a JSON array of records. They are re-read on every
/// [`ContentSource::load`], so each game gets its own pools.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct JsonContentFiles {
    /// Path to the JSON array of questions.
    questions_path: PathBuf,
    /// Path to the JSON array of letters.
    letters_path: PathBuf,
}

impl ContentSource for JsonContentFiles {
    #[instrument(skip(self), fields(
        questions = %self.questions_path.display(),
        letters = %self.letters_path.display(),
    ))]
    fn load(&self) -> Result<ContentPools, ContentPoolUnavailableError> {
        let questions = read_pool(&self.questions_path)?;
        let letters = read_pool(&self.letters_path)?;
        info!(
            questions = questions.len(),
            letters = letters.len(),
            "Content pools loaded"
        );
        Ok(ContentPools::new(questions, letters))
    }
}

#[instrument(skip(path), fields(path = %path.display()))]
fn read_pool<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ContentPoolUnavailableError> {
    debug!("Reading content pool");
    let content = std::fs::read_to_string(path).map_err(|e| {
        warn!(error = %e, "Content pool file unreadable");
        ContentPoolUnavailableError::new(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        warn!(error = %e, "Content pool file malformed");
        ContentPoolUnavailableError::new(format!(
            "Failed to parse {}: {}",
            path.display(),
            e
        ))
    })
}
