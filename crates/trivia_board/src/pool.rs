//! Content pools consumed by board generation.

use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{ContentPoolUnavailableError, Letter, Question};

/// The questions and letters available to place on a new board.
///
/// Generation draws from the pools without replacement, so a
/// [`ContentPools`] is consumed by the board it seeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Dissolve)]
pub struct ContentPools {
    /// Questions not yet placed.
    questions: Vec<Question>,
    /// Letters not yet placed.
    letters: Vec<Letter>,
}

impl ContentPools {
    /// Creates pools from question and letter lists.
    #[instrument(skip(questions, letters), fields(questions = questions.len(), letters = letters.len()))]
    pub fn new(questions: Vec<Question>, letters: Vec<Letter>) -> Self {
        Self { questions, letters }
    }

    /// Returns `true` if both pools are exhausted.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.letters.is_empty()
    }
}

/// Supplies fresh, owned content pools for each new game.
///
/// Each call to [`ContentSource::load`] must return pools that no other game
/// shares, since generation mutates them.
pub trait ContentSource {
    /// Loads a fresh copy of the pools.
    ///
    /// # Errors
    ///
    /// Returns [`ContentPoolUnavailableError`] if the pools cannot be supplied.
    fn load(&self) -> Result<ContentPools, ContentPoolUnavailableError>;
}

impl ContentSource for ContentPools {
    #[instrument(skip(self))]
    fn load(&self) -> Result<ContentPools, ContentPoolUnavailableError> {
        debug!(
            questions = self.questions.len(),
            letters = self.letters.len(),
            "Cloning in-memory content pools"
        );
        Ok(self.clone())
    }
}
