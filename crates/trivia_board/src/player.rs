//! Player record.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Record;

/// A player in a game: a name and two score counters.
///
/// Players are identified by name within a game. Uniqueness and
/// non-emptiness of names are checked by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Player's name.
    name: String,
    /// Jug counter.
    #[serde(default)]
    jug: u32,
    /// Star counter.
    #[serde(default)]
    star: u32,
}

impl Player {
    /// Creates a new player with both counters at zero.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_counters(name, 0, 0)
    }

    /// Creates a player with explicit counter values.
    #[instrument(skip(name))]
    pub fn with_counters(name: impl Into<String>, jug: u32, star: u32) -> Self {
        Self {
            name: name.into(),
            jug,
            star,
        }
    }

    /// Increments the jug counter.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn add_jug(&mut self) {
        self.jug += 1;
        debug!(jug = self.jug, "Jug added");
    }

    /// Increments the star counter.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn add_star(&mut self) {
        self.star += 1;
        debug!(star = self.star, "Star added");
    }
}

impl Record for Player {}
