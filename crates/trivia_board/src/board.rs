//! The board track: generation and position bookkeeping.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    ContentPoolUnavailableError, ContentSource, ContentType, Field, FieldContent, Player, Record,
};

/// Probabilities steering content placement during generation.
///
/// A chance `p` fires when a uniform draw from `[0, 1)` is below `p`, so
/// `0.0` never fires and `1.0` always does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Chance that an interior field is left plain.
    pub normal_field_chance: f64,
    /// Chance that a non-plain field gets a question rather than a letter.
    pub question_field_chance: f64,
}

impl BoardSettings {
    /// Default chance of a plain field.
    pub const NORMAL_FIELD_CHANCE: f64 = 0.5;
    /// Default chance of a question over a letter.
    pub const QUESTION_FIELD_CHANCE: f64 = 0.7;

    /// Creates settings with explicit chances.
    #[instrument]
    pub fn new(normal_field_chance: f64, question_field_chance: f64) -> Self {
        Self {
            normal_field_chance,
            question_field_chance,
        }
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::new(Self::NORMAL_FIELD_CHANCE, Self::QUESTION_FIELD_CHANCE)
    }
}

/// Linear board of fields from START to END.
///
/// Boards produced by [`Board::new_game`] always have [`Board::LENGTH`]
/// fields with plain START and END fields. Deserialization does not check
/// the length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    fields: Vec<Field>,
}

impl Board {
    /// Number of fields on a generated board, START and END included.
    pub const LENGTH: usize = 18;

    /// Index of the START field.
    pub const START: usize = 0;

    /// Index of the END field.
    pub const END: usize = Self::LENGTH - 1;

    /// Wraps an existing field sequence.
    #[instrument(skip(fields), fields(count = fields.len()))]
    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Generates a new board with default settings and the thread RNG.
    ///
    /// # Errors
    ///
    /// Returns [`ContentPoolUnavailableError`] if `source` cannot supply pools.
    #[instrument(skip(players, source))]
    pub fn new_game(
        players: impl IntoIterator<Item = Player>,
        source: &impl ContentSource,
    ) -> Result<Self, ContentPoolUnavailableError> {
        Self::new_game_with(
            players,
            source,
            &BoardSettings::default(),
            &mut rand::thread_rng(),
        )
    }

    /// Generates a new board with explicit settings and random source.
    ///
    /// Each of the interior fields is, independently: plain with
    /// `normal_field_chance` (or when both pools are empty); otherwise a
    /// question with `question_field_chance` (or when no letters remain);
    /// otherwise a letter. An exhausted question pool falls through to
    /// letters. Content is drawn uniformly without replacement.
    /// All `players` start on the START field.
    ///
    /// # Errors
    ///
    /// Returns [`ContentPoolUnavailableError`] if `source` cannot supply pools.
    /// No board is produced in that case.
    #[instrument(skip(players, source, rng))]
    pub fn new_game_with<R: Rng + ?Sized>(
        players: impl IntoIterator<Item = Player>,
        source: &impl ContentSource,
        settings: &BoardSettings,
        rng: &mut R,
    ) -> Result<Self, ContentPoolUnavailableError> {
        let (mut questions, mut letters) = source.load()?.dissolve();
        info!(
            questions = questions.len(),
            letters = letters.len(),
            "Generating new board"
        );

        let mut fields = Vec::with_capacity(Self::LENGTH);

        let mut start = Field::new();
        for player in players {
            start.add_player(player);
        }
        fields.push(start);

        for index in 1..Self::END {
            let pools_empty = questions.is_empty() && letters.is_empty();
            let field = if pools_empty || rng.r#gen::<f64>() < settings.normal_field_chance {
                Field::new()
            } else if !questions.is_empty()
                && (letters.is_empty() || rng.r#gen::<f64>() < settings.question_field_chance)
            {
                Field::with_content(FieldContent::Question(draw(&mut questions, rng)))
            } else {
                Field::with_content(FieldContent::Letter(draw(&mut letters, rng)))
            };
            debug!(index, content_type = %field.content_type(), "Interior field placed");
            fields.push(field);
        }

        fields.push(Field::new());

        info!(
            fields = fields.len(),
            questions_left = questions.len(),
            letters_left = letters.len(),
            "Board generated"
        );
        Ok(Self { fields })
    }

    /// Returns the fields in track order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the field at `index`.
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Returns the field at `index` for mutation.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the board has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Counts fields carrying the given tag.
    pub fn count(&self, content_type: ContentType) -> usize {
        self.fields
            .iter()
            .filter(|f| f.content_type() == content_type)
            .count()
    }

    /// Finds the index of the field the named player stands on.
    #[instrument(skip(self))]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.has_player(name))
    }

    /// Moves the named player by `steps` fields, clamped to the board ends.
    ///
    /// The player is taken off their current field and added to the target,
    /// so occupant lists stay the only record of positions. Returns the new
    /// index, or `None` if the player is not on the board.
    #[instrument(skip(self))]
    pub fn move_player(&mut self, name: &str, steps: i32) -> Option<usize> {
        let Some(from) = self.position_of(name) else {
            warn!("Player not on board");
            return None;
        };
        let last = self.fields.len().saturating_sub(1);
        let to = usize::try_from(i64::try_from(from).ok()? + i64::from(steps))
            .unwrap_or(0)
            .min(last);

        let player = self.fields[from].remove_player(name)?;
        self.fields[to].add_player(player);
        info!(from, to, "Player moved");
        Some(to)
    }
}

impl Record for Board {}

/// Removes and returns a uniformly chosen element.
///
/// Callers guarantee `pool` is non-empty.
fn draw<T, R: Rng + ?Sized>(pool: &mut Vec<T>, rng: &mut R) -> T {
    let index = rng.gen_range(0..pool.len());
    pool.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_draw_empties_pool_without_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool: Vec<i32> = (0..10).collect();
        let mut drawn: Vec<i32> = (0..10).map(|_| draw(&mut pool, &mut rng)).collect();
        drawn.sort_unstable();
        assert!(pool.is_empty());
        assert_eq!(drawn, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_move_player_clamps_at_both_ends() {
        let mut start = Field::new();
        start.add_player(Player::new("Ala"));
        let mut fields = vec![start];
        fields.extend((1..Board::LENGTH).map(|_| Field::new()));
        let mut board = Board::from_fields(fields);

        assert_eq!(board.move_player("Ala", 40), Some(Board::END));
        assert_eq!(board.move_player("Ala", -100), Some(Board::START));
        assert_eq!(board.move_player("Ola", 1), None);
    }
}
