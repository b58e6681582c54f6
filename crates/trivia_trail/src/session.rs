//! Per-session game state: players, board, and the last dice roll.

use derive_getters::Getters;
use derive_more::{Display, Error, From};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use tracing::{debug, info, instrument, warn};
use trivia_board::{Board, BoardError, BoardSettings, ContentSource, Player, Record};

/// Name reserved for the computer opponent.
pub const COMPUTER_NAME: &str = "computer";

/// Faces on the die.
pub const DIE_SIDES: u8 = 6;

/// Colour of a pawn on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PawnColor {
    /// Red pawn.
    Red,
    /// Purple pawn.
    Purple,
}

impl PawnColor {
    /// Returns the colour left for the other player.
    #[instrument]
    pub fn other(self) -> Self {
        match self {
            Self::Red => Self::Purple,
            Self::Purple => Self::Red,
        }
    }
}

/// Why a session could not be started.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// No pawn colour was chosen.
    #[display("Choose a pawn before starting the game")]
    MissingPawn,
    /// The player name is empty.
    #[display("Enter a name before starting the game")]
    EmptyName,
    /// The player name is taken by the computer.
    #[display("The name '{}' is reserved for the computer", name)]
    ReservedName {
        /// The rejected name.
        name: String,
    },
    /// Board generation failed.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),
}

/// Outcome of one dice roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Roll {
    /// Number of pips rolled.
    value: u8,
    /// Human player's field after moving, if they are on the board.
    player_position: Option<usize>,
    /// Computer's field after moving, if it is on the board.
    computer_position: Option<usize>,
}

/// State of one game, passed explicitly through every command.
///
/// The board's field occupant lists are the only record of where each pawn
/// stands; `player` and `computer` hold the score counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// The human player.
    player: Player,
    /// The computer opponent.
    computer: Player,
    /// Colour of the human player's pawn. The computer has the other one.
    human_pawn: PawnColor,
    /// Last rolled value, if any roll happened.
    last_roll: Option<u8>,
}

impl Record for GameSession {}

impl GameSession {
    /// Validates the start form and creates a session with a fresh board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingPawn`] without a pawn,
    /// [`SessionError::EmptyName`] for a blank name,
    /// [`SessionError::ReservedName`] when the name is the computer's, and
    /// [`SessionError::Board`] if content pools cannot be loaded.
    #[instrument(skip(source, rng))]
    pub fn start<R: Rng + ?Sized>(
        name: &str,
        pawn: Option<PawnColor>,
        source: &impl ContentSource,
        settings: &BoardSettings,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let Some(human_pawn) = pawn else {
            warn!("Start rejected: no pawn chosen");
            return Err(SessionError::MissingPawn);
        };

        let name = name.trim();
        if name.is_empty() {
            warn!("Start rejected: empty name");
            return Err(SessionError::EmptyName);
        }

        if name.eq_ignore_ascii_case(COMPUTER_NAME) {
            warn!(name, "Start rejected: reserved name");
            return Err(SessionError::ReservedName {
                name: name.to_string(),
            });
        }

        let player = Player::new(name);
        let computer = Player::new(COMPUTER_NAME);
        let board = Board::new_game_with([player.clone(), computer.clone()], source, settings, rng)
            .map_err(BoardError::from)?;

        info!(player = name, pawn = %human_pawn, "Game session started");
        Ok(Self {
            board,
            player,
            computer,
            human_pawn,
            last_roll: None,
        })
    }

    /// Returns the computer's pawn colour.
    pub fn computer_pawn(&self) -> PawnColor {
        self.human_pawn.other()
    }

    /// Returns the field index the human player stands on.
    #[instrument(skip(self))]
    pub fn player_position(&self) -> Option<usize> {
        self.board.position_of(self.player.name())
    }

    /// Returns the field index the computer stands on.
    #[instrument(skip(self))]
    pub fn computer_position(&self) -> Option<usize> {
        self.board.position_of(self.computer.name())
    }

    /// Rolls the die and moves both pawns forward by the result.
    ///
    /// Pawns stop at the END field rather than overshooting it.
    #[instrument(skip(self, rng))]
    pub fn roll_dice<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Roll {
        let value = rng.gen_range(1..=DIE_SIDES);
        self.last_roll = Some(value);
        debug!(value, "Dice rolled");

        let steps = i32::from(value);
        let player_position = self.board.move_player(self.player.name(), steps);
        let computer_position = self.board.move_player(self.computer.name(), steps);

        info!(value, ?player_position, ?computer_position, "Pawns moved");
        Roll {
            value,
            player_position,
            computer_position,
        }
    }
}
