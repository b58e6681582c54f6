//! Trivia board core - board generation and session-state records.
//!
//! A game is played on a linear track of [`Board::LENGTH`] fields. Interior
//! fields may carry a trivia [`Question`] or a movement [`Letter`]; the START
//! and END fields are always plain.
//!
//! # Architecture
//!
//! - **Records**: [`Player`], [`Question`], [`Letter`], [`Field`] and
//!   [`Board`] serialize to fixed JSON shapes via [`Record`]
//! - **Generation**: [`Board::new_game`] places content drawn from
//!   [`ContentPools`] supplied by a [`ContentSource`]
//! - **Decoding**: field content carries no type tag; [`decode_content`]
//!   infers it from key presence
//!
//! # Example
//!
//! ```
//! use trivia_board::{Board, ContentPools, Letter, Player, Record};
//!
//! # fn example() -> Result<(), trivia_board::BoardError> {
//! let pools = ContentPools::new(Vec::new(), vec![Letter::new(2), Letter::new(-1)]);
//! let board = Board::new_game([Player::new("Ala"), Player::new("computer")], &pools)?;
//! assert_eq!(board.len(), Board::LENGTH);
//!
//! let stored = board.to_json()?;
//! assert_eq!(Board::from_json(&stored)?, board);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod content;
mod error;
mod field;
mod player;
mod pool;
mod record;

// Crate-level exports - Errors
pub use error::{BoardError, ContentPoolUnavailableError, MalformedDataError};

// Crate-level exports - Records
pub use content::{ContentType, Difficulty, FieldContent, Letter, Question};
pub use field::{Field, decode_content};
pub use player::Player;
pub use record::Record;

// Crate-level exports - Generation
pub use board::{Board, BoardSettings};
pub use pool::{ContentPools, ContentSource};
