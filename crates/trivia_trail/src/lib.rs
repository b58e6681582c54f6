//! Trivia Trail - two-player trivia board game sessions
//!
//! Builds on [`trivia_board`] with everything a front end needs around the
//! board core.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for pool files, generation chances and storage
//! - **Pools**: question and letter pools read from JSON files
//! - **Session**: start validation, dice rolls and pawn movement
//! - **Store**: one serialized session kept in a file between commands
//! - **Render**: plain-text board view
//!
//! # Example
//!
//! ```no_run
//! use trivia_trail::{GameConfig, GameSession, PawnColor, SessionStore};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::resolve(None)?;
//! let session = GameSession::start(
//!     "Ala",
//!     Some(PawnColor::Red),
//!     &config.content_files(),
//!     &config.board_settings(),
//!     &mut rand::thread_rng(),
//! )?;
//! SessionStore::new(config.session_path()).save(&session)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod pool_files;
mod render;
mod session;
mod store;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV_VAR, ConfigError, GameConfig};

// Crate-level exports - Content pools
pub use pool_files::JsonContentFiles;

// Crate-level exports - Session management
pub use session::{COMPUTER_NAME, DIE_SIDES, GameSession, PawnColor, Roll, SessionError};
pub use store::{SessionStore, StoreError};

// Crate-level exports - Rendering
pub use render::{render_board, render_session};
