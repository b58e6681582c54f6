//! Command-line interface for trivia_trail.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::PawnColor;

/// Trivia Trail - race a computer opponent along a board of questions and letters
#[derive(Parser, Debug)]
#[command(name = "trivia_trail")]
#[command(about = "Two-player trivia board game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (overrides TRIVIA_TRAIL_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the session file (overrides the configured one)
    #[arg(long, global = true)]
    pub session: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new game against the computer
    New {
        /// Your name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Your pawn colour (red or purple)
        #[arg(short, long)]
        pawn: Option<PawnColor>,
    },

    /// Roll the die and move both pawns
    Roll,

    /// Show the current board
    Show,
}
