//! Trivia Trail - terminal front end
//!
//! Each invocation loads the stored session, runs one command, and saves it.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use trivia_trail::{
    Cli, Command, GameConfig, GameSession, PawnColor, SessionStore, render_session,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::resolve(cli.config.as_deref())?;
    if let Some(path) = cli.session {
        config = config.with_session_path(path);
    }
    let store = SessionStore::new(config.session_path());

    match cli.command {
        Command::New { name, pawn } => run_new(&config, &store, &name, pawn),
        Command::Roll => run_roll(&store),
        Command::Show => run_show(&store),
    }
}

/// Start a new game and store it
#[instrument(skip(config, store))]
fn run_new(
    config: &GameConfig,
    store: &SessionStore,
    name: &str,
    pawn: Option<PawnColor>,
) -> Result<()> {
    let session = GameSession::start(
        name,
        pawn,
        &config.content_files(),
        &config.board_settings(),
        &mut rand::thread_rng(),
    )?;
    store.save(&session)?;
    info!(path = %store.path().display(), "New game stored");
    println!("{}", render_session(&session));
    Ok(())
}

/// Roll the die for the stored game
#[instrument(skip(store))]
fn run_roll(store: &SessionStore) -> Result<()> {
    let mut session = load_session(store)?;
    let roll = session.roll_dice(&mut rand::thread_rng());
    store.save(&session)?;
    println!("Rolled {}\n", roll.value());
    println!("{}", render_session(&session));
    Ok(())
}

/// Print the stored game
#[instrument(skip(store))]
fn run_show(store: &SessionStore) -> Result<()> {
    let session = load_session(store)?;
    println!("{}", render_session(&session));
    Ok(())
}

fn load_session(store: &SessionStore) -> Result<GameSession> {
    store.load()?.with_context(|| {
        format!(
            "No game in {}; start one with `trivia_trail new`",
            store.path().display()
        )
    })
}
