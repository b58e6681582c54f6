//! Game configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use trivia_board::BoardSettings;

use crate::JsonContentFiles;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "TRIVIA_TRAIL_CONFIG";

/// Configuration for content pools, board generation and session storage.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Path to the JSON array of questions.
    #[serde(default = "default_questions_path")]
    questions_path: PathBuf,

    /// Path to the JSON array of letters.
    #[serde(default = "default_letters_path")]
    letters_path: PathBuf,

    /// Chance that an interior field is left plain.
    #[serde(default = "default_normal_field_chance")]
    normal_field_chance: f64,

    /// Chance that a non-plain field gets a question rather than a letter.
    #[serde(default = "default_question_field_chance")]
    question_field_chance: f64,

    /// Where the session file is kept between commands.
    #[serde(default = "default_session_path")]
    session_path: PathBuf,
}

#[instrument]
fn default_questions_path() -> PathBuf {
    PathBuf::from("questions.json")
}

#[instrument]
fn default_letters_path() -> PathBuf {
    PathBuf::from("letters.json")
}

#[instrument]
fn default_normal_field_chance() -> f64 {
    BoardSettings::NORMAL_FIELD_CHANCE
}

#[instrument]
fn default_question_field_chance() -> f64 {
    BoardSettings::QUESTION_FIELD_CHANCE
}

#[instrument]
fn default_session_path() -> PathBuf {
    PathBuf::from("trivia_trail_session.json")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            letters_path: default_letters_path(),
            normal_field_chance: default_normal_field_chance(),
            question_field_chance: default_question_field_chance(),
            session_path: default_session_path(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if a
    /// chance lies outside `[0, 1]`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            questions = %config.questions_path.display(),
            letters = %config.letters_path.display(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Resolves the configuration to use.
    ///
    /// Resolution order:
    /// 1. `explicit` path (the `--config` flag)
    /// 2. `$TRIVIA_TRAIL_CONFIG`
    /// 3. Built-in defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a resolved file fails to load.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            debug!(path = %path, "Using config from environment");
            return Self::from_file(path);
        }

        debug!("No config file given, using defaults");
        Ok(Self::default())
    }

    /// Overrides the session file location.
    #[instrument(skip(self))]
    pub fn with_session_path(mut self, path: PathBuf) -> Self {
        self.session_path = path;
        self
    }

    /// Checks that both chances are probabilities.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("normal_field_chance", self.normal_field_chance),
            ("question_field_chance", self.question_field_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::new(format!(
                    "{} must be between 0 and 1, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }

    /// Returns the generation settings described by this config.
    #[instrument(skip(self))]
    pub fn board_settings(&self) -> BoardSettings {
        BoardSettings::new(self.normal_field_chance, self.question_field_chance)
    }

    /// Returns the content source reading the configured pool files.
    #[instrument(skip(self))]
    pub fn content_files(&self) -> JsonContentFiles {
        JsonContentFiles::new(self.questions_path.clone(), self.letters_path.clone())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
