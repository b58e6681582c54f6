//! Field content: trivia questions and letter movement modifiers.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::instrument;

use crate::Record;

/// How hard a question is.
///
/// Serialized as its plain lowercase value (`"easy"`, `"medium"`, `"hard"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Easy question.
    Easy,
    /// Medium question.
    Medium,
    /// Hard question.
    Hard,
}

/// A trivia question placed on a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Question {
    /// Difficulty level.
    difficulty: Difficulty,
    /// Prompt text.
    question: String,
    /// Possible answers, in display order.
    answers: Vec<String>,
}

impl Question {
    /// Creates a new question.
    #[instrument(skip(question, answers))]
    pub fn new(difficulty: Difficulty, question: impl Into<String>, answers: Vec<String>) -> Self {
        Self {
            difficulty,
            question: question.into(),
            answers,
        }
    }
}

/// A letter that moves the player who lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Letter {
    /// Signed number of fields to move: positive is forward.
    movement: i32,
}

impl Letter {
    /// Creates a new letter.
    #[instrument]
    pub fn new(movement: i32) -> Self {
        Self { movement }
    }

    /// Returns the movement carried by this letter.
    pub fn movement(&self) -> i32 {
        self.movement
    }
}

impl Record for Question {}

impl Record for Letter {}

/// The special effect attached to a field.
///
/// A field without content is a plain field, so "no content" is expressed
/// as `Option<FieldContent>` rather than a third variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum FieldContent {
    /// A trivia question.
    Question(Question),
    /// A movement letter.
    Letter(Letter),
}

impl FieldContent {
    /// Returns the tag for this content.
    pub fn content_type(&self) -> ContentType {
        match self {
            FieldContent::Question(_) => ContentType::Question,
            FieldContent::Letter(_) => ContentType::Letter,
        }
    }
}

/// Display tag of a field, derived from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    /// Field holds a question.
    Question,
    /// Field holds a letter.
    Letter,
    /// Field has no content.
    Normal,
}

impl ContentType {
    /// Derives the tag from optional content.
    pub fn of(content: Option<&FieldContent>) -> Self {
        content.map_or(ContentType::Normal, FieldContent::content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_plain_values() {
        assert_eq!(Difficulty::Easy.as_ref(), "easy");
        assert_eq!(Difficulty::from_str("hard").unwrap(), Difficulty::Hard);
        assert!(Difficulty::from_str("extreme").is_err());
    }

    #[test]
    fn test_content_type_tags() {
        assert_eq!(ContentType::of(None).to_string(), "normal");
        let letter = FieldContent::from(Letter::new(-2));
        assert_eq!(ContentType::of(Some(&letter)).to_string(), "letter");
        let question = FieldContent::from(Question::new(Difficulty::Medium, "2+2?", vec!["4".into()]));
        assert_eq!(question.content_type().as_ref(), "question");
    }
}
