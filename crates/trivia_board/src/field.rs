//! A single board position and its occupants.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{ContentType, FieldContent, Letter, MalformedDataError, Player, Question, Record};

/// One position on the board track.
///
/// Content is fixed when the board is generated; occupants change as pawns
/// move. The content tag is always computed from `content`, so the two can
/// never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(
        serialize_with = "serialize_content",
        deserialize_with = "deserialize_content"
    )]
    content: Option<FieldContent>,
    players: Vec<Player>,
}

impl Field {
    /// Creates a plain field with no content and no players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field holding the given content.
    #[instrument(skip(content), fields(content_type = %content.content_type()))]
    pub fn with_content(content: FieldContent) -> Self {
        Self {
            content: Some(content),
            players: Vec::new(),
        }
    }

    /// Creates a field from optional content and an occupant list.
    #[instrument(skip(content, players), fields(players = players.len()))]
    pub fn with_players(content: Option<FieldContent>, players: Vec<Player>) -> Self {
        Self { content, players }
    }

    /// Returns the field content, if any.
    pub fn content(&self) -> Option<&FieldContent> {
        self.content.as_ref()
    }

    /// Returns the question on this field, if it holds one.
    pub fn question(&self) -> Option<&Question> {
        match &self.content {
            Some(FieldContent::Question(question)) => Some(question),
            _ => None,
        }
    }

    /// Returns the letter on this field, if it holds one.
    pub fn letter(&self) -> Option<&Letter> {
        match &self.content {
            Some(FieldContent::Letter(letter)) => Some(letter),
            _ => None,
        }
    }

    /// Returns the display tag derived from the content.
    pub fn content_type(&self) -> ContentType {
        ContentType::of(self.content.as_ref())
    }

    /// Returns the players standing on this field.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns `true` if a player with this name stands on the field.
    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name() == name)
    }

    /// Appends a player to the occupants. Duplicates are not checked.
    #[instrument(skip(self, player), fields(player = %player.name()))]
    pub fn add_player(&mut self, player: Player) {
        debug!(occupants = self.players.len() + 1, "Player added to field");
        self.players.push(player);
    }

    /// Removes the first occupant with this name and returns it.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        let index = self.players.iter().position(|p| p.name() == name)?;
        debug!(index, "Player removed from field");
        Some(self.players.remove(index))
    }
}

impl Record for Field {}

/// Decodes field content from its untagged wire object.
///
/// The record carries no type tag, so the variant is inferred from key
/// presence: a `movement` key means [`Letter`], otherwise an `answers` key
/// means [`Question`], otherwise the field is plain. Objects with neither
/// key decode to `None` without error.
///
/// # Errors
///
/// Returns [`MalformedDataError`] if `value` is not an object, or if a
/// recognised shape fails to decode (wrong types, unknown difficulty).
#[instrument(skip(value))]
pub fn decode_content(value: Value) -> Result<Option<FieldContent>, MalformedDataError> {
    let Value::Object(map) = value else {
        return Err(MalformedDataError::new(format!(
            "field content must be an object, got {}",
            value
        )));
    };

    if map.contains_key("movement") {
        let letter = Letter::from_value(Value::Object(map))?;
        Ok(Some(FieldContent::Letter(letter)))
    } else if map.contains_key("answers") {
        let question = Question::from_value(Value::Object(map))?;
        Ok(Some(FieldContent::Question(question)))
    } else {
        if !map.is_empty() {
            warn!(
                keys = ?map.keys().collect::<Vec<_>>(),
                "Unrecognized field content, treating as plain field"
            );
        }
        Ok(None)
    }
}

fn serialize_content<S>(content: &Option<FieldContent>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match content {
        Some(content) => content.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

fn deserialize_content<'de, D>(deserializer: D) -> Result<Option<FieldContent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decode_content(value).map_err(|e| D::Error::custom(e.message))
}
