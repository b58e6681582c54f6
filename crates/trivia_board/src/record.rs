//! JSON wire records shared by every stored game type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::MalformedDataError;

/// A value stored in session storage as a JSON record.
///
/// The wire shapes are fixed by the serde derives (or custom impls) of each
/// implementor; this trait only adds the string and value entry points with
/// errors mapped to [`MalformedDataError`].
pub trait Record: Serialize + DeserializeOwned {
    /// Serializes to a compact JSON string.
    #[instrument(skip(self))]
    fn to_json(&self) -> Result<String, MalformedDataError> {
        let json = serde_json::to_string(self)?;
        debug!(bytes = json.len(), "Record serialized");
        Ok(json)
    }

    /// Serializes to a JSON value.
    #[instrument(skip(self))]
    fn to_value(&self) -> Result<serde_json::Value, MalformedDataError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Deserializes from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedDataError`] if required keys are missing, a key has
    /// the wrong type, or a value is outside its enumerated domain.
    #[instrument(skip(record))]
    fn from_json(record: &str) -> Result<Self, MalformedDataError> {
        Ok(serde_json::from_str(record)?)
    }

    /// Deserializes from a JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Record::from_json`].
    #[instrument(skip(value))]
    fn from_value(value: serde_json::Value) -> Result<Self, MalformedDataError> {
        Ok(serde_json::from_value(value)?)
    }
}
