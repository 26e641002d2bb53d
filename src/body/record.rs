//! The record carried by the JSON endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::body::error::BodyError;

/// A user name and age, decoded fresh for every request.
///
/// Values are not validated. Missing or `null` fields fall back to `""`
/// and `0`, unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PersonRecord {
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: username.into(),
            age,
        }
    }

    /// Decode a record from JSON text.
    pub fn from_json(text: &str) -> Result<Self, BodyError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a record from raw JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, BodyError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl std::fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PersonRecord(username={}, age={})", self.username, self.age)
    }
}
