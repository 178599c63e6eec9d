use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque game identifier. No format is assumed beyond "some string".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_id_from_uuid_uses_hyphenated_form() {
        let uuid = Uuid::nil();
        let id = GameId::from_uuid(uuid);
        assert_eq!(id.as_str(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn game_id_serializes_as_plain_string() {
        let id = GameId::new("abc-123");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"abc-123\"");
    }
}
