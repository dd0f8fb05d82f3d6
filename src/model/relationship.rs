use serde::{Deserialize, Serialize};

use super::{CharacterId, RelationshipId};

/// A named link between two or more characters.
///
/// Updates replace the whole record; there is no partial form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: RelationshipId,
    /// Free-form tag such as "friend" or "spouse".
    #[serde(rename = "type")]
    pub kind: String,
    /// Members in the order they were chosen.
    pub character_ids: Vec<CharacterId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Relationship {
    pub fn new<I, S>(kind: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CharacterId>,
    {
        Self {
            id: super::new_id(),
            kind: kind.into(),
            character_ids: members.into_iter().map(Into::into).collect(),
            description: None,
        }
    }

    pub fn involves(&self, character_id: &str) -> bool {
        self.character_ids.iter().any(|id| id == character_id)
    }
}
