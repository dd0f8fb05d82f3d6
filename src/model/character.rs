use serde::{Deserialize, Serialize};

use super::CharacterId;

/// A codex character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL or data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// CSS color used for mention highlighting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            name: name.into(),
            description: None,
            picture: None,
            color: None,
        }
    }

    pub fn apply(&mut self, updates: CharacterUpdate) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(picture) = updates.picture {
            self.picture = picture;
        }
        if let Some(color) = updates.color {
            self.color = color;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "super::double_option")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "super::double_option")]
    pub picture: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "super::double_option")]
    pub color: Option<Option<String>>,
}
