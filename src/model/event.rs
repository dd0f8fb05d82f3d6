use serde::{Deserialize, Serialize};

use super::{ChapterId, CharacterId, EventId};

/// A dated entry on the codex timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: EventId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form in-world date label ("Spring, year 3").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub character_ids: Vec<CharacterId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<ChapterId>,
}

impl TimelineEvent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: super::new_id(),
            title: title.into(),
            description: None,
            date: None,
            character_ids: Vec::new(),
            chapter_id: None,
        }
    }

    pub fn apply(&mut self, updates: EventUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(date) = updates.date {
            self.date = date;
        }
        if let Some(ids) = updates.character_ids {
            self.character_ids = ids;
        }
        if let Some(chapter_id) = updates.chapter_id {
            self.chapter_id = chapter_id;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "super::double_option")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "super::double_option")]
    pub date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_ids: Option<Vec<CharacterId>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "super::double_option")]
    pub chapter_id: Option<Option<ChapterId>>,
}
