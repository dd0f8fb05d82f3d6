use serde::{Deserialize, Serialize};

use super::{ChapterId, CharacterId, CommentId};

/// Editing status shown in the chapter metadata modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChapterStatus {
    #[default]
    Draft,
    Revised,
    Final,
}

/// A chapter of the manuscript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    /// Rich-text body as produced by the editor.
    #[serde(default)]
    pub content: String,
    /// Comments anchored in this chapter, in insertion order.
    #[serde(default)]
    pub comment_ids: Vec<CommentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub status: ChapterStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pov_character_id: Option<CharacterId>,
}

impl Chapter {
    /// An empty chapter with no comments and default metadata.
    pub fn new(id: impl Into<ChapterId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            comment_ids: Vec::new(),
            synopsis: None,
            status: ChapterStatus::default(),
            pov_character_id: None,
        }
    }

    /// Shallow-merge the fields set in `updates`.
    pub fn apply(&mut self, updates: ChapterUpdate) {
        let ChapterUpdate {
            title,
            content,
            synopsis,
            status,
            pov_character_id,
        } = updates;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(synopsis) = synopsis {
            self.synopsis = synopsis;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(pov) = pov_character_id {
            self.pov_character_id = pov;
        }
    }
}

/// Partial chapter update. `None` leaves the field alone; for optional
/// fields `Some(None)` clears the value.
///
/// There is no `comment_ids` field; that list only changes through the
/// comment actions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChapterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "super::double_option"
    )]
    pub synopsis: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChapterStatus>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "super::double_option"
    )]
    pub pov_character_id: Option<Option<CharacterId>>,
}

impl ChapterUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_only_touches_set_fields() {
        let mut chapter = Chapter::new("ch", "Opening");
        chapter.content = "It was a dark night.".into();

        chapter.apply(ChapterUpdate::title("Prologue"));

        assert_eq!(chapter.title, "Prologue");
        assert_eq!(chapter.content, "It was a dark night.");
        assert_eq!(chapter.status, ChapterStatus::Draft);
    }

    #[test]
    fn apply_can_clear_optional_metadata() {
        let mut chapter = Chapter::new("ch", "Opening");
        chapter.synopsis = Some("Hero leaves home".into());
        chapter.pov_character_id = Some("hero".into());

        chapter.apply(ChapterUpdate {
            synopsis: Some(None),
            ..ChapterUpdate::default()
        });

        assert_eq!(chapter.synopsis, None);
        assert_eq!(chapter.pov_character_id.as_deref(), Some("hero"));
    }

    #[test]
    fn update_json_distinguishes_null_from_missing() {
        let update: ChapterUpdate =
            serde_json::from_str(r#"{"synopsis": null, "status": "final"}"#).unwrap();
        assert_eq!(update.synopsis, Some(None));
        assert_eq!(update.pov_character_id, None);
        assert_eq!(update.status, Some(ChapterStatus::Final));
    }

    #[test]
    fn chapter_serializes_camel_case() {
        let chapter = Chapter::new("ch", "One");
        let json = serde_json::to_value(&chapter).unwrap();
        assert!(json.get("commentIds").is_some());
        assert!(json.get("synopsis").is_none());
    }
}
