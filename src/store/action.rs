//! # Actions
//!
//! Every mutation of the store is an `Action`. The set is closed: a new
//! kind of change means a new variant here and a new arm in the reducer.
//!
//! On the wire an action is `{"type": "ADD_CHAPTER", "payload": {...}}`,
//! the shape the persistence and CLI layers read and write.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    new_id, ChapterId, ChapterUpdate, Character, CharacterId, CharacterUpdate, Comment,
    CommentId, CommentUpdate, EventId, EventUpdate, Relationship, RelationshipId,
    TimelineEvent,
};
use crate::mvi::Intent;

use super::state::{CodexTab, ModalKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    // -- Chapters -------------------------------------------------------------
    AddChapter {
        id: ChapterId,
        /// Defaults to "Chapter N".
        #[serde(default)]
        title: Option<String>,
    },
    UpdateChapter {
        id: ChapterId,
        updates: ChapterUpdate,
    },
    DeleteChapter {
        id: ChapterId,
    },
    MoveChapter {
        id: ChapterId,
        to_index: usize,
    },

    // -- Comments -------------------------------------------------------------
    AddComment {
        chapter_id: ChapterId,
        comment: Comment,
    },
    UpdateComment {
        chapter_id: ChapterId,
        comment_id: CommentId,
        updates: CommentUpdate,
    },
    /// Toggles `is_hidden`. The payload is the bare comment id.
    HideComment(CommentId),
    DeleteComment {
        chapter_id: ChapterId,
        comment_id: CommentId,
    },

    // -- Codex ----------------------------------------------------------------
    AddCharacter {
        character: Character,
    },
    UpdateCharacter {
        id: CharacterId,
        updates: CharacterUpdate,
    },
    DeleteCharacter {
        id: CharacterId,
    },
    AddRelationship {
        relationship: Relationship,
    },
    /// Replaces the stored record with the same id.
    UpdateRelationship {
        relationship: Relationship,
    },
    DeleteRelationship {
        id: RelationshipId,
    },
    AddEvent {
        event: TimelineEvent,
    },
    UpdateEvent {
        id: EventId,
        updates: EventUpdate,
    },
    DeleteEvent {
        id: EventId,
    },

    // -- UI -------------------------------------------------------------------
    SetCodexTab {
        tab: CodexTab,
    },
    SetViewingItem {
        #[serde(default)]
        id: Option<String>,
    },
    OpenModal {
        #[serde(rename = "type")]
        kind: ModalKind,
        #[serde(default)]
        item_id: Option<String>,
    },
    CloseModal,
}

impl Intent for Action {}

impl Action {
    /// New chapter with a freshly generated id.
    pub fn add_chapter(title: Option<String>) -> Self {
        Self::AddChapter { id: new_id(), title }
    }

    pub fn add_comment(chapter_id: impl Into<ChapterId>, comment: Comment) -> Self {
        Self::AddComment {
            chapter_id: chapter_id.into(),
            comment,
        }
    }

    pub fn open_modal(kind: ModalKind, item_id: Option<String>) -> Self {
        Self::OpenModal { kind, item_id }
    }

    /// Protocol tag, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddChapter { .. } => "ADD_CHAPTER",
            Self::UpdateChapter { .. } => "UPDATE_CHAPTER",
            Self::DeleteChapter { .. } => "DELETE_CHAPTER",
            Self::MoveChapter { .. } => "MOVE_CHAPTER",
            Self::AddComment { .. } => "ADD_COMMENT",
            Self::UpdateComment { .. } => "UPDATE_COMMENT",
            Self::HideComment(_) => "HIDE_COMMENT",
            Self::DeleteComment { .. } => "DELETE_COMMENT",
            Self::AddCharacter { .. } => "ADD_CHARACTER",
            Self::UpdateCharacter { .. } => "UPDATE_CHARACTER",
            Self::DeleteCharacter { .. } => "DELETE_CHARACTER",
            Self::AddRelationship { .. } => "ADD_RELATIONSHIP",
            Self::UpdateRelationship { .. } => "UPDATE_RELATIONSHIP",
            Self::DeleteRelationship { .. } => "DELETE_RELATIONSHIP",
            Self::AddEvent { .. } => "ADD_EVENT",
            Self::UpdateEvent { .. } => "UPDATE_EVENT",
            Self::DeleteEvent { .. } => "DELETE_EVENT",
            Self::SetCodexTab { .. } => "SET_CODEX_TAB",
            Self::SetViewingItem { .. } => "SET_VIEWING_ITEM",
            Self::OpenModal { .. } => "OPEN_MODAL",
            Self::CloseModal => "CLOSE_MODAL",
        }
    }

    /// Check payload shape before dispatch.
    ///
    /// The reducer accepts anything; forms and the CLI call this to reject
    /// input that would leave the manuscript in a nonsensical shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::AddChapter { id, .. } => require_id("chapter", id),
            Self::AddComment {
                chapter_id,
                comment,
            } => {
                require_id("chapter", chapter_id)?;
                require_id("comment", &comment.id)?;
                check_suggestion(comment)
            }
            Self::AddCharacter { character } => {
                require_id("character", &character.id)?;
                if character.name.trim().is_empty() {
                    return Err(ValidationError::EmptyName {
                        entity: "character",
                    });
                }
                Ok(())
            }
            Self::UpdateCharacter { updates, .. } => match &updates.name {
                Some(name) if name.trim().is_empty() => Err(ValidationError::EmptyName {
                    entity: "character",
                }),
                _ => Ok(()),
            },
            Self::AddRelationship { relationship } | Self::UpdateRelationship { relationship } => {
                require_id("relationship", &relationship.id)?;
                check_members(relationship)
            }
            Self::AddEvent { event } => {
                require_id("event", &event.id)?;
                if event.title.trim().is_empty() {
                    return Err(ValidationError::EmptyName { entity: "event" });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Malformed action payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{entity} id must not be empty")]
    EmptyId { entity: &'static str },

    #[error("{entity} name must not be empty")]
    EmptyName { entity: &'static str },

    #[error("relationship '{id}' needs at least 2 members, got {count}")]
    TooFewMembers { id: String, count: usize },

    #[error("suggestion '{id}' has no replacement text")]
    MissingReplacement { id: String },
}

fn require_id(entity: &'static str, id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyId { entity });
    }
    Ok(())
}

fn check_members(relationship: &Relationship) -> Result<(), ValidationError> {
    let count = relationship.character_ids.len();
    if count < 2 {
        return Err(ValidationError::TooFewMembers {
            id: relationship.id.clone(),
            count,
        });
    }
    Ok(())
}

fn check_suggestion(comment: &Comment) -> Result<(), ValidationError> {
    if comment.is_suggestion && comment.replacement_text.is_none() {
        return Err(ValidationError::MissingReplacement {
            id: comment.id.clone(),
        });
    }
    Ok(())
}
