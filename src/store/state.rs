//! # Application State
//!
//! ```text
//! AppState
//! ├── chapters: Vec<Chapter>                 // manuscript, reading order
//! ├── comments: BTreeMap<CommentId, Comment> // canonical comment records
//! ├── characters: Vec<Character>
//! ├── relationships: Vec<Relationship>
//! ├── events: Vec<TimelineEvent>
//! ├── active_codex_tab: CodexTab             // UI
//! ├── active_modal: ModalKind                // UI
//! ├── editing_item_id: Option<String>        // UI, None = creation mode
//! └── viewing_item_id: Option<String>        // UI
//! ```
//!
//! Changes only happen through `NovelReducer::reduce`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{
    Chapter, Character, Comment, CommentId, Relationship, TimelineEvent,
};
use crate::mvi::State;

/// Id of the chapter seeded into a fresh manuscript.
pub const DEFAULT_CHAPTER_ID: &str = "chapter-1";

/// Tabs of the codex side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodexTab {
    #[default]
    Timeline,
    Characters,
    Events,
    Relationships,
}

impl CodexTab {
    pub fn all() -> &'static [CodexTab] {
        &[
            Self::Timeline,
            Self::Characters,
            Self::Events,
            Self::Relationships,
        ]
    }
}

/// The single modal dialog that may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalKind {
    #[default]
    None,
    Character,
    Event,
    Relationship,
    ChapterMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub chapters: Vec<Chapter>,
    pub comments: BTreeMap<CommentId, Comment>,
    pub characters: Vec<Character>,
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
    #[serde(default)]
    pub active_codex_tab: CodexTab,
    #[serde(default)]
    pub active_modal: ModalKind,
    #[serde(default)]
    pub editing_item_id: Option<String>,
    #[serde(default)]
    pub viewing_item_id: Option<String>,
}

impl State for AppState {}

impl AppState {
    /// A manuscript with a single empty chapter and nothing else.
    pub fn initial() -> Self {
        Self {
            chapters: vec![Chapter::new(DEFAULT_CHAPTER_ID, "Chapter 1")],
            comments: BTreeMap::new(),
            characters: Vec::new(),
            relationships: Vec::new(),
            events: Vec::new(),
            active_codex_tab: CodexTab::default(),
            active_modal: ModalKind::default(),
            editing_item_id: None,
            viewing_item_id: None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.active_modal != ModalKind::None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}
