use serde::{Deserialize, Serialize};

use super::CommentId;

/// A reader comment or an edit suggestion anchored to a span of chapter
/// text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    #[serde(default)]
    pub is_suggestion: bool,
    /// Proposed text for suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_text: Option<String>,
    #[serde(default)]
    pub is_hidden: bool,
    /// The span of chapter text this comment annotates.
    #[serde(default)]
    pub original_text: String,
}

impl Comment {
    /// A plain (non-suggestion) comment stamped with the current time.
    pub fn new(
        author: impl Into<String>,
        text: impl Into<String>,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            id: super::new_id(),
            author: author.into(),
            text: text.into(),
            timestamp: now_millis(),
            is_suggestion: false,
            replacement_text: None,
            is_hidden: false,
            original_text: original_text.into(),
        }
    }

    /// A suggestion proposing `replacement` for `original_text`.
    pub fn suggestion(
        author: impl Into<String>,
        text: impl Into<String>,
        original_text: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            is_suggestion: true,
            replacement_text: Some(replacement.into()),
            ..Self::new(author, text, original_text)
        }
    }

    pub fn apply(&mut self, updates: CommentUpdate) {
        let CommentUpdate {
            author,
            text,
            is_suggestion,
            replacement_text,
            is_hidden,
            original_text,
        } = updates;

        if let Some(author) = author {
            self.author = author;
        }
        if let Some(text) = text {
            self.text = text;
        }
        if let Some(is_suggestion) = is_suggestion {
            self.is_suggestion = is_suggestion;
        }
        if let Some(replacement) = replacement_text {
            self.replacement_text = replacement;
        }
        if let Some(is_hidden) = is_hidden {
            self.is_hidden = is_hidden;
        }
        if let Some(original) = original_text {
            self.original_text = original;
        }
    }
}

/// Partial comment update; unset fields are preserved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suggestion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", with = "super::double_option")]
    pub replacement_text: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl CommentUpdate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
