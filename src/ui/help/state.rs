//! State for the help panel.

use crate::mvi::State;

/// What the help panel is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HelpState {
    #[default]
    Hidden,

    /// Waiting for the source to return `topic`.
    Loading { topic: String },

    Loaded { topic: String, content: String },

    /// The fetch failed; the view shows a generic "failed to load" message.
    Failed { topic: String },
}

impl State for HelpState {}

impl HelpState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn topic(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Loading { topic } | Self::Loaded { topic, .. } | Self::Failed { topic } => {
                Some(topic)
            }
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Loaded { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn has_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(HelpState::default(), HelpState::Hidden);
        assert!(!HelpState::Hidden.is_visible());
    }

    #[test]
    fn topic_and_content_accessors() {
        let state = HelpState::Loaded {
            topic: "codex".into(),
            content: "# Codex".into(),
        };
        assert_eq!(state.topic(), Some("codex"));
        assert_eq!(state.content(), Some("# Codex"));
        assert_eq!(HelpState::Failed { topic: "x".into() }.content(), None);
    }
}
