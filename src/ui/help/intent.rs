//! Intents for the help panel.

use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum HelpIntent {
    /// User asked for a help topic.
    Open { topic: String },

    /// The source returned the topic's text.
    Loaded { topic: String, content: String },

    /// The source could not produce the topic.
    FailedToLoad { topic: String },

    /// Try the failed topic again.
    Retry,

    Close,
}

impl Intent for HelpIntent {}
