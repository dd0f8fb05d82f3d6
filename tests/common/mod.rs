//! Shared fixtures for integration tests.

#![allow(dead_code, unused_imports)]

use scriptorium::model::{Character, Comment, Relationship};
use scriptorium::mvi::Reducer;
use scriptorium::store::{Action, AppState, NovelReducer};

/// A comment with a fixed id and timestamp so states compare by value.
pub fn comment(id: &str, text: &str) -> Comment {
    Comment {
        id: id.to_string(),
        author: "Editor".to_string(),
        text: text.to_string(),
        timestamp: 1_700_000_000_000,
        is_suggestion: false,
        replacement_text: None,
        is_hidden: false,
        original_text: "the span".to_string(),
    }
}

pub fn character(id: &str, name: &str) -> Character {
    Character {
        id: id.to_string(),
        ..Character::new(name)
    }
}

pub fn relationship(id: &str, kind: &str, members: &[&str]) -> Relationship {
    Relationship {
        id: id.to_string(),
        ..Relationship::new(kind, members.iter().copied())
    }
}

/// Apply `actions` in order starting from `state`.
pub fn reduce_all(state: AppState, actions: impl IntoIterator<Item = Action>) -> AppState {
    actions.into_iter().fold(state, NovelReducer::reduce)
}

/// Two chapters ("ch-a", "ch-b") each with one comment, plus two
/// characters related to each other.
pub fn populated_state() -> AppState {
    reduce_all(
        AppState::initial(),
        [
            Action::AddChapter {
                id: "ch-a".into(),
                title: Some("Arrival".into()),
            },
            Action::AddChapter {
                id: "ch-b".into(),
                title: Some("Departure".into()),
            },
            Action::add_comment("ch-a", comment("c-a", "on a")),
            Action::add_comment("ch-b", comment("c-b", "on b")),
            Action::AddCharacter {
                character: character("alice", "Alice"),
            },
            Action::AddCharacter {
                character: character("bob", "Bob"),
            },
            Action::AddRelationship {
                relationship: relationship("r1", "friend", &["alice", "bob"]),
            },
        ],
    )
}
