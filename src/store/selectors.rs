//! Read-only queries over the state tree used by views.

use crate::model::{Chapter, Character, Comment, Relationship, TimelineEvent};

use super::state::{AppState, ModalKind};

pub fn chapter<'a>(state: &'a AppState, id: &str) -> Option<&'a Chapter> {
    state.chapters.iter().find(|c| c.id == id)
}

pub fn chapter_index(state: &AppState, id: &str) -> Option<usize> {
    state.chapters.iter().position(|c| c.id == id)
}

pub fn character<'a>(state: &'a AppState, id: &str) -> Option<&'a Character> {
    state.characters.iter().find(|c| c.id == id)
}

/// Comments of a chapter in display (insertion) order.
///
/// Ids without a record in the mapping are skipped.
pub fn comments_for_chapter<'a>(state: &'a AppState, chapter_id: &str) -> Vec<&'a Comment> {
    chapter(state, chapter_id)
        .map(|ch| {
            ch.comment_ids
                .iter()
                .filter_map(|id| state.comments.get(id))
                .collect()
        })
        .unwrap_or_default()
}

pub fn visible_comments_for_chapter<'a>(
    state: &'a AppState,
    chapter_id: &str,
) -> Vec<&'a Comment> {
    comments_for_chapter(state, chapter_id)
        .into_iter()
        .filter(|c| !c.is_hidden)
        .collect()
}

pub fn suggestions_for_chapter<'a>(state: &'a AppState, chapter_id: &str) -> Vec<&'a Comment> {
    comments_for_chapter(state, chapter_id)
        .into_iter()
        .filter(|c| c.is_suggestion)
        .collect()
}

pub fn relationships_for_character<'a>(
    state: &'a AppState,
    character_id: &str,
) -> Vec<&'a Relationship> {
    state
        .relationships
        .iter()
        .filter(|r| r.involves(character_id))
        .collect()
}

pub fn events_for_character<'a>(state: &'a AppState, character_id: &str) -> Vec<&'a TimelineEvent> {
    state
        .events
        .iter()
        .filter(|e| e.character_ids.iter().any(|id| id == character_id))
        .collect()
}

/// The record targeted by the open modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditingItem<'a> {
    Character(&'a Character),
    Event(&'a TimelineEvent),
    Relationship(&'a Relationship),
    Chapter(&'a Chapter),
}

/// Resolve `editing_item_id` against the collection of the open modal.
///
/// `None` when no modal is open, the modal is in creation mode, or the id
/// no longer resolves.
pub fn editing_item(state: &AppState) -> Option<EditingItem<'_>> {
    let id = state.editing_item_id.as_deref()?;
    match state.active_modal {
        ModalKind::None => None,
        ModalKind::Character => character(state, id).map(EditingItem::Character),
        ModalKind::Event => state
            .events
            .iter()
            .find(|e| e.id == id)
            .map(EditingItem::Event),
        ModalKind::Relationship => state
            .relationships
            .iter()
            .find(|r| r.id == id)
            .map(EditingItem::Relationship),
        ModalKind::ChapterMetadata => chapter(state, id).map(EditingItem::Chapter),
    }
}

/// Whitespace-separated words in a chapter, ignoring markup tags.
pub fn word_count(chapter: &Chapter) -> usize {
    let mut text = String::with_capacity(chapter.content.len());
    let mut in_tag = false;
    for ch in chapter.content.chars() {
        match ch {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.split_whitespace().count()
}

pub fn manuscript_word_count(state: &AppState) -> usize {
    state.chapters.iter().map(word_count).sum()
}
