//! The manuscript reducer.
//!
//! Every arm is total: an action addressing an id that does not exist
//! returns the input state untouched.

use crate::model::{Chapter, Comment};
use crate::mvi::Reducer;

use super::action::Action;
use super::state::{AppState, ModalKind};

pub struct NovelReducer;

impl Reducer for NovelReducer {
    type State = AppState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            Action::AddChapter { id, title } => add_chapter(state, id, title),

            Action::UpdateChapter { id, updates } => {
                let mut state = state;
                if let Some(chapter) = state.chapters.iter_mut().find(|c| c.id == id) {
                    chapter.apply(updates);
                }
                state
            }

            Action::DeleteChapter { id } => {
                let mut state = state;
                // Comment records stay in the mapping; other chapters are untouched.
                state.chapters.retain(|c| c.id != id);
                state
            }

            Action::MoveChapter { id, to_index } => move_chapter(state, &id, to_index),

            Action::AddComment {
                chapter_id,
                comment,
            } => add_comment(state, &chapter_id, comment),

            Action::UpdateComment {
                comment_id,
                updates,
                ..
            } => {
                let mut state = state;
                if let Some(comment) = state.comments.get_mut(&comment_id) {
                    comment.apply(updates);
                }
                state
            }

            Action::HideComment(comment_id) => {
                let mut state = state;
                if let Some(comment) = state.comments.get_mut(&comment_id) {
                    comment.is_hidden = !comment.is_hidden;
                }
                state
            }

            Action::DeleteComment { comment_id, .. } => delete_comment(state, &comment_id),

            Action::AddCharacter { character } => {
                let mut state = state;
                if !state.characters.iter().any(|c| c.id == character.id) {
                    state.characters.push(character);
                }
                state
            }

            Action::UpdateCharacter { id, updates } => {
                let mut state = state;
                if let Some(character) = state.characters.iter_mut().find(|c| c.id == id) {
                    character.apply(updates);
                }
                state
            }

            Action::DeleteCharacter { id } => {
                let mut state = state;
                // Relationships and events keep their references.
                state.characters.retain(|c| c.id != id);
                state
            }

            Action::AddRelationship { relationship } => {
                let mut state = state;
                if !state.relationships.iter().any(|r| r.id == relationship.id) {
                    state.relationships.push(relationship);
                }
                state
            }

            Action::UpdateRelationship { relationship } => {
                let mut state = state;
                if let Some(slot) = state
                    .relationships
                    .iter_mut()
                    .find(|r| r.id == relationship.id)
                {
                    *slot = relationship;
                }
                state
            }

            Action::DeleteRelationship { id } => {
                let mut state = state;
                state.relationships.retain(|r| r.id != id);
                state
            }

            Action::AddEvent { event } => {
                let mut state = state;
                if !state.events.iter().any(|e| e.id == event.id) {
                    state.events.push(event);
                }
                state
            }

            Action::UpdateEvent { id, updates } => {
                let mut state = state;
                if let Some(event) = state.events.iter_mut().find(|e| e.id == id) {
                    event.apply(updates);
                }
                state
            }

            Action::DeleteEvent { id } => {
                let mut state = state;
                state.events.retain(|e| e.id != id);
                state
            }

            Action::SetCodexTab { tab } => AppState {
                active_codex_tab: tab,
                viewing_item_id: None,
                ..state
            },

            Action::SetViewingItem { id } => AppState {
                viewing_item_id: id,
                ..state
            },

            Action::OpenModal { kind, item_id } => AppState {
                active_modal: kind,
                editing_item_id: item_id,
                ..state
            },

            Action::CloseModal => AppState {
                active_modal: ModalKind::None,
                editing_item_id: None,
                ..state
            },
        }
    }
}

fn add_chapter(mut state: AppState, id: String, title: Option<String>) -> AppState {
    if state.chapters.iter().any(|c| c.id == id) {
        return state;
    }
    let title = title.unwrap_or_else(|| format!("Chapter {}", state.chapters.len() + 1));
    state.chapters.push(Chapter::new(id, title));
    state
}

fn move_chapter(mut state: AppState, id: &str, to_index: usize) -> AppState {
    let Some(from) = state.chapters.iter().position(|c| c.id == id) else {
        return state;
    };
    let chapter = state.chapters.remove(from);
    let to = to_index.min(state.chapters.len());
    state.chapters.insert(to, chapter);
    state
}

fn add_comment(mut state: AppState, chapter_id: &str, comment: Comment) -> AppState {
    if state.comments.contains_key(&comment.id) {
        return state;
    }
    let Some(chapter) = state.chapters.iter_mut().find(|c| c.id == chapter_id) else {
        return state;
    };
    chapter.comment_ids.push(comment.id.clone());
    state.comments.insert(comment.id.clone(), comment);
    state
}

fn delete_comment(mut state: AppState, comment_id: &str) -> AppState {
    // Dropped from every chapter list, not just the one named in the action.
    state.comments.remove(comment_id);
    for chapter in &mut state.chapters {
        chapter.comment_ids.retain(|id| id != comment_id);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChapterUpdate;
    use crate::store::state::DEFAULT_CHAPTER_ID;

    #[test]
    fn add_chapter_defaults_title_to_position() {
        let state = NovelReducer::reduce(
            AppState::initial(),
            Action::AddChapter {
                id: "ch2".into(),
                title: None,
            },
        );
        assert_eq!(state.chapters.len(), 2);
        assert_eq!(state.chapters[1].title, "Chapter 2");
        assert!(state.chapters[1].comment_ids.is_empty());
    }

    #[test]
    fn add_chapter_with_existing_id_is_noop() {
        let initial = AppState::initial();
        let state = NovelReducer::reduce(
            initial.clone(),
            Action::AddChapter {
                id: DEFAULT_CHAPTER_ID.into(),
                title: Some("Dupe".into()),
            },
        );
        assert_eq!(state, initial);
    }

    #[test]
    fn update_chapter_merges_only_set_fields() {
        let state = NovelReducer::reduce(
            AppState::initial(),
            Action::UpdateChapter {
                id: DEFAULT_CHAPTER_ID.into(),
                updates: ChapterUpdate::content("<p>It was dark.</p>"),
            },
        );
        assert_eq!(state.chapters[0].content, "<p>It was dark.</p>");
        assert_eq!(state.chapters[0].title, "Chapter 1");
    }

    #[test]
    fn move_chapter_clamps_index() {
        let mut state = AppState::initial();
        for id in ["b", "c"] {
            state = NovelReducer::reduce(
                state,
                Action::AddChapter {
                    id: id.into(),
                    title: None,
                },
            );
        }
        let state = NovelReducer::reduce(
            state,
            Action::MoveChapter {
                id: DEFAULT_CHAPTER_ID.into(),
                to_index: 99,
            },
        );
        let order: Vec<_> = state.chapters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["b", "c", DEFAULT_CHAPTER_ID]);
    }

    #[test]
    fn add_comment_with_existing_id_is_noop() {
        let mut comment = Comment::new("ann", "first", "span");
        comment.id = "c1".into();
        let state = NovelReducer::reduce(
            AppState::initial(),
            Action::add_comment(DEFAULT_CHAPTER_ID, comment.clone()),
        );
        let again = NovelReducer::reduce(
            state.clone(),
            Action::add_comment(DEFAULT_CHAPTER_ID, comment),
        );
        assert_eq!(again, state);
        assert_eq!(again.chapters[0].comment_ids, ["c1"]);
    }
}
