use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Chapter, Character, Comment, CommentId, Relationship, TimelineEvent};
use crate::store::{AppState, Store, SubscriptionId};

use super::storage::KeyValueStore;
use super::PersistenceError;

/// Key the state document is stored under unless configured otherwise.
pub const DEFAULT_STATE_KEY: &str = "scriptorium-state";

/// Version written into every saved document. Documents from a newer
/// version are refused instead of being partially read.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedStateRef<'a> {
    version: u32,
    chapters: &'a [Chapter],
    comments: &'a BTreeMap<CommentId, Comment>,
    characters: &'a [Character],
    relationships: &'a [Relationship],
    events: &'a [TimelineEvent],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    #[serde(default)]
    chapters: Vec<Chapter>,
    #[serde(default)]
    comments: BTreeMap<CommentId, Comment>,
    #[serde(default)]
    characters: Vec<Character>,
    #[serde(default)]
    relationships: Vec<Relationship>,
    #[serde(default)]
    events: Vec<TimelineEvent>,
}

#[derive(Deserialize)]
struct VersionProbe {
    #[serde(default = "default_version")]
    version: u32,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

/// Saves and restores the domain part of [`AppState`].
pub struct StatePersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> StatePersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Restore the saved state, or `None` if nothing was saved yet.
    pub fn load(&self) -> Result<Option<AppState>, PersistenceError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };

        let decode_err = |e| PersistenceError::Decode {
            key: self.key.clone(),
            source: e,
        };
        let probe: VersionProbe = serde_json::from_str(&raw).map_err(decode_err)?;
        if probe.version > SCHEMA_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: probe.version,
                supported: SCHEMA_VERSION,
            });
        }
        let persisted: PersistedState = serde_json::from_str(&raw).map_err(decode_err)?;

        tracing::debug!(
            key = %self.key,
            chapters = persisted.chapters.len(),
            comments = persisted.comments.len(),
            "Restored state"
        );

        Ok(Some(AppState {
            chapters: persisted.chapters,
            comments: persisted.comments,
            characters: persisted.characters,
            relationships: persisted.relationships,
            events: persisted.events,
            ..AppState::initial()
        }))
    }

    /// Saved state, falling back to the initial manuscript when nothing
    /// was saved.
    pub fn load_or_initial(&self) -> Result<AppState, PersistenceError> {
        Ok(self.load()?.unwrap_or_else(AppState::initial))
    }

    pub fn save(&mut self, state: &AppState) -> Result<(), PersistenceError> {
        let doc = PersistedStateRef {
            version: SCHEMA_VERSION,
            chapters: &state.chapters,
            comments: &state.comments,
            characters: &state.characters,
            relationships: &state.relationships,
            events: &state.events,
        };
        let json = serde_json::to_string(&doc).map_err(PersistenceError::Encode)?;
        self.storage.set(&self.key, &json)
    }

    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.storage.remove(&self.key)
    }
}

impl<S: KeyValueStore + 'static> StatePersistence<S> {
    /// Write every new state through to storage.
    ///
    /// Failures are logged and do not interrupt dispatch; the next
    /// successful save replaces the stale document.
    pub fn attach(mut self, store: &mut Store) -> SubscriptionId {
        store.subscribe(move |state| {
            if let Err(e) = self.save(state) {
                tracing::warn!(key = %self.key, error = %e, "Failed to persist state");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::store::{Action, CodexTab, ModalKind};

    #[test]
    fn load_from_empty_storage_is_none() {
        let persistence = StatePersistence::new(MemoryStorage::new(), DEFAULT_STATE_KEY);
        assert!(persistence.load().unwrap().is_none());
        assert_eq!(persistence.load_or_initial().unwrap(), AppState::initial());
    }

    #[test]
    fn ui_fields_are_not_restored() {
        let mut state = AppState::initial();
        state.active_modal = ModalKind::Character;
        state.editing_item_id = Some("x".into());
        state.active_codex_tab = CodexTab::Events;
        state.viewing_item_id = Some("y".into());

        let mut persistence = StatePersistence::new(MemoryStorage::new(), "k");
        persistence.save(&state).unwrap();
        let restored = persistence.load().unwrap().unwrap();

        assert_eq!(restored, AppState::initial());
    }

    #[test]
    fn newer_version_is_rejected() {
        let mut storage = MemoryStorage::new();
        storage.set("k", r#"{"version": 99, "chapters": []}"#).unwrap();
        let persistence = StatePersistence::new(storage, "k");
        assert!(matches!(
            persistence.load(),
            Err(PersistenceError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn corrupt_document_is_a_decode_error() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "not json").unwrap();
        let persistence = StatePersistence::new(storage, "k");
        assert!(matches!(
            persistence.load(),
            Err(PersistenceError::Decode { .. })
        ));
    }

    #[test]
    fn attach_writes_through_on_dispatch() {
        let storage = MemoryStorage::new();
        let mut store = Store::default();
        StatePersistence::new(storage.clone(), "k").attach(&mut store);

        assert!(storage.is_empty());
        store.dispatch(Action::add_chapter(Some("Two".into())));

        let restored = StatePersistence::new(storage, "k").load().unwrap().unwrap();
        assert_eq!(restored.chapters.len(), 2);
        assert_eq!(restored.chapters[1].title, "Two");
    }
}
