//! Domain entities of the manuscript and its codex.
//!
//! Everything here is plain data: `Serialize`/`Deserialize` with camelCase
//! field names so the tree can be written to a flat key-value store and
//! restored without identity or cyclic references.
//!
//! ```text
//! AppState
//! ├── chapters: Vec<Chapter>            // reading order
//! │   └── comment_ids: Vec<CommentId>   // display order
//! ├── comments: BTreeMap<CommentId, Comment>
//! ├── characters: Vec<Character>
//! ├── relationships: Vec<Relationship>  // 2..N members each
//! └── events: Vec<TimelineEvent>
//! ```

mod chapter;
mod character;
mod comment;
mod event;
mod relationship;

pub use chapter::{Chapter, ChapterStatus, ChapterUpdate};
pub use character::{Character, CharacterUpdate};
pub use comment::{Comment, CommentUpdate};
pub use event::{EventUpdate, TimelineEvent};
pub use relationship::Relationship;

pub type ChapterId = String;
pub type CommentId = String;
pub type CharacterId = String;
pub type RelationshipId = String;
pub type EventId = String;

/// Generate a fresh client-side id.
///
/// Ids are created by callers before dispatch so the reducer stays
/// deterministic.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Serde adapter for `Option<Option<T>>` patch fields: a missing key is
/// `None`, an explicit `null` is `Some(None)`.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
