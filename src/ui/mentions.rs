//! `@mention` autocomplete for character names in the chapter editor.
//!
//! Pure input filtering: find the mention being typed, rank matching
//! characters, splice the chosen name into the text.

use crate::model::Character;

/// An `@query` immediately before the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionQuery {
    /// Byte offset of the `@`.
    pub start: usize,
    /// Byte offset of the cursor (end of the query).
    pub end: usize,
    pub query: String,
}

/// Find the mention being typed at byte offset `cursor`.
///
/// The `@` must start the text or follow whitespace, and the query may not
/// contain whitespace, so e-mail addresses and finished mentions do not
/// trigger suggestions.
pub fn active_mention(text: &str, cursor: usize) -> Option<MentionQuery> {
    let cursor = cursor.min(text.len());
    if !text.is_char_boundary(cursor) {
        return None;
    }
    let before = &text[..cursor];
    let at = before.rfind('@')?;
    let query = &before[at + 1..];
    if query.chars().any(char::is_whitespace) {
        return None;
    }
    let at_word_start = before[..at]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace);
    if !at_word_start {
        return None;
    }
    Some(MentionQuery {
        start: at,
        end: cursor,
        query: query.to_string(),
    })
}

/// Characters matching `query`, best matches first, at most `limit`.
///
/// Names starting with the query (or with a word starting with it) come
/// before names that merely contain it. Matching is case-insensitive and
/// keeps codex order within each group.
pub fn suggest<'a>(characters: &'a [Character], query: &str, limit: usize) -> Vec<&'a Character> {
    let needle = query.to_lowercase();
    let mut prefix = Vec::new();
    let mut contains = Vec::new();

    for character in characters {
        let name = character.name.to_lowercase();
        if name.starts_with(&needle) || name.split_whitespace().any(|w| w.starts_with(&needle)) {
            prefix.push(character);
        } else if name.contains(&needle) {
            contains.push(character);
        }
    }

    prefix.extend(contains);
    prefix.truncate(limit);
    prefix
}

/// Replace the `@query` with `name` followed by a single space.
///
/// Existing whitespace after the query is reused rather than doubled.
/// Returns the new text and the cursor position after that space.
pub fn complete_mention(text: &str, mention: &MentionQuery, name: &str) -> (String, usize) {
    let rest = &text[mention.end..];
    let mut out = String::with_capacity(text.len() + name.len() + 1);
    out.push_str(&text[..mention.start]);
    out.push_str(name);
    let cursor = match rest.chars().next() {
        Some(c) if c.is_whitespace() => out.len() + c.len_utf8(),
        _ => {
            out.push(' ');
            out.len()
        }
    };
    out.push_str(rest);
    (out, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast() -> Vec<Character> {
        ["Alice Liddell", "Bob", "Mad Hatter", "Malice"]
            .into_iter()
            .map(Character::new)
            .collect()
    }

    #[test]
    fn finds_query_at_cursor() {
        let text = "Then @Ali";
        let m = active_mention(text, text.len()).unwrap();
        assert_eq!(m.query, "Ali");
        assert_eq!(m.start, 5);
    }

    #[test]
    fn bare_at_gives_empty_query() {
        let m = active_mention("@", 1).unwrap();
        assert_eq!(m.query, "");
    }

    #[test]
    fn email_does_not_trigger() {
        let text = "mail bob@example";
        assert_eq!(active_mention(text, text.len()), None);
    }

    #[test]
    fn finished_mention_does_not_trigger() {
        let text = "@Bob went";
        assert_eq!(active_mention(text, text.len()), None);
    }

    #[test]
    fn cursor_inside_multibyte_char_is_none() {
        let text = "@é";
        assert_eq!(active_mention(text, 2), None);
    }

    #[test]
    fn prefix_matches_rank_before_substring() {
        let cast = cast();
        let names: Vec<_> = suggest(&cast, "ali", 10)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Alice Liddell", "Malice"]);
    }

    #[test]
    fn word_prefix_counts_as_prefix() {
        let cast = cast();
        let names: Vec<_> = suggest(&cast, "hat", 10)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Mad Hatter"]);
    }

    #[test]
    fn empty_query_lists_first_characters() {
        let cast = cast();
        assert_eq!(suggest(&cast, "", 2).len(), 2);
    }

    #[test]
    fn completion_replaces_query_and_moves_cursor() {
        let text = "Then @Ali said";
        let m = active_mention(text, 9).unwrap();
        let (out, cursor) = complete_mention(text, &m, "Alice Liddell");
        assert_eq!(out, "Then Alice Liddell said");
        assert_eq!(&out[..cursor], "Then Alice Liddell ");
    }

    #[test]
    fn completion_at_end_of_text_appends_space() {
        let text = "Hi @Bo";
        let m = active_mention(text, text.len()).unwrap();
        let (out, cursor) = complete_mention(text, &m, "Bob");
        assert_eq!(out, "Hi Bob ");
        assert_eq!(cursor, out.len());
    }

    #[test]
    fn completion_before_punctuation_inserts_space() {
        let text = "@Ha, run";
        let m = active_mention(text, 3).unwrap();
        let (out, cursor) = complete_mention(text, &m, "Mad Hatter");
        assert_eq!(out, "Mad Hatter , run");
        assert_eq!(cursor, "Mad Hatter ".len());
    }
}
