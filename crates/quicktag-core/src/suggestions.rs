//! Suggestion list construction and the frozen-list contract.
//!
//! Tag-search results are handed to the suggestion strip as a
//! [`SuggestionList`] that refuses every mutation. Ordinary word suggestions
//! flow through the same type in its editable form, so downstream code uses
//! one API and the freeze is enforced at runtime rather than by parallel
//! types.
//!
//! [`build_suggestions`] produces the frozen list for an active session:
//! the literal element first (marker, trigger, then the raw query verbatim),
//! followed by every matching candidate in dictionary order.

use crate::dictionary::TagDictionary;
use crate::matcher::matching_candidates;
use crate::types::{LITERAL_MARKER, TAG_TRIGGER};

/// Rejected operations on a [`SuggestionList`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestionsError {
    /// The list is frozen; no mutation is permitted.
    #[error("suggestion list is frozen and cannot be modified")]
    UnsupportedMutation,
    /// A positional mutation named a slot the list does not have.
    #[error("index {index} out of range for suggestion list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// An ordered list of suggestion strings, optionally frozen.
///
/// Frozen lists come out of [`build_suggestions`]; every mutating method on
/// them returns [`SuggestionsError::UnsupportedMutation`] and leaves the
/// contents untouched. Editable lists behave like a plain growable vector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionList {
    items: Vec<String>,
    frozen: bool,
}

impl SuggestionList {
    /// An empty editable list, for ordinary word-suggestion flows.
    pub fn editable() -> Self {
        SuggestionList { items: Vec::new(), frozen: false }
    }

    /// An editable list seeded with `items`.
    pub fn editable_from<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SuggestionList {
            items: items.into_iter().map(Into::into).collect(),
            frozen: false,
        }
    }

    fn frozen_from(items: Vec<String>) -> Self {
        SuggestionList { items, frozen: true }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    fn guard(&self) -> Result<(), SuggestionsError> {
        if self.frozen {
            Err(SuggestionsError::UnsupportedMutation)
        } else {
            Ok(())
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SuggestionsError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(SuggestionsError::IndexOutOfRange { index, len: self.items.len() })
        }
    }

    /// Append an item.
    pub fn push(&mut self, item: impl Into<String>) -> Result<(), SuggestionsError> {
        self.guard()?;
        self.items.push(item.into());
        Ok(())
    }

    /// Insert an item at `index`, shifting later items right.
    pub fn insert(&mut self, index: usize, item: impl Into<String>) -> Result<(), SuggestionsError> {
        self.guard()?;
        if index > self.items.len() {
            return Err(SuggestionsError::IndexOutOfRange { index, len: self.items.len() });
        }
        self.items.insert(index, item.into());
        Ok(())
    }

    /// Replace the item at `index`.
    pub fn set(&mut self, index: usize, item: impl Into<String>) -> Result<(), SuggestionsError> {
        self.guard()?;
        self.check_index(index)?;
        self.items[index] = item.into();
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn remove(&mut self, index: usize) -> Result<String, SuggestionsError> {
        self.guard()?;
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Remove the first occurrence of `item`, reporting whether one existed.
    pub fn remove_item(&mut self, item: &str) -> Result<bool, SuggestionsError> {
        self.guard()?;
        match self.items.iter().position(|s| s == item) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop every item.
    pub fn clear(&mut self) -> Result<(), SuggestionsError> {
        self.guard()?;
        self.items.clear();
        Ok(())
    }
}

impl std::ops::Index<usize> for SuggestionList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a SuggestionList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Build the frozen suggestion list for an active session.
///
/// Index 0 is always the literal element: marker, trigger, raw query, with
/// the query in its typed casing. Matching candidates follow in dictionary
/// order, so an empty query yields a one-element list.
pub fn build_suggestions(dictionary: &TagDictionary, raw_query: &str) -> SuggestionList {
    let matches = matching_candidates(dictionary, raw_query);
    let mut items = Vec::with_capacity(matches.len() + 1);
    items.push(format!("{LITERAL_MARKER}{TAG_TRIGGER}{raw_query}"));
    items.extend(matches.into_iter().map(str::to_owned));
    tracing::debug!(query = %raw_query, suggestions = items.len(), "built tag suggestions");
    SuggestionList::frozen_from(items)
}

/// Whether a picked suggestion is the literal element rather than a
/// candidate. The marker glyph never occurs in pack candidates, so the
/// picked text alone decides.
pub fn is_literal_suggestion(text: &str) -> bool {
    text.starts_with(LITERAL_MARKER)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourcePack;
    use pretty_assertions::assert_eq;

    fn dict() -> TagDictionary {
        TagDictionary::build(&[SourcePack::from_table(
            "pets",
            &[("cat", "🐱"), ("dog", "🐶"), ("bobcat", "🐈")],
        )])
    }

    #[test]
    fn literal_element_leads_then_matches_in_order() {
        let list = build_suggestions(&dict(), "cat");
        assert_eq!(list.as_slice(), ["🔍:cat", "🐱", "🐈"]);
        assert!(list.is_frozen());
    }

    #[test]
    fn empty_query_yields_only_the_literal_element() {
        let list = build_suggestions(&dict(), "");
        assert_eq!(list.as_slice(), ["🔍:"]);
    }

    #[test]
    fn literal_element_keeps_typed_casing() {
        let list = build_suggestions(&dict(), "CaT");
        assert_eq!(list.first(), Some("🔍:CaT"));
        assert_eq!(list.get(1), Some("🐱"));
    }

    #[test]
    fn frozen_list_rejects_every_mutation() {
        let mut list = build_suggestions(&dict(), "cat");
        let before = list.clone();

        assert_eq!(list.push("x"), Err(SuggestionsError::UnsupportedMutation));
        assert_eq!(list.insert(0, "x"), Err(SuggestionsError::UnsupportedMutation));
        assert_eq!(list.set(0, "x"), Err(SuggestionsError::UnsupportedMutation));
        assert_eq!(list.remove(0), Err(SuggestionsError::UnsupportedMutation));
        assert_eq!(list.remove_item("🐱"), Err(SuggestionsError::UnsupportedMutation));
        assert_eq!(list.clear(), Err(SuggestionsError::UnsupportedMutation));

        assert_eq!(list, before);
    }

    #[test]
    fn editable_list_accepts_mutations() {
        let mut list = SuggestionList::editable();
        list.push("hello").unwrap();
        list.push("world").unwrap();
        list.insert(1, "there").unwrap();
        list.set(0, "hi").unwrap();
        assert_eq!(list.as_slice(), ["hi", "there", "world"]);

        assert_eq!(list.remove(1).unwrap(), "there");
        assert!(list.remove_item("world").unwrap());
        assert!(!list.remove_item("absent").unwrap());
        list.clear().unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn editable_list_still_checks_indices() {
        let mut list = SuggestionList::editable_from(["one"]);
        assert_eq!(
            list.set(3, "x"),
            Err(SuggestionsError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            list.remove(1),
            Err(SuggestionsError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn literal_detection_keys_off_the_marker() {
        assert!(is_literal_suggestion("🔍:face"));
        assert!(is_literal_suggestion("🔍:"));
        assert!(!is_literal_suggestion("😀"));
        assert!(!is_literal_suggestion(":face"));
    }

    #[test]
    fn list_iterates_like_a_slice() {
        let list = build_suggestions(&dict(), "dog");
        let collected: Vec<&str> = (&list).into_iter().collect();
        assert_eq!(collected, ["🔍:dog", "🐶"]);
        assert_eq!(&list[1], "🐶");
    }
}
