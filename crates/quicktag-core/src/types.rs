//! Core types for quicktag-core.
//!
//! This module defines the fundamental data shared across all layers: the
//! [`TagEntry`] pair, the [`SourcePack`] it is loaded from, the [`PackId`]
//! used to enable packs, and the reserved characters of the search mode.

use serde::Deserialize;

/// Character that switches the input stream into tag-search mode.
pub const TAG_TRIGGER: char = ':';

/// Sentinel glyph prefixed to the literal suggestion (the magnifying glass).
///
/// It never occurs in ordinary typed text, so the commit step can tell
/// "insert the typed text verbatim" apart from "insert a resolved candidate"
/// by looking at the first character of the picked suggestion.
pub const LITERAL_MARKER: char = '\u{1F50D}';

/// A single tag-to-candidate association inside a built dictionary.
///
/// Invariant: both sides are non-empty, and `tag` is lowercased at build
/// time so queries match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Lowercased search tag, e.g. `"grinning face"`.
    pub tag: String,
    /// The symbol or grapheme cluster the tag resolves to, e.g. `"😀"`.
    pub candidate: String,
}

/// Identifier of a source pack, as referenced by the enabled-packs setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PackId(String);

impl PackId {
    pub fn new(id: impl Into<String>) -> Self {
        PackId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackId {
    fn from(id: &str) -> Self {
        PackId(id.to_string())
    }
}

impl From<String> for PackId {
    fn from(id: String) -> Self {
        PackId(id)
    }
}

/// A named, independently enableable collection of raw tag entries.
///
/// Entries are raw and unvalidated here; the dictionary build is where
/// empty tags or candidates are weeded out. Declaration order is
/// significant and is preserved all the way into match ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePack {
    pub id: PackId,
    /// `(tag, candidate)` pairs in declaration order.
    pub entries: Vec<(String, String)>,
}

impl SourcePack {
    pub fn new(id: impl Into<PackId>) -> Self {
        SourcePack { id: id.into(), entries: Vec::new() }
    }

    /// Build a pack from a static table, keeping table order.
    pub fn from_table(id: impl Into<PackId>, table: &[(&str, &str)]) -> Self {
        SourcePack {
            id: id.into(),
            entries: table
                .iter()
                .map(|(tag, candidate)| (tag.to_string(), candidate.to_string()))
                .collect(),
        }
    }

    pub fn push_entry(&mut self, tag: impl Into<String>, candidate: impl Into<String>) {
        self.entries.push((tag.into(), candidate.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_id_display_roundtrip() {
        let id = PackId::new("smileys");
        assert_eq!(id.to_string(), "smileys");
        assert_eq!(id.as_str(), "smileys");
        assert_eq!(PackId::from("smileys"), id);
    }

    #[test]
    fn from_table_preserves_order() {
        let pack = SourcePack::from_table("demo", &[("b", "2"), ("a", "1")]);
        assert_eq!(pack.entries[0], ("b".to_string(), "2".to_string()));
        assert_eq!(pack.entries[1], ("a".to_string(), "1".to_string()));
        assert_eq!(pack.len(), 2);
    }

    #[test]
    fn marker_is_not_ordinary_text() {
        assert!(!LITERAL_MARKER.is_alphanumeric());
        assert_ne!(LITERAL_MARKER, TAG_TRIGGER);
    }
}
