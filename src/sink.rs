//! Text sinks, where committed text ends up.
//!
//! The stage edits the document exclusively through [`TextSink`], and all
//! deletion is counted in grapheme clusters, not chars or code units. That
//! matters for committed candidates: a ZWJ sequence like 😶‍🌫️ or a
//! variation-selector pair like ☺️ is one user-visible unit and must
//! disappear with one delete.

use unicode_segmentation::UnicodeSegmentation;

/// Receiver of document edits issued by the stage.
pub trait TextSink {
    /// Append `text` at the insertion point.
    fn insert(&mut self, text: &str);

    /// Remove `count` grapheme clusters before the insertion point.
    /// Removing past the start of the document is not an error.
    fn delete_backward(&mut self, count: usize);
}

/// An in-memory document with the insertion point pinned at the end.
///
/// This is the reference sink: the demo types into one and tests assert on
/// its final text. Hosts with a real editor implement [`TextSink`] over
/// their own buffer instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferDocument {
    text: String,
}

impl BufferDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl TextSink for BufferDocument {
    fn insert(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_backward(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let starts: Vec<usize> = self.text.grapheme_indices(true).map(|(i, _)| i).collect();
        let keep = starts.len().saturating_sub(count);
        let cut = starts.get(keep).copied().unwrap_or(0);
        self.text.truncate(cut);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_appends() {
        let mut doc = BufferDocument::new();
        doc.insert("hi ");
        doc.insert("there");
        assert_eq!(doc.text(), "hi there");
    }

    #[test]
    fn delete_removes_whole_ascii_chars() {
        let mut doc = BufferDocument::new();
        doc.insert("hello");
        doc.delete_backward(2);
        assert_eq!(doc.text(), "hel");
    }

    #[test]
    fn delete_removes_a_zwj_sequence_as_one_unit() {
        let mut doc = BufferDocument::new();
        doc.insert("ok 😶‍🌫️");
        doc.delete_backward(1);
        assert_eq!(doc.text(), "ok ");
    }

    #[test]
    fn delete_removes_a_variation_selector_pair_as_one_unit() {
        let mut doc = BufferDocument::new();
        doc.insert("x☺️");
        doc.delete_backward(1);
        assert_eq!(doc.text(), "x");
    }

    #[test]
    fn delete_past_start_clears_without_panicking() {
        let mut doc = BufferDocument::new();
        doc.insert("ab");
        doc.delete_backward(10);
        assert_eq!(doc.text(), "");
        doc.delete_backward(1);
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn delete_zero_is_a_no_op() {
        let mut doc = BufferDocument::new();
        doc.insert("keep");
        doc.delete_backward(0);
        assert_eq!(doc.text(), "keep");
    }
}
