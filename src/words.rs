//! Ordinary word suggestions, the non-search path of the strip.
//!
//! When no tag session is active the strip shows whatever the host's word
//! engine proposes for the word being typed. The stage talks to that engine
//! through [`WordSuggestions`] and guarantees it is never consulted while a
//! tag session is active or when one ends in a pick or a space.

use quicktag_core::SuggestionList;

/// Host word engine, consulted only outside tag-search mode.
pub trait WordSuggestions {
    /// Completions for the partial word currently being typed.
    fn suggestions_for(&self, typed: &str) -> Vec<String>;

    /// Dictionary membership check, made once when a word is committed.
    fn is_valid_word(&self, word: &str) -> bool;

    /// Next-word predictions, requested right after a word commit.
    fn next_words(&self, word: &str) -> Vec<String>;
}

/// A word engine over a fixed word list. Completions are prefix matches in
/// list order. Good enough for the demo and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticWordList {
    words: Vec<String>,
}

impl StaticWordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticWordList { words: words.into_iter().map(Into::into).collect() }
    }
}

impl WordSuggestions for StaticWordList {
    fn suggestions_for(&self, typed: &str) -> Vec<String> {
        if typed.is_empty() {
            return Vec::new();
        }
        let typed = typed.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&typed))
            .cloned()
            .collect()
    }

    fn is_valid_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    fn next_words(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Build the editable strip contents for a word-engine result.
pub fn word_strip(suggestions: Vec<String>) -> SuggestionList {
    SuggestionList::editable_from(suggestions)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
