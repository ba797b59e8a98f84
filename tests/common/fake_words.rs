//! SpyWords — a word engine that records every call made to it.
//!
//! The central guarantee under test in the commit harnesses is negative:
//! tag-search flows must never consult the word engine. The spy records
//! calls through interior mutability so harnesses can assert on exactly
//! which collaborator methods ran, and in what order.

use std::cell::RefCell;

use quicktag::WordSuggestions;

/// One recorded call to the word engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordCall {
    SuggestionsFor(String),
    IsValidWord(String),
    NextWords(String),
}

/// A scripted [`WordSuggestions`] implementation with a call log.
#[derive(Debug, Default)]
pub struct SpyWords {
    completions: Vec<String>,
    predictions: Vec<String>,
    valid: bool,
    calls: RefCell<Vec<WordCall>>,
}

impl SpyWords {
    /// A spy that proposes nothing and accepts nothing.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Completions returned for every `suggestions_for` call.
    pub fn with_completions<I, S>(mut self, completions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completions = completions.into_iter().map(Into::into).collect();
        self
    }

    /// Predictions returned for every `next_words` call.
    pub fn with_predictions<I, S>(mut self, predictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predictions = predictions.into_iter().map(Into::into).collect();
        self
    }

    /// Answer for every `is_valid_word` call.
    pub fn accepting(mut self) -> Self {
        self.valid = true;
        self
    }

    /// The full call log, in call order.
    pub fn calls(&self) -> Vec<WordCall> {
        self.calls.borrow().clone()
    }

    /// Calls made at word-commit time (`is_valid_word` and `next_words`).
    pub fn commit_calls(&self) -> Vec<WordCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| !matches!(call, WordCall::SuggestionsFor(_)))
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl WordSuggestions for SpyWords {
    fn suggestions_for(&self, typed: &str) -> Vec<String> {
        self.calls
            .borrow_mut()
            .push(WordCall::SuggestionsFor(typed.to_string()));
        self.completions.clone()
    }

    fn is_valid_word(&self, word: &str) -> bool {
        self.calls
            .borrow_mut()
            .push(WordCall::IsValidWord(word.to_string()));
        self.valid
    }

    fn next_words(&self, word: &str) -> Vec<String> {
        self.calls
            .borrow_mut()
            .push(WordCall::NextWords(word.to_string()));
        self.predictions.clone()
    }
}
