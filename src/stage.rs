//! The tag-search stage, wiring input events to the searcher and the strip.
//!
//! [`TagSearchStage`] sits between the host's key loop and its suggestion
//! strip. Every printable character lands in the document immediately; the
//! stage tracks in parallel whether a tag session is open and keeps the
//! strip current. While a session is open the strip holds the frozen tag
//! list and the word engine is never consulted; outside a session the strip
//! holds editable word suggestions.
//!
//! Commit rules, in full:
//! * space during a session leaves the typed `:query` text in place,
//!   inserts the space, and ends the session with no word-engine calls
//! * picking the literal element replaces the typed span with
//!   `:query ` (trailing space included)
//! * picking a candidate replaces the typed span with the candidate
//!   verbatim, no trailing space, again with no word-engine calls
//!
//! The replaced span and the delete walk are both measured in grapheme
//! clusters of `:query`, so a query whose characters merged into fewer
//! clusters still erases cleanly.

use std::rc::Rc;

use unicode_segmentation::UnicodeSegmentation;

use quicktag_core::{
    is_literal_suggestion, DeleteOutcome, PackProvider, SearchConfig, SearcherCache,
    SuggestionList, TagSearcher, TAG_TRIGGER,
};

use crate::events::{InputEvent, SettingKey};
use crate::sink::TextSink;
use crate::words::{word_strip, WordSuggestions};

/// Failures surfaced to the host from [`TagSearchStage::pick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    #[error("pick requested while tag search is inactive")]
    PickWhileInactive,
    #[error("pick index {index} out of range for strip of length {len}")]
    PickIndexOutOfRange { index: usize, len: usize },
}

/// Host-side orchestrator for one input field.
pub struct TagSearchStage<P, S, W> {
    config: SearchConfig,
    packs: P,
    cache: SearcherCache,
    sink: S,
    words: W,
    /// The partial word typed since the last commit, trigger excluded.
    typed: String,
    /// What the suggestion strip currently shows.
    strip: SuggestionList,
}

impl<P, S, W> TagSearchStage<P, S, W>
where
    P: PackProvider,
    S: TextSink,
    W: WordSuggestions,
{
    pub fn new(config: SearchConfig, packs: P, sink: S, words: W) -> Self {
        let mut cache = SearcherCache::new();
        cache.get_or_create(&config, &packs);
        TagSearchStage {
            config,
            packs,
            cache,
            sink,
            words,
            typed: String::new(),
            strip: SuggestionList::editable(),
        }
    }

    /// Feed one keystroke through the stage.
    pub fn handle_key(&mut self, event: InputEvent) {
        match event {
            InputEvent::Character(c) => self.on_character(c),
            InputEvent::Delete => self.on_delete(),
        }
    }

    /// What the strip should display right now.
    pub fn get_suggestions(&self) -> &SuggestionList {
        &self.strip
    }

    pub fn is_search_mode_active(&self) -> bool {
        self.cache.current().is_some_and(|s| s.is_search_active())
    }

    /// Commit the strip entry at `index`.
    ///
    /// Only meaningful while a session is active; the strip is read-only
    /// word suggestions otherwise and picking them is the host's business.
    pub fn pick(&mut self, index: usize) -> Result<(), StageError> {
        let searcher = self
            .cache
            .current()
            .filter(|s| s.is_search_active())
            .ok_or(StageError::PickWhileInactive)?;
        let text = self
            .strip
            .get(index)
            .ok_or(StageError::PickIndexOutOfRange { index, len: self.strip.len() })?
            .to_owned();

        let query = searcher.query().unwrap_or_default();
        let literal = is_literal_suggestion(&text);
        let replacement = if literal {
            format!("{TAG_TRIGGER}{query} ")
        } else {
            text
        };

        let typed_span = format!("{TAG_TRIGGER}{query}");
        self.sink.delete_backward(typed_span.graphemes(true).count());
        self.sink.insert(&replacement);

        searcher.end_session();
        self.typed.clear();
        self.strip = SuggestionList::editable();
        tracing::debug!(index, literal, "tag suggestion picked");
        Ok(())
    }

    /// Absorb a settings change.
    ///
    /// Keys outside the searcher fingerprint only update the stored
    /// snapshot. Fingerprint keys re-resolve the searcher; when the
    /// instance survives unchanged so do the live session and the strip,
    /// and when it is replaced or dropped an active search simply ends.
    pub fn on_configuration_changed(&mut self, key: SettingKey, config: &SearchConfig) {
        self.config = config.clone();
        if !key.affects_searcher() {
            tracing::debug!(key = %key, "setting changed; searcher unaffected");
            return;
        }

        let before = self.cache.current();
        let was_searching = before.as_ref().is_some_and(|s| s.is_search_active());
        let after = self.cache.get_or_create(&self.config, &self.packs);

        let same_instance = match (&before, &after) {
            (Some(old), Some(new)) => Rc::ptr_eq(old, new),
            (None, None) => true,
            _ => false,
        };
        if same_instance {
            return;
        }

        tracing::debug!(key = %key, available = after.is_some(), "searcher replaced");
        if was_searching {
            self.strip = SuggestionList::editable();
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current searcher instance, if the feature is available. Exposed so
    /// hosts can track instance identity across settings changes.
    pub fn searcher(&self) -> Option<Rc<TagSearcher>> {
        self.cache.current()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn words(&self) -> &W {
        &self.words
    }

    // -----------------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------------

    fn on_character(&mut self, c: char) {
        if self.is_search_mode_active() {
            if c == ' ' {
                self.insert_char(' ');
                if let Some(searcher) = self.cache.current() {
                    searcher.end_session();
                }
                self.typed.clear();
                self.strip = SuggestionList::editable();
                tracing::debug!("tag search committed as typed text");
            } else {
                self.insert_char(c);
                if let Some(searcher) = self.cache.current() {
                    searcher.push_char(c);
                }
                self.refresh_tag_strip();
            }
            return;
        }

        if c == TAG_TRIGGER {
            if let Some(searcher) = self.cache.current() {
                self.insert_char(c);
                searcher.begin_session();
                self.refresh_tag_strip();
                return;
            }
        }

        self.insert_char(c);
        if c == ' ' {
            self.commit_word();
        } else {
            self.typed.push(c);
            self.refresh_word_strip();
        }
    }

    fn on_delete(&mut self) {
        if self.is_search_mode_active() {
            if let Some(searcher) = self.cache.current() {
                let before = format!("{TAG_TRIGGER}{}", searcher.query().unwrap_or_default());
                let outcome = searcher.delete_backward();
                let after = match outcome {
                    DeleteOutcome::EndedAtTrigger => String::new(),
                    _ => format!("{TAG_TRIGGER}{}", searcher.query().unwrap_or_default()),
                };
                // The document sheds exactly the clusters the typed span
                // shed. Usually one; zero when the removed chars had merged
                // into a neighboring cluster.
                let lost = before
                    .graphemes(true)
                    .count()
                    .saturating_sub(after.graphemes(true).count());
                self.sink.delete_backward(lost);
                match outcome {
                    DeleteOutcome::Shortened => self.refresh_tag_strip(),
                    // The trigger itself is gone; fall back to word
                    // suggestions for whatever word tracking remains.
                    DeleteOutcome::EndedAtTrigger => self.refresh_word_strip(),
                    DeleteOutcome::Inactive => {}
                }
            }
            return;
        }

        self.sink.delete_backward(1);
        if let Some((at, _)) = self.typed.grapheme_indices(true).last() {
            self.typed.truncate(at);
        }
        self.refresh_word_strip();
    }

    /// A space outside any session: consult the word engine once for
    /// validity and once for next-word predictions.
    fn commit_word(&mut self) {
        if self.typed.is_empty() {
            self.strip = SuggestionList::editable();
            return;
        }
        let word = std::mem::take(&mut self.typed);
        let known = self.words.is_valid_word(&word);
        let next = self.words.next_words(&word);
        tracing::debug!(word = %word, known, predictions = next.len(), "word committed");
        self.strip = word_strip(next);
    }

    fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.sink.insert(c.encode_utf8(&mut buf));
    }

    fn refresh_tag_strip(&mut self) {
        let list = self.cache.current().and_then(|s| s.current_suggestions());
        self.strip = list.unwrap_or_else(SuggestionList::editable);
    }

    fn refresh_word_strip(&mut self) {
        if self.typed.is_empty() {
            self.strip = SuggestionList::editable();
        } else {
            self.strip = word_strip(self.words.suggestions_for(&self.typed));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
