//! Searcher lifecycle — building, caching, and replacing [`TagSearcher`]s.
//!
//! A [`TagSearcher`] bundles one built dictionary with one session. The
//! host never constructs it directly; it asks [`SearcherCache`] after every
//! configuration change. The cache hands back the same instance for as long
//! as the searcher-relevant configuration is unchanged, and builds a fresh
//! one the moment the enabled pack set differs. Instance identity is the
//! host's signal: a new instance means the dictionary changed and any
//! visible suggestions are stale.
//!
//! Single-threaded by design. Sessions sit behind a [`RefCell`] and
//! instances are shared with [`Rc`], so a searcher must stay on the thread
//! that created it. The dictionary snapshot itself is freely shareable.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SearchConfig;
use crate::dictionary::TagDictionary;
use crate::session::{DeleteOutcome, SearchSession};
use crate::suggestions::{build_suggestions, SuggestionList};
use crate::types::{PackId, SourcePack};

/// Source of pack contents, keyed by [`PackId`].
///
/// Implementations decide where packs live (builtin tables, files on disk).
/// Unknown ids return `None`; the searcher build skips them with a warning
/// rather than failing, so one stale id in the enabled-packs setting never
/// takes the feature down.
pub trait PackProvider {
    fn pack(&self, id: &PackId) -> Option<SourcePack>;
}

/// In-memory provider over a plain list of packs.
impl PackProvider for Vec<SourcePack> {
    fn pack(&self, id: &PackId) -> Option<SourcePack> {
        self.iter().find(|pack| &pack.id == id).cloned()
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// One dictionary plus one session, built for a specific configuration.
#[derive(Debug)]
pub struct TagSearcher {
    dictionary: TagDictionary,
    session: RefCell<SearchSession>,
}

impl TagSearcher {
    /// Resolve the configured packs through `provider` and build the
    /// dictionary. Ids the provider does not know are skipped.
    pub fn build(config: &SearchConfig, provider: &dyn PackProvider) -> Self {
        let mut packs = Vec::with_capacity(config.enabled_packs.len());
        for id in &config.enabled_packs {
            match provider.pack(id) {
                Some(pack) => packs.push(pack),
                None => tracing::warn!(pack = %id, "unknown tag pack in configuration; skipping"),
            }
        }

        TagSearcher {
            dictionary: TagDictionary::build(&packs),
            session: RefCell::new(SearchSession::new()),
        }
    }

    pub fn dictionary(&self) -> &TagDictionary {
        &self.dictionary
    }

    pub fn is_search_active(&self) -> bool {
        self.session.borrow().is_active()
    }

    /// The raw query of the active session, if any.
    pub fn query(&self) -> Option<String> {
        self.session.borrow().query().map(str::to_owned)
    }

    pub fn begin_session(&self) {
        self.session.borrow_mut().begin();
    }

    pub fn push_char(&self, c: char) {
        self.session.borrow_mut().push_char(c);
    }

    pub fn delete_backward(&self) -> DeleteOutcome {
        self.session.borrow_mut().delete_backward()
    }

    /// End the session, returning its final query if one was active.
    pub fn end_session(&self) -> Option<String> {
        self.session.borrow_mut().end()
    }

    /// The frozen suggestion list for the current session state, or `None`
    /// when no session is active. Rebuilt from the dictionary on each call.
    pub fn current_suggestions(&self) -> Option<SuggestionList> {
        let session = self.session.borrow();
        session
            .query()
            .map(|query| build_suggestions(&self.dictionary, query))
    }
}

// ---------------------------------------------------------------------------
// Lifecycle cache
// ---------------------------------------------------------------------------

/// The slice of [`SearchConfig`] that decides whether a cached searcher can
/// be reused. Availability is checked before this ever gets compared, so
/// the pack set is the whole key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    packs: Vec<PackId>,
}

impl Fingerprint {
    fn of(config: &SearchConfig) -> Self {
        Fingerprint { packs: config.enabled_packs.clone() }
    }
}

/// Owns at most one searcher and reuses it across configuration changes
/// that do not affect it.
#[derive(Debug, Default)]
pub struct SearcherCache {
    cached: Option<(Fingerprint, Rc<TagSearcher>)>,
}

impl SearcherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The searcher for `config`, or `None` when the feature is off or the
    /// platform cannot display candidate glyphs.
    ///
    /// Re-invoking with an unchanged configuration returns the same
    /// instance (and therefore the same live session). A changed pack set
    /// replaces the instance; an unavailable configuration discards it, so
    /// re-enabling always starts from a fresh build.
    pub fn get_or_create(
        &mut self,
        config: &SearchConfig,
        provider: &dyn PackProvider,
    ) -> Option<Rc<TagSearcher>> {
        if !config.searcher_available() {
            if self.cached.take().is_some() {
                tracing::debug!("tag searcher released; feature unavailable");
            }
            return None;
        }

        let fingerprint = Fingerprint::of(config);
        if let Some((cached_fp, searcher)) = &self.cached {
            if *cached_fp == fingerprint {
                return Some(Rc::clone(searcher));
            }
        }

        let searcher = Rc::new(TagSearcher::build(config, provider));
        tracing::debug!(
            packs = fingerprint.packs.len(),
            entries = searcher.dictionary().len(),
            "tag searcher built"
        );
        self.cached = Some((fingerprint, Rc::clone(&searcher)));
        Some(searcher)
    }

    /// The cached searcher without consulting configuration, if any.
    pub fn current(&self) -> Option<Rc<TagSearcher>> {
        self.cached.as_ref().map(|(_, searcher)| Rc::clone(searcher))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
