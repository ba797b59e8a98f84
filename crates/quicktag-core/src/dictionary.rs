//! Tag dictionary — immutable ordered collection of tag entries.
//!
//! [`TagDictionary::build`] walks the given packs in order and their entries
//! in declaration order, so the finished dictionary is the concatenation of
//! its inputs. That order is load-bearing: match ranking is dictionary order
//! and nothing else, which is how pack curators control what surfaces first.

use std::sync::Arc;

use crate::types::{SourcePack, TagEntry};

/// Immutable ordered sequence of [`TagEntry`] values.
///
/// Built once per searcher lifecycle; never mutated in place. The backing
/// storage is shared, so cloning a dictionary (or handing it to a renderer
/// on another thread) is cheap and safe without further synchronization.
#[derive(Debug, Clone)]
pub struct TagDictionary {
    entries: Arc<[TagEntry]>,
}

impl TagDictionary {
    /// Build a dictionary from `packs`, keeping concatenation order.
    ///
    /// Malformed entries (empty tag or empty candidate) are skipped one by
    /// one with a warning; a bad entry never aborts the build. Tags are
    /// lowercased here so matching can be a plain substring test.
    pub fn build(packs: &[SourcePack]) -> Self {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for pack in packs {
            for (tag, candidate) in &pack.entries {
                if tag.is_empty() || candidate.is_empty() {
                    skipped += 1;
                    tracing::warn!(
                        pack = %pack.id,
                        tag = %tag,
                        candidate = %candidate,
                        "skipping malformed pack entry"
                    );
                    continue;
                }
                entries.push(TagEntry {
                    tag: tag.to_lowercase(),
                    candidate: candidate.clone(),
                });
            }
        }

        tracing::debug!(
            packs = packs.len(),
            entries = entries.len(),
            skipped,
            "tag dictionary built"
        );

        TagDictionary { entries: entries.into() }
    }

    /// Empty dictionary, used when no packs are enabled.
    pub fn empty() -> Self {
        TagDictionary { entries: Arc::from(Vec::new()) }
    }

    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagEntry> {
        self.entries.iter()
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
