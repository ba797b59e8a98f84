//! Typed search configuration.
//!
//! [`SearchConfig`] is the snapshot of host preferences the searcher cares
//! about. The host owns persistence and change notification; this crate only
//! ever sees fully-formed snapshots, never raw preference keys.

use serde::Deserialize;

use crate::types::PackId;

/// Minimum glyph-support level of the host platform. Below this the
/// candidate glyphs cannot be displayed and the searcher is never built.
pub const MIN_GLYPH_SUPPORT_LEVEL: u32 = 22;

/// Host preference snapshot consumed by the searcher lifecycle.
///
/// Only `tag_search_enabled` and `enabled_packs` participate in the cache
/// fingerprint; the remaining fields ride along so the host can hand over
/// one coherent snapshot, and changing them never causes a rebuild.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Feature flag for the whole tag-search mode.
    #[serde(default = "default_tag_search_enabled")]
    pub tag_search_enabled: bool,
    /// Enabled source packs, in the order their entries should rank.
    #[serde(default)]
    pub enabled_packs: Vec<PackId>,
    /// Glyph-support level reported by the host platform.
    #[serde(default = "default_glyph_support_level")]
    pub glyph_support_level: u32,
    /// Unrelated host preference; kept in the snapshot but irrelevant to
    /// the searcher cache.
    #[serde(default = "default_auto_restart_suggestions")]
    pub auto_restart_suggestions: bool,
}

fn default_tag_search_enabled() -> bool { true }
fn default_glyph_support_level() -> u32 { MIN_GLYPH_SUPPORT_LEVEL }
fn default_auto_restart_suggestions() -> bool { true }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tag_search_enabled: default_tag_search_enabled(),
            enabled_packs: Vec::new(),
            glyph_support_level: default_glyph_support_level(),
            auto_restart_suggestions: default_auto_restart_suggestions(),
        }
    }
}

impl SearchConfig {
    /// True when the feature flag is on and the platform can display the
    /// candidate glyphs. The lifecycle manager returns no searcher otherwise.
    pub fn searcher_available(&self) -> bool {
        self.tag_search_enabled && self.glyph_support_level >= MIN_GLYPH_SUPPORT_LEVEL
    }

    pub fn with_packs(mut self, packs: impl IntoIterator<Item = PackId>) -> Self {
        self.enabled_packs = packs.into_iter().collect();
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
