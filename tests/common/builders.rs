//! Test builders and typing helpers for the stage harnesses.
//!
//! [`StageBuilder`] assembles a [`TagSearchStage`] over the builtin pack
//! catalog, a fresh in-memory document, and a [`SpyWords`] engine. Extra
//! packs registered on the builder shadow builtins of the same id, so
//! narrow tests can enable just their own tiny pack.

use quicktag::{BufferDocument, InputEvent, TagSearchStage};
use quicktag_core::{SearchConfig, SourcePack};
use quicktag_packs::PackCatalog;

use super::fake_words::SpyWords;
use super::fixtures::{pack_ids, reference_config};

/// The stage shape every harness drives.
pub type Stage = TagSearchStage<PackCatalog, BufferDocument, SpyWords>;

/// Fluent builder for harness stages.
///
/// # Example
///
/// ```rust
/// let mut stage = StageBuilder::new()
///     .packs(&["pets"])
///     .pack(pets_pack())
///     .build();
/// type_text(&mut stage, ":ca");
/// ```
pub struct StageBuilder {
    config: SearchConfig,
    extra_packs: Vec<SourcePack>,
    words: SpyWords,
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StageBuilder {
    /// Reference configuration, builtin packs, silent word engine.
    pub fn new() -> Self {
        StageBuilder {
            config: reference_config(),
            extra_packs: Vec::new(),
            words: SpyWords::silent(),
        }
    }

    /// Turn the tag-search feature flag off.
    pub fn disabled(mut self) -> Self {
        self.config.tag_search_enabled = false;
        self
    }

    /// Report this glyph-support level to the lifecycle gate.
    pub fn glyph_level(mut self, level: u32) -> Self {
        self.config.glyph_support_level = level;
        self
    }

    /// Enable exactly these pack ids, in this ranking order.
    pub fn packs(mut self, ids: &[&str]) -> Self {
        self.config.enabled_packs = pack_ids(ids);
        self
    }

    /// Register an extra pack in the catalog (shadowing a builtin of the
    /// same id). Enabling it is separate; see [`StageBuilder::packs`].
    pub fn pack(mut self, pack: SourcePack) -> Self {
        self.extra_packs.push(pack);
        self
    }

    /// Use this word engine instead of the silent spy.
    pub fn words(mut self, words: SpyWords) -> Self {
        self.words = words;
        self
    }

    pub fn build(self) -> Stage {
        let mut catalog = PackCatalog::builtin();
        for pack in self.extra_packs {
            catalog.register(pack);
        }
        TagSearchStage::new(self.config, catalog, BufferDocument::new(), self.words)
    }
}

/// Feed every character of `text` through the stage in order.
pub fn type_text(stage: &mut Stage, text: &str) {
    for c in text.chars() {
        stage.handle_key(InputEvent::Character(c));
    }
}

/// Press backward delete `count` times.
pub fn press_delete(stage: &mut Stage, count: usize) {
    for _ in 0..count {
        stage.handle_key(InputEvent::Delete);
    }
}
