//! Static fixtures shared across harnesses.
//!
//! The builtin packs double as the reference corpus: the `smileys` pack
//! carries a known number of face-tagged entries, which pins strip sizes
//! for the classic "face" query without any per-test data setup.

use quicktag_core::{PackId, SearchConfig, SourcePack};
use quicktag_packs::default_pack_ids;

/// Face-tagged entries in the builtin `smileys` pack.
pub const FACE_MATCHES: usize = 130;

/// Strip length for the query `face` over the reference packs: the literal
/// element plus every match.
pub const FACE_STRIP_LEN: usize = FACE_MATCHES + 1;

/// The reference configuration: feature on, all builtin packs enabled, at
/// exactly the minimum glyph support level.
pub fn reference_config() -> SearchConfig {
    SearchConfig::default().with_packs(default_pack_ids())
}

/// A three-entry pack for narrow matcher and ordering tests.
pub fn pets_pack() -> SourcePack {
    SourcePack::from_table("pets", &[("cat", "🐱"), ("dog", "🐶"), ("bobcat", "🐈")])
}

/// A pack whose candidates are multi-scalar grapheme clusters.
pub fn clusters_pack() -> SourcePack {
    SourcePack::from_table(
        "clusters",
        &[
            ("foggy", "😶‍🌫️"),
            ("dizzy stars", "😵‍💫"),
            ("rainbow flag", "🏳️‍🌈"),
        ],
    )
}

/// Enabled-packs value selecting only the given ids.
pub fn pack_ids(ids: &[&str]) -> Vec<PackId> {
    ids.iter().map(|&id| PackId::from(id)).collect()
}
