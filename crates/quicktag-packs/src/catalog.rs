//! Pack catalog — the one [`PackProvider`] hosts talk to.
//!
//! Resolution order is file packs first, then builtins, so a host can
//! override a builtin pack by shipping a file with the same id. The catalog
//! holds raw packs only; dictionary building and entry validation stay in
//! the core crate.

use std::path::Path;

use quicktag_core::{PackId, PackProvider, SourcePack};

use crate::builtin::{builtin_ids, builtin_pack};
use crate::file::{load_pack_dir, PackError};

/// Builtin packs plus any packs loaded from files.
#[derive(Debug, Default)]
pub struct PackCatalog {
    file_packs: Vec<SourcePack>,
}

impl PackCatalog {
    /// A catalog over the builtin packs only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// A catalog over the builtin packs plus every `*.toml` pack in `dir`.
    pub fn with_pack_dir(dir: &Path) -> Result<Self, PackError> {
        let file_packs = load_pack_dir(dir)?;
        tracing::debug!(dir = %dir.display(), packs = file_packs.len(), "pack catalog loaded");
        Ok(PackCatalog { file_packs })
    }

    /// Register an in-memory pack, replacing any file pack with the same id.
    pub fn register(&mut self, pack: SourcePack) {
        match self.file_packs.iter_mut().find(|p| p.id == pack.id) {
            Some(slot) => *slot = pack,
            None => self.file_packs.push(pack),
        }
    }

    /// Every resolvable pack id: file packs in load order, then builtins
    /// not shadowed by a file pack.
    pub fn ids(&self) -> Vec<PackId> {
        let mut ids: Vec<PackId> = self.file_packs.iter().map(|p| p.id.clone()).collect();
        for id in builtin_ids() {
            let id = PackId::from(id);
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

impl PackProvider for PackCatalog {
    fn pack(&self, id: &PackId) -> Option<SourcePack> {
        self.file_packs
            .iter()
            .find(|pack| &pack.id == id)
            .cloned()
            .or_else(|| builtin_pack(id))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
