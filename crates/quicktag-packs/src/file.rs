//! TOML pack files.
//!
//! Hosts can ship extra packs as standalone TOML files and point the
//! catalog at a directory of them. A pack file declares its id and an
//! ordered list of entries:
//!
//! ```toml
//! id = "flags"
//!
//! [[entries]]
//! tag = "rainbow flag"
//! candidate = "🏳️‍🌈"
//!
//! [[entries]]
//! tag = "pirate flag"
//! candidate = "🏴‍☠️"
//! ```
//!
//! Entry order in the file is the ranking order. Structural problems (bad
//! TOML, missing fields) fail the load; content problems (empty tag or
//! candidate) are left for the dictionary build, which skips them with a
//! warning.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use quicktag_core::{PackId, SourcePack};

/// Failures while loading pack files.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("failed to read pack file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },
    #[error("pack file {path} is not a valid pack")]
    Parse {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },
    #[error("pack file {path} declares an empty id")]
    MissingId { path: PathBuf },
    #[error("failed to scan pack directory {path}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct PackFile {
    id: String,
    #[serde(default)]
    entries: Vec<PackFileEntry>,
}

#[derive(Debug, Deserialize)]
struct PackFileEntry {
    tag: String,
    candidate: String,
}

/// Load a single pack file.
pub fn load_pack_file(path: &Path) -> Result<SourcePack, PackError> {
    let raw: PackFile = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .map_err(|source| PackError::Read { path: path.to_owned(), source })?
        .try_deserialize()
        .map_err(|source| PackError::Parse { path: path.to_owned(), source })?;

    if raw.id.is_empty() {
        return Err(PackError::MissingId { path: path.to_owned() });
    }

    let mut pack = SourcePack::new(PackId::new(raw.id));
    for entry in raw.entries {
        pack.push_entry(entry.tag, entry.candidate);
    }
    tracing::debug!(path = %path.display(), pack = %pack.id, entries = pack.len(), "loaded pack file");
    Ok(pack)
}

/// Load every `*.toml` file in `dir`, in file-name order.
///
/// File-name order keeps pack ranking deterministic across platforms whose
/// directory iteration order differs.
pub fn load_pack_dir(dir: &Path) -> Result<Vec<SourcePack>, PackError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|source| PackError::Scan { path: dir.to_owned(), source })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    paths.sort();

    let mut packs = Vec::with_capacity(paths.len());
    for path in paths {
        packs.push(load_pack_file(&path)?);
    }
    Ok(packs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_pack(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_entries_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pack(
            dir.path(),
            "flags.toml",
            r#"
id = "flags"

[[entries]]
tag = "rainbow flag"
candidate = "🏳️‍🌈"

[[entries]]
tag = "pirate flag"
candidate = "🏴‍☠️"
"#,
        );

        let pack = load_pack_file(&path).unwrap();
        assert_eq!(pack.id.as_str(), "flags");
        assert_eq!(
            pack.entries,
            vec![
                ("rainbow flag".to_string(), "🏳️‍🌈".to_string()),
                ("pirate flag".to_string(), "🏴‍☠️".to_string()),
            ]
        );
    }

    #[test]
    fn empty_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pack(dir.path(), "anon.toml", "id = \"\"\n");
        assert!(matches!(load_pack_file(&path), Err(PackError::MissingId { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_pack_file(Path::new("/no/such/pack.toml")).unwrap_err();
        assert!(matches!(err, PackError::Read { .. }));
    }

    #[test]
    fn entry_without_candidate_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pack(
            dir.path(),
            "broken.toml",
            "id = \"broken\"\n\n[[entries]]\ntag = \"lonely\"\n",
        );
        assert!(matches!(load_pack_file(&path), Err(PackError::Parse { .. })));
    }

    #[test]
    fn directory_load_orders_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        write_pack(dir.path(), "b-second.toml", "id = \"second\"\n");
        write_pack(dir.path(), "a-first.toml", "id = \"first\"\n");
        write_pack(dir.path(), "notes.txt", "not a pack");

        let packs = load_pack_dir(dir.path()).unwrap();
        let ids: Vec<&str> = packs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }
}
