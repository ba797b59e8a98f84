//! Host configuration for the quicktag demo binary.
//!
//! [`HostConfig::load`] reads `~/.config/quicktag/config.toml`, creating it
//! with the built-in defaults if it does not yet exist. [`HostConfig::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests). The `[search]` section deserializes straight into
//! [`quicktag_core::SearchConfig`], so the file and the in-process snapshot
//! can never drift apart.

use serde::Deserialize;
use std::path::PathBuf;

use quicktag_core::SearchConfig;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
tag_search_enabled       = true
enabled_packs            = ["smileys", "gestures", "symbols"]
glyph_support_level      = 22
auto_restart_suggestions = true

[packs]
# Extra pack files (*.toml) are loaded from this directory when set.
# dir = "/home/me/.config/quicktag/packs"

[words]
list = ["hello", "help", "face", "fact", "thanks", "the", "there"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/quicktag/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub packs: PacksSection,
    #[serde(default)]
    pub words: WordsSection,
}

/// `[packs]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PacksSection {
    /// Directory of extra `*.toml` pack files, if any.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// `[words]` section of `config.toml`, the demo's toy word engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordsSection {
    #[serde(default)]
    pub list: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl HostConfig {
    /// Load from `~/.config/quicktag/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("quicktag")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
