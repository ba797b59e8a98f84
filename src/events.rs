//! Input events and setting keys as the host reports them.
//!
//! The stage consumes a minimal event vocabulary: printable characters
//! (space included) and backward deletes. Anything richer the host may
//! have, cursor movement, selection, IME composition, is outside tag
//! search and never reaches the stage.

/// One keystroke worth of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable character, including space and the trigger character.
    Character(char),
    /// Backward delete of one unit.
    Delete,
}

/// Which host setting changed, reported alongside the fresh snapshot.
///
/// The stage only rebuilds the searcher for keys that feed the searcher
/// fingerprint; everything else is stored and otherwise ignored, so a
/// theme change mid-search never drops the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// The tag-search feature flag.
    QuickTagSearch,
    /// The enabled pack set.
    ActiveTagPacks,
    /// Whether suggestions restart after cursor moves. Unrelated to search.
    AutoRestartSuggestions,
    /// Visual theme. Unrelated to search.
    KeyboardTheme,
    /// Keypress sound. Unrelated to search.
    SoundOnKeyPress,
}

impl SettingKey {
    /// Whether a change to this key can alter the searcher lifecycle.
    pub fn affects_searcher(&self) -> bool {
        matches!(self, SettingKey::QuickTagSearch | SettingKey::ActiveTagPacks)
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SettingKey::QuickTagSearch => "quick_tag_search",
            SettingKey::ActiveTagPacks => "active_tag_packs",
            SettingKey::AutoRestartSuggestions => "auto_restart_suggestions",
            SettingKey::KeyboardTheme => "keyboard_theme",
            SettingKey::SoundOnKeyPress => "sound_on_key_press",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
