//! quicktag — inline tag search for symbol and emoji insertion.
//!
//! This crate is the host side of the pipeline: it turns keystrokes into
//! document edits and strip updates, on top of the pure search machinery in
//! `quicktag-core` and the pack sources in `quicktag-packs`. Integration
//! tests and the demo binary import the modules directly.
//!
//! # Architecture
//!
//! ```text
//! InputEvent ──► TagSearchStage ──► TextSink (document)
//!                     │      │
//!   SearcherCache ◄───┘      └────► SuggestionList (strip)
//! ```
//!
//! Everything runs on the caller's thread; the stage holds no channels and
//! spawns nothing.

pub mod config;
pub mod demo;
pub mod events;
pub mod sink;
pub mod stage;
pub mod words;

pub use config::HostConfig;
pub use events::{InputEvent, SettingKey};
pub use sink::{BufferDocument, TextSink};
pub use stage::{StageError, TagSearchStage};
pub use words::{StaticWordList, WordSuggestions};
