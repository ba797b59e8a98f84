//! quicktag-core — tag search over an inline text stream.
//!
//! This crate holds the pure search pipeline: dictionary construction,
//! query matching, the session state machine, suggestion-list building, and
//! the searcher lifecycle cache. It knows nothing about key events, text
//! buffers, or where packs come from; hosts supply those through
//! [`PackProvider`] and drive the session from their own input loop.
//!
//! # Architecture
//!
//! ```text
//! SourcePack ──► TagDictionary ──► matcher ──► SuggestionList
//!                      │                            ▲
//!                      └──── TagSearcher ◄── SearchSession
//!                                 ▲
//!                          SearcherCache
//! ```
//!
//! Everything here is single-threaded; sessions use interior mutability and
//! searcher instances are shared with `Rc`. Only the built dictionary
//! snapshot is safe to hand across threads.

pub mod config;
pub mod dictionary;
pub mod matcher;
pub mod searcher;
pub mod session;
pub mod suggestions;
pub mod types;

pub use config::{SearchConfig, MIN_GLYPH_SUPPORT_LEVEL};
pub use dictionary::TagDictionary;
pub use matcher::matching_candidates;
pub use searcher::{PackProvider, SearcherCache, TagSearcher};
pub use session::{DeleteOutcome, SearchSession};
pub use suggestions::{build_suggestions, is_literal_suggestion, SuggestionList, SuggestionsError};
pub use types::{PackId, SourcePack, TagEntry, LITERAL_MARKER, TAG_TRIGGER};
