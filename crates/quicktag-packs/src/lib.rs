//! quicktag-packs — tag pack sources for quicktag.
//!
//! Packs are named ordered tables of `(tag, candidate)` pairs. This crate
//! supplies the builtin tables compiled into the binary, a loader for TOML
//! pack files, and [`PackCatalog`], the [`quicktag_core::PackProvider`]
//! implementation that resolves both.

pub mod builtin;
pub mod catalog;
pub mod file;

pub use builtin::{builtin_ids, builtin_pack, default_pack_ids, GESTURES, SMILEYS, SYMBOLS};
pub use catalog::PackCatalog;
pub use file::{load_pack_dir, load_pack_file, PackError};
