//! Shared test utilities for quicktag integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Everything here is single-threaded and deterministic,
//! like the stage itself.

pub mod assertions;
pub mod builders;
pub mod fake_words;
pub mod fixtures;

pub use builders::*;
pub use fake_words::*;
pub use fixtures::*;
