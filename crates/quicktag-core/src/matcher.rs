//! Tag matcher — ordered case-insensitive substring lookup.
//!
//! An entry qualifies iff its tag contains the query as a substring after
//! case folding. Qualifying candidates come back in dictionary declaration
//! order: no relevance scoring, no alphabetic re-sort, no result cap. A
//! query may legitimately return dozens of candidates; the strip renderer
//! deals with overflow, not the matcher.

use crate::dictionary::TagDictionary;

/// Candidates whose tag contains `raw_query`, in dictionary order.
///
/// The empty query matches nothing: with only the trigger typed, the strip
/// shows just the literal entry.
pub fn matching_candidates<'d>(dict: &'d TagDictionary, raw_query: &str) -> Vec<&'d str> {
    if raw_query.is_empty() {
        return Vec::new();
    }

    let needle = raw_query.to_lowercase();
    dict.iter()
        .filter(|entry| entry.tag.contains(&needle))
        .map(|entry| entry.candidate.as_str())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
