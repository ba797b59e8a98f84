//! Domain-specific assertion macros for the quicktag harnesses.
//!
//! These wrap `pretty_assertions` with failure messages that name the
//! invariant being checked, so a red test reads as "which contract broke"
//! rather than "which two vectors differ".

// ---------------------------------------------------------------------------
// Strip assertions
// ---------------------------------------------------------------------------

/// Assert the strip shows exactly these suggestions, in order.
///
/// ```rust
/// assert_strip!(stage, ["🔍:ca", "🐱", "🐈"]);
/// ```
#[macro_export]
macro_rules! assert_strip {
    ($stage:expr, [$($expected:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $stage.get_suggestions().iter().collect();
        let expected: Vec<&str> = vec![$($expected),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "suggestion strip does not match (left = actual, right = expected)"
        );
    }};
}

/// Assert the document text after a typing flow.
#[macro_export]
macro_rules! assert_document {
    ($stage:expr, $expected:expr) => {{
        pretty_assertions::assert_eq!(
            $stage.sink().text(),
            $expected,
            "document text does not match after the typed flow"
        );
    }};
}

// ---------------------------------------------------------------------------
// Immutability assertions
// ---------------------------------------------------------------------------

/// Assert that every mutation entry point on a suggestion list fails with
/// `UnsupportedMutation` and that the contents survive untouched.
#[macro_export]
macro_rules! assert_list_immutable {
    ($list:expr) => {{
        let mut list = $list.clone();
        let before = list.clone();
        let frozen = quicktag_core::SuggestionsError::UnsupportedMutation;

        for (name, outcome) in [
            ("push", list.push("intruder").err()),
            ("insert", list.insert(0, "intruder").err()),
            ("set", list.set(0, "intruder").err()),
            ("remove", list.remove(0).err()),
            ("remove_item", list.remove_item("intruder").err()),
            ("clear", list.clear().err()),
        ] {
            match outcome {
                Some(err) if err == frozen => {}
                Some(err) => panic!(
                    "assert_list_immutable! failed: `{name}` returned the wrong error: {err:?}"
                ),
                None => panic!("assert_list_immutable! failed: `{name}` succeeded on a frozen list"),
            }
        }

        pretty_assertions::assert_eq!(
            list, before,
            "frozen list contents changed despite every mutation failing"
        );
    }};
}

/// Assert that the word engine saw no commit-time calls at all.
#[macro_export]
macro_rules! assert_words_untouched {
    ($stage:expr) => {{
        let calls = $stage.words().commit_calls();
        assert!(
            calls.is_empty(),
            "assert_words_untouched! failed: word engine was consulted at commit time: {calls:?}"
        );
    }};
}
