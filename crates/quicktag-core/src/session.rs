//! Search session state machine.
//!
//! Two states: **Inactive** and **Active(query)**. A session begins when the
//! trigger character arrives while the subsystem is enabled, accumulates the
//! raw query one character at a time, and ends on space, delete-to-empty, a
//! pick, or an external disable. There is no terminal state; a new trigger
//! always starts a fresh session.
//!
//! The machine is pure bookkeeping: it never touches the document. Callers
//! act on the returned outcomes (e.g. [`DeleteOutcome::EndedAtTrigger`]
//! means the trigger character itself must be removed from the document).

use unicode_segmentation::UnicodeSegmentation;

/// What a backward delete did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The trailing query cluster was removed; the session stays active.
    Shortened,
    /// The query was already empty: the session ended, and the trigger
    /// character must also disappear from the document.
    EndedAtTrigger,
    /// No session was active; nothing happened.
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Inactive,
    Active { query: String },
}

/// Tracks whether the stream is in tag-search mode and the accumulated query.
#[derive(Debug)]
pub struct SearchSession {
    state: State,
}

impl Default for SearchSession {
    fn default() -> Self {
        SearchSession { state: State::Inactive }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// The raw query while active, `None` while inactive.
    pub fn query(&self) -> Option<&str> {
        match &self.state {
            State::Active { query } => Some(query),
            State::Inactive => None,
        }
    }

    /// Begin a session with an empty query. Restarts cleanly if one was
    /// somehow already active.
    pub fn begin(&mut self) {
        tracing::debug!("tag search session started");
        self.state = State::Active { query: String::new() };
    }

    /// Append an ordinary character to the query. Ignored while inactive.
    pub fn push_char(&mut self, c: char) {
        if let State::Active { query } = &mut self.state {
            query.push(c);
            tracing::debug!(query = %query, "tag query extended");
        }
    }

    /// Remove the trailing grapheme cluster of the query, ending the
    /// session when the query is already empty.
    pub fn delete_backward(&mut self) -> DeleteOutcome {
        match &mut self.state {
            State::Inactive => DeleteOutcome::Inactive,
            State::Active { query } if query.is_empty() => {
                tracing::debug!("tag query emptied; session ended at trigger");
                self.state = State::Inactive;
                DeleteOutcome::EndedAtTrigger
            }
            State::Active { query } => {
                // Take the whole trailing cluster. The document's backward
                // delete counts clusters too, so a combining sequence typed
                // as several chars leaves both sides in one step.
                let at = query.grapheme_indices(true).last().map(|(at, _)| at).unwrap_or(0);
                query.truncate(at);
                tracing::debug!(query = %query, "tag query shortened");
                DeleteOutcome::Shortened
            }
        }
    }

    /// End the session, returning the final query if one was active.
    pub fn end(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.state, State::Inactive) {
            State::Active { query } => {
                tracing::debug!(query = %query, "tag search session ended");
                Some(query)
            }
            State::Inactive => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
