//! Backtracking stack of cursor snapshots for speculative recognition.
//!
//! A recognizer that may not match is structured as:
//!
//! ```text
//! snapshots.save(&cursor);
//! match attempt(&mut cursor) {
//!     success => snapshots.discard(),             // commit
//!     failure => snapshots.restore(&mut cursor),  // rewind, try something else
//! }
//! ```
//!
//! Saves nest: a recognizer may save again while an outer attempt is still
//! pending, so the snapshots form a strict LIFO stack. Every `save` must be
//! paired with exactly one `restore` or `discard`. An unpaired `restore` or
//! `discard` means a recognizer is miscoded, and panics.

use crate::cursor::{Cursor, CursorState};

/// LIFO stack of saved [`CursorState`]s.
#[derive(Clone, Debug, Default)]
pub(crate) struct SnapshotStack {
    saved: Vec<CursorState>,
}

impl SnapshotStack {
    /// Create an empty stack.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Push the cursor's complete current state.
    #[inline]
    pub(crate) fn save(&mut self, cursor: &Cursor<'_>) {
        self.saved.push(cursor.state());
    }

    /// Pop the most recent snapshot and rewind the cursor to it.
    ///
    /// # Panics
    ///
    /// Panics if no snapshot is pending.
    #[inline]
    pub(crate) fn restore(&mut self, cursor: &mut Cursor<'_>) {
        let Some(state) = self.saved.pop() else {
            panic!("snapshot restore with no pending save");
        };
        cursor.set_state(state);
    }

    /// Pop the most recent snapshot without rewinding, committing the attempt.
    ///
    /// # Panics
    ///
    /// Panics if no snapshot is pending.
    #[inline]
    pub(crate) fn discard(&mut self) {
        if self.saved.pop().is_none() {
            panic!("snapshot discard with no pending save");
        }
    }

    /// Number of pending snapshots.
    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }
}
