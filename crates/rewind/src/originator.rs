#![forbid(unsafe_code)]

//! Originators and the sessions that track them.
//!
//! An [`Originator`] is the live, mutable object whose state gets captured.
//! [`History`] never talks to it: the history only returns snapshots, and it
//! is up to the caller to adopt them. [`Session`] packages that contract so
//! callers cannot forget either half of it:
//!
//! - `commit` saves exactly one snapshot per restorable transition.
//! - `undo` / `redo` restore the originator whenever the history yields one.
//!
//! ```
//! use rewind::{Editor, Session};
//!
//! let mut session = Session::new(Editor::new("fn main() {}"));
//! session.originator_mut().insert("\n");
//! session.commit();
//!
//! assert!(session.undo());
//! assert_eq!(session.originator().content(), "fn main() {}");
//! assert!(!session.undo());
//! ```

use crate::config::HistoryConfig;
use crate::history::History;
use crate::snapshot::EditorSnapshot;

/// An object whose state can be captured into and restored from snapshots.
pub trait Originator {
    /// Immutable capture of this originator's full state.
    type Snapshot;

    /// Capture the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Adopt a previously captured state as the current one.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}

// ============================================================================
// Editor
// ============================================================================

/// Minimal code editor buffer: text, a cursor, and a dirty flag.
///
/// Cursor positions count characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    content: String,
    cursor_position: usize,
    unsaved_changes: bool,
}

impl Editor {
    /// Open a clean buffer with the cursor at the start.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            cursor_position: 0,
            unsaved_changes: false,
        }
    }

    /// Buffer text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position, in characters.
    #[must_use]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Whether edits were made since the last [`mark_saved`](Self::mark_saved).
    #[must_use]
    pub fn unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Insert `text` at the cursor and move the cursor past it.
    pub fn insert(&mut self, text: &str) {
        let at = self.byte_offset(self.cursor_position);
        self.content.insert_str(at, text);
        self.cursor_position += text.chars().count();
        self.unsaved_changes = true;
    }

    /// Move the cursor, clamped to the end of the buffer.
    pub fn move_cursor(&mut self, position: usize) {
        self.cursor_position = position.min(self.content.chars().count());
    }

    /// Clear the dirty flag after the buffer has been written out.
    pub fn mark_saved(&mut self) {
        self.unsaved_changes = false;
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.content
            .char_indices()
            .nth(chars)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

impl Originator for Editor {
    type Snapshot = EditorSnapshot;

    fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot::new(
            self.content.clone(),
            self.cursor_position,
            self.unsaved_changes,
        )
    }

    fn restore(&mut self, snapshot: &EditorSnapshot) {
        self.content = snapshot.content().to_owned();
        self.cursor_position = snapshot.cursor_position();
        self.unsaved_changes = snapshot.unsaved_changes();
    }
}

// ============================================================================
// Session
// ============================================================================

/// An originator paired with the history of its committed states.
///
/// The originator's state at construction is saved as the baseline, so the
/// history is never empty while a session exists.
#[derive(Debug)]
pub struct Session<O: Originator> {
    originator: O,
    history: History<O::Snapshot>,
}

impl<O: Originator> Session<O> {
    /// Start tracking `originator` with an unbounded history.
    #[must_use]
    pub fn new(originator: O) -> Self {
        Self::with_config(originator, HistoryConfig::default())
    }

    /// Start tracking `originator` with the given retention configuration.
    #[must_use]
    pub fn with_config(originator: O, config: HistoryConfig) -> Self {
        let mut history = History::with_config(config);
        history.save(originator.snapshot());
        Self {
            originator,
            history,
        }
    }

    /// Save the originator's current state as a restorable point.
    pub fn commit(&mut self) {
        self.history.save(self.originator.snapshot());
    }

    /// Restore the previous committed state.
    ///
    /// Returns `false` (and leaves the originator alone) at the baseline.
    /// Uncommitted edits are overwritten by the restored snapshot.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.originator.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Restore the next committed state after an undo.
    ///
    /// Returns `false` (and leaves the originator alone) at the tip.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.originator.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// The tracked originator.
    #[must_use]
    pub fn originator(&self) -> &O {
        &self.originator
    }

    /// Mutable access for edits. Call [`commit`](Self::commit) afterwards
    /// to make the new state restorable.
    pub fn originator_mut(&mut self) -> &mut O {
        &mut self.originator
    }

    /// Committed states, for inspection.
    #[must_use]
    pub fn history(&self) -> &History<O::Snapshot> {
        &self.history
    }

    /// Stop tracking and hand back the originator.
    #[must_use]
    pub fn into_inner(self) -> O {
        self.originator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_insert_advances_cursor_and_dirties() {
        let mut editor = Editor::new("ab");
        editor.move_cursor(1);
        editor.insert("XY");
        assert_eq!(editor.content(), "aXYb");
        assert_eq!(editor.cursor_position(), 3);
        assert!(editor.unsaved_changes());
    }

    #[test]
    fn editor_insert_counts_chars_not_bytes() {
        let mut editor = Editor::new("héllo");
        editor.move_cursor(2);
        editor.insert("ü");
        assert_eq!(editor.content(), "héüllo");
        assert_eq!(editor.cursor_position(), 3);
    }

    #[test]
    fn editor_move_cursor_clamps() {
        let mut editor = Editor::new("abc");
        editor.move_cursor(99);
        assert_eq!(editor.cursor_position(), 3);
        editor.insert("!");
        assert_eq!(editor.content(), "abc!");
    }

    #[test]
    fn editor_snapshot_restore_roundtrip() {
        let mut editor = Editor::new("one");
        editor.move_cursor(3);
        editor.insert(" two");
        let snap = editor.snapshot();

        let mut other = Editor::default();
        other.restore(&snap);
        assert_eq!(other, editor);
    }

    #[test]
    fn mark_saved_clears_dirty_flag() {
        let mut editor = Editor::new("");
        editor.insert("x");
        editor.mark_saved();
        assert!(!editor.unsaved_changes());
    }

    #[test]
    fn session_starts_with_baseline() {
        let session = Session::new(Editor::new("base"));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().cursor(), Some(0));
        assert_eq!(session.history().current().unwrap().content(), "base");
    }

    #[test]
    fn session_undo_redo_restores_originator() {
        let mut session = Session::new(Editor::new(""));
        session.originator_mut().insert("a");
        session.commit();
        session.originator_mut().insert("b");
        session.commit();

        assert!(session.undo());
        assert_eq!(session.originator().content(), "a");
        assert!(session.undo());
        assert_eq!(session.originator().content(), "");
        assert!(!session.undo());

        assert!(session.redo());
        assert_eq!(session.originator().content(), "a");
        assert!(session.redo());
        assert_eq!(session.originator().content(), "ab");
        assert!(!session.redo());
    }

    #[test]
    fn session_boundary_leaves_uncommitted_edits_alone() {
        let mut session = Session::new(Editor::new("x"));
        session.originator_mut().insert("dirty");
        assert!(!session.undo());
        assert!(!session.redo());
        assert_eq!(session.originator().content(), "dirtyx");
    }

    #[test]
    fn session_commit_after_undo_truncates() {
        let mut session = Session::new(Editor::new(""));
        session.originator_mut().insert("a");
        session.commit();
        session.originator_mut().insert("b");
        session.commit();

        session.undo();
        session.originator_mut().insert("c");
        session.commit();

        assert_eq!(session.history().len(), 3);
        assert!(!session.redo());
        assert_eq!(session.originator().content(), "ac");
    }

    #[test]
    fn session_respects_depth_limit() {
        let mut session = Session::with_config(Editor::new(""), HistoryConfig::new(2));
        for ch in ["a", "b", "c"] {
            session.originator_mut().insert(ch);
            session.commit();
        }
        assert_eq!(session.history().len(), 2);
        assert!(session.undo());
        assert_eq!(session.originator().content(), "ab");
        assert!(!session.undo());
    }

    #[test]
    fn into_inner_returns_originator() {
        let mut session = Session::new(Editor::new("keep"));
        session.originator_mut().mark_saved();
        let editor = session.into_inner();
        assert_eq!(editor.content(), "keep");
    }
}
