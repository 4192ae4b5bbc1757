#![forbid(unsafe_code)]

//! Immutable state snapshots.
//!
//! A snapshot is a plain value: constructed once, read through accessors,
//! never mutated. An "updated" snapshot is always a new instance produced by
//! [`Overrides::with_overrides`], which copies every field the patch leaves
//! unset. The receiver stays valid, so it can keep living inside a
//! [`History`](crate::History) while newer snapshots are derived from it.
//!
//! ```
//! use rewind::{EditorPatch, EditorSnapshot, Overrides};
//!
//! let base = EditorSnapshot::new("x", 2, false);
//! let dirty = base.with_overrides(EditorPatch::new().unsaved_changes(true));
//!
//! assert!(dirty.unsaved_changes());
//! assert!(!base.unsaved_changes());
//! ```

/// Copy-with-overrides construction for snapshot types.
pub trait Overrides: Sized {
    /// Partial field set. Every field left unset is copied from the receiver.
    type Patch;

    /// Build a new snapshot equal to `self` except where `patch` supplies a
    /// replacement value. Never mutates `self`.
    #[must_use]
    fn with_overrides(&self, patch: Self::Patch) -> Self;
}

/// Point-in-time capture of a code editor's state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditorSnapshot {
    content: String,
    cursor_position: usize,
    unsaved_changes: bool,
}

impl EditorSnapshot {
    /// Create a snapshot from a complete field set.
    #[must_use]
    pub fn new(content: impl Into<String>, cursor_position: usize, unsaved_changes: bool) -> Self {
        Self {
            content: content.into(),
            cursor_position,
            unsaved_changes,
        }
    }

    /// Buffer text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position, in characters from the start of the buffer.
    #[must_use]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Whether the buffer had changes not yet written out.
    #[must_use]
    pub fn unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }
}

/// Partial field set for [`EditorSnapshot::with_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorPatch {
    pub content: Option<String>,
    pub cursor_position: Option<usize>,
    pub unsaved_changes: Option<bool>,
}

impl EditorPatch {
    /// An empty patch; applying it yields an equal snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer text.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Move the cursor.
    #[must_use]
    pub fn cursor_position(mut self, cursor_position: usize) -> Self {
        self.cursor_position = Some(cursor_position);
        self
    }

    /// Set the dirty flag.
    #[must_use]
    pub fn unsaved_changes(mut self, unsaved_changes: bool) -> Self {
        self.unsaved_changes = Some(unsaved_changes);
        self
    }
}

impl Overrides for EditorSnapshot {
    type Patch = EditorPatch;

    fn with_overrides(&self, patch: EditorPatch) -> Self {
        Self {
            content: patch.content.unwrap_or_else(|| self.content.clone()),
            cursor_position: patch.cursor_position.unwrap_or(self.cursor_position),
            unsaved_changes: patch.unsaved_changes.unwrap_or(self.unsaved_changes),
        }
    }
}
