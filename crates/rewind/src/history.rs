#![forbid(unsafe_code)]

//! Linear undo/redo history over immutable snapshots.
//!
//! [`History`] keeps every saved snapshot in save order plus a cursor naming
//! the current one. Undo and redo only move the cursor; the snapshots stay
//! put so the same position can be revisited. Saving from anywhere but the
//! tip discards everything after the cursor before appending.
//!
//! # Architecture
//!
//! ```text
//! save(s0) save(s1) save(s2)
//! ┌──────────────────────────────────────────┐
//! │ Snapshots: [Arc(s0), Arc(s1), Arc(s2)]   │
//! │ Cursor:                          ^ 2     │
//! └──────────────────────────────────────────┘
//!
//! undo() x2
//! ┌──────────────────────────────────────────┐
//! │ Snapshots: [Arc(s0), Arc(s1), Arc(s2)]   │
//! │ Cursor:      ^ 0                         │
//! └──────────────────────────────────────────┘
//!
//! save(s3), truncating s1 and s2
//! ┌──────────────────────────────────────────┐
//! │ Snapshots: [Arc(s0), Arc(s3)]            │
//! │ Cursor:               ^ 1                │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Boundaries
//!
//! Running out of history is routine, not a fault: [`undo`](History::undo) at
//! the earliest snapshot and [`redo`](History::redo) at the tip return `None`
//! and leave the history untouched, however many times they are called.
//!
//! # Memory Model
//!
//! Snapshots are stored as `Arc<T>`, so handing one back from `undo`/`redo`
//! is a reference-count bump rather than a copy. A snapshot is freed once it
//! has been truncated or evicted and the caller has dropped its handles.

use std::collections::{VecDeque, vec_deque};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::HistoryConfig;

/// Ordered snapshot store with a cursor.
///
/// # Invariants
///
/// 1. Empty iff `cursor` is `None`.
/// 2. When populated, `cursor < len`.
/// 3. After [`save`](Self::save), `cursor == len - 1` and nothing is redoable.
/// 4. `len <= config.max_depth` (after any operation).
pub struct History<T> {
    /// Snapshots in save order (oldest at front).
    snapshots: VecDeque<Arc<T>>,
    /// Index of the current snapshot; `None` while empty.
    cursor: Option<usize>,
    /// Retention limits.
    config: HistoryConfig,
}

impl<T> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Create an empty history that retains every snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Create an empty history with the given configuration.
    ///
    /// A `max_depth` of zero is treated as one: the current snapshot is
    /// always retained.
    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        let config = HistoryConfig {
            max_depth: config.max_depth.max(1),
        };
        Self {
            snapshots: VecDeque::new(),
            cursor: None,
            config,
        }
    }

    // ====================================================================
    // Core Operations
    // ====================================================================

    /// Save a snapshot as the new current state.
    ///
    /// Any redoable snapshots after the cursor are discarded first. The
    /// snapshot is wrapped in `Arc`; duplicates are stored as-is.
    pub fn save(&mut self, snapshot: T) {
        self.save_arc(Arc::new(snapshot));
    }

    /// Save a pre-wrapped `Arc<T>` snapshot.
    pub fn save_arc(&mut self, snapshot: Arc<T>) {
        self.truncate_future();
        self.snapshots.push_back(snapshot);
        self.enforce_depth();
        let cursor = self.snapshots.len() - 1;
        self.cursor = Some(cursor);
        trace!(
            op = "save",
            len = self.snapshots.len(),
            cursor,
            "snapshot saved"
        );
    }

    /// Step back to the previous snapshot and return it.
    ///
    /// Returns `None` without side effects when empty or already at the
    /// earliest retained snapshot.
    pub fn undo(&mut self) -> Option<Arc<T>> {
        let Some(cursor) = self.cursor.filter(|&c| c > 0) else {
            trace!(op = "undo", outcome = "unavailable", cursor = ?self.cursor);
            return None;
        };
        let cursor = cursor - 1;
        self.cursor = Some(cursor);
        trace!(op = "undo", len = self.snapshots.len(), cursor, "moved back");
        self.snapshots.get(cursor).cloned()
    }

    /// Step forward to the next snapshot and return it.
    ///
    /// Returns `None` without side effects when empty or already at the tip.
    pub fn redo(&mut self) -> Option<Arc<T>> {
        let len = self.snapshots.len();
        let Some(cursor) = self.cursor.filter(|&c| c + 1 < len) else {
            trace!(op = "redo", outcome = "unavailable", cursor = ?self.cursor);
            return None;
        };
        let cursor = cursor + 1;
        self.cursor = Some(cursor);
        trace!(op = "redo", len, cursor, "moved forward");
        self.snapshots.get(cursor).cloned()
    }

    /// The snapshot at the cursor, or `None` if nothing was saved.
    #[must_use]
    pub fn current(&self) -> Option<&Arc<T>> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    // ====================================================================
    // Query
    // ====================================================================

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.snapshots.len())
    }

    /// Position of the current snapshot.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of stored snapshots, including the redoable future.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if nothing has been saved (or the history was cleared).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots at or before the cursor.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }

    /// Snapshots after the cursor.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - self.undo_depth()
    }

    /// Snapshot at `index` in save order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<T>> {
        self.snapshots.get(index)
    }

    /// Iterate over stored snapshots, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Arc<T>> {
        self.snapshots.iter()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    // ====================================================================
    // Maintenance
    // ====================================================================

    /// Drop every snapshot and return to the empty state.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }

    /// Discard the redoable future.
    fn truncate_future(&mut self) {
        let keep = self.undo_depth();
        let discarded = self.snapshots.len() - keep;
        if discarded > 0 {
            self.snapshots.truncate(keep);
            debug!(discarded, kept = keep, "discarded redo future");
        }
    }

    /// Enforce the depth limit by evicting the oldest snapshots.
    fn enforce_depth(&mut self) {
        let excess = self.snapshots.len().saturating_sub(self.config.max_depth);
        if excess > 0 {
            for _ in 0..excess {
                self.snapshots.pop_front();
            }
            debug!(
                evicted = excess,
                max_depth = self.config.max_depth,
                "evicted oldest snapshots"
            );
        }
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a Arc<T>;
    type IntoIter = vec_deque::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
