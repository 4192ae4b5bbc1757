#![forbid(unsafe_code)]

//! Rewind
//!
//! Linear undo/redo over immutable state snapshots.
//!
//! # Key Components
//!
//! - [`History`] - Snapshot sequence plus cursor with save/undo/redo
//! - [`HistoryConfig`] - Retention limits (and TOML/JSON loading with `config`)
//! - [`Overrides`] - Copy-with-overrides construction for snapshot types
//! - [`EditorSnapshot`] - Code editor state capture
//! - [`Originator`] - Live object that produces and adopts snapshots
//! - [`Session`] - Originator bound to its history
//!
//! # Quick Start
//!
//! ```
//! use rewind::{EditorPatch, EditorSnapshot, History, Overrides};
//!
//! let mut history = History::new();
//! let state = EditorSnapshot::new("console.log('hi')", 2, false);
//! history.save(state.clone());
//! history.save(state.with_overrides(EditorPatch::new().cursor_position(5)));
//!
//! let previous = history.undo().expect("baseline is retained");
//! assert_eq!(previous.cursor_position(), 2);
//! assert!(history.undo().is_none());
//! ```
//!
//! # Threading
//!
//! A [`History`] is a plain single-owner value. Sharing one across threads
//! needs a lock around every save/undo/redo call; the truncate-then-append
//! step is not atomic on its own.

pub mod config;
pub mod history;
pub mod originator;
pub mod snapshot;

pub use config::{ConfigError, HistoryConfig};
pub use history::History;
pub use originator::{Editor, Originator, Session};
pub use snapshot::{EditorPatch, EditorSnapshot, Overrides};

/// Persistent collection types for snapshot-friendly state.
///
/// When the `hamt` feature is enabled, this module re-exports types from
/// the [`im`] crate. Cloning them is O(log n) and shares structure, so
/// whole-state snapshots of large collections stay cheap.
///
/// ```
/// use rewind::{History, persistent};
///
/// let mut map = persistent::HashMap::new();
/// map.insert("key", 42);
/// let mut history = History::new();
/// history.save(map.clone()); // shares structure
/// map.insert("key2", 99);
/// history.save(map);
///
/// let previous = history.undo().unwrap();
/// assert_eq!(previous.len(), 1);
/// assert_eq!(previous.get("key"), Some(&42));
/// ```
#[cfg(feature = "hamt")]
pub mod persistent {
    pub use im::{HashMap, HashSet, OrdMap, OrdSet, Vector};
}
