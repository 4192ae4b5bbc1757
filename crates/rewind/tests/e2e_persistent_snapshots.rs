#![forbid(unsafe_code)]

//! End-to-end tests for snapshots built on `rewind::persistent` collections.
//!
//! Validates:
//! - A custom originator whose state is a HAMT map plus an RRB vector
//! - Undo/redo over large states that share structure between captures
//! - Returned `Arc` handles outliving the history
//!
//! Run:
//!   cargo test -p rewind --features hamt --test e2e_persistent_snapshots

use std::sync::Arc;

use rewind::persistent::{HashMap, OrdMap, Vector};
use rewind::{History, HistoryConfig, Originator, Session};

// ============================================================================
// Board game originator
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Board {
    cells: HashMap<(u16, u16), char>,
    moves: Vector<(u16, u16)>,
}

struct Game {
    board: Board,
}

impl Originator for Game {
    type Snapshot = Board;

    fn snapshot(&self) -> Board {
        self.board.clone()
    }

    fn restore(&mut self, snapshot: &Board) {
        self.board = snapshot.clone();
    }
}

impl Game {
    fn new(size: u16) -> Self {
        let mut cells = HashMap::new();
        for x in 0..size {
            for y in 0..size {
                cells.insert((x, y), '.');
            }
        }
        Self {
            board: Board {
                cells,
                moves: Vector::new(),
            },
        }
    }

    fn place(&mut self, at: (u16, u16), mark: char) {
        self.board.cells.insert(at, mark);
        self.board.moves.push_back(at);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn e2e_persistent_originator_undo_redo() {
    let mut session = Session::new(Game::new(100));

    for i in 0..20u16 {
        session.originator_mut().place((i, i), 'x');
        session.commit();
    }
    assert_eq!(session.history().len(), 21);

    for _ in 0..10 {
        assert!(session.undo());
    }
    let board = &session.originator().board;
    assert_eq!(board.moves.len(), 10);
    assert_eq!(board.cells.get(&(9, 9)), Some(&'x'));
    assert_eq!(board.cells.get(&(10, 10)), Some(&'.'));
    assert_eq!(board.cells.len(), 10_000);

    while session.redo() {}
    assert_eq!(session.originator().board.moves.len(), 20);
    assert_eq!(session.originator().board.cells.get(&(19, 19)), Some(&'x'));
}

#[test]
fn e2e_persistent_branch_discards_future_moves() {
    let mut session = Session::new(Game::new(8));
    session.originator_mut().place((0, 0), 'x');
    session.commit();
    session.originator_mut().place((1, 1), 'o');
    session.commit();

    assert!(session.undo());
    session.originator_mut().place((2, 2), 'o');
    session.commit();

    assert!(!session.redo());
    let board = &session.originator().board;
    assert_eq!(board.cells.get(&(1, 1)), Some(&'.'));
    assert_eq!(board.cells.get(&(2, 2)), Some(&'o'));
    assert_eq!(board.moves, Vector::from(vec![(0, 0), (2, 2)]));
}

#[test]
fn e2e_persistent_bounded_history() {
    let mut history = History::with_config(HistoryConfig::new(5));
    let mut state: OrdMap<u32, u32> = OrdMap::new();
    for i in 0..50u32 {
        state.insert(i, i * 7);
        history.save(state.clone());
    }

    assert_eq!(history.len(), 5);
    assert_eq!(history.current().unwrap().len(), 50);
    while history.undo().is_some() {}
    assert_eq!(history.current().unwrap().len(), 46);
}

#[test]
fn e2e_shared_arcs_survive_history_drop() {
    let mut history = History::new();
    history.save(Vector::from(vec![1u32, 2, 3]));
    history.save(Vector::from(vec![1u32, 2, 3, 4]));

    let kept: Arc<Vector<u32>> = history.undo().unwrap();
    drop(history);

    assert_eq!(Arc::strong_count(&kept), 1);
    assert_eq!(kept.len(), 3);
}
