//! Collect-all search: visit (and thereby capture) every pawn in the fewest
//! moves.
//!
//! This is still an unweighted breadth-first search — the move count it
//! returns is minimal — but the frontier is a priority queue biased toward
//! branches whose head square holds an un-captured pawn, so among
//! equal-length solutions a capturing path is discovered first. Every
//! branch owns its own path and remaining-pawn set; a capture is visible
//! only to that branch's descendants.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::chess::moves::reachable_squares;
use crate::chess::piece::PieceKind;
use crate::core::square::Square;
use crate::search::resources::{ResourceTracker, SearchLimits};
use crate::search::SearchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A successful collect-all run.
pub struct CollectOutcome {
    /// Minimum number of moves to visit every pawn square.
    pub moves: u32,
    /// One realized shortest path, starting at the mover's start square.
    pub path: Vec<Square>,
    /// Pawns still standing at termination; empty on success.
    pub remaining: Vec<Square>,
}

/// One line of expansion, owning its own history and pawn state.
#[derive(Debug, Clone)]
struct Branch {
    /// Head square; always the last element of `path`.
    square: Square,
    moves: u32,
    path: Vec<Square>,
    /// Pawns not yet captured along this branch.
    pawns: FxHashSet<Square>,
}

impl Branch {
    /// Heap key: the expansion counter, negated when the head square holds
    /// an un-captured pawn. Counters are unique, so keys never collide and
    /// dequeue order is deterministic.
    fn priority(&self, counter: i64) -> i64 {
        if self.pawns.contains(&self.square) {
            -counter
        } else {
            counter
        }
    }
}

struct Entry {
    key: i64,
    branch: Branch,
}

// BinaryHeap is a max-heap; reverse the key comparison to pop the smallest
// key first, matching FIFO order with capture branches pulled ahead.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

/// Minimum number of moves for `kind`, starting at `start`, to visit every
/// square in `pawns`, plus one realized path achieving it.
///
/// Landing on a pawn square captures it for that branch: it stops blocking
/// the branch's sliding rays and stops counting toward its goal. Branches
/// never revisit a square already on their own path; there is deliberately
/// no cross-branch visited set, since two branches reaching the same square
/// can differ in captured pawns.
pub fn collect_all(
    start: Square,
    kind: PieceKind,
    pawns: &FxHashSet<Square>,
    limits: SearchLimits,
) -> Result<CollectOutcome, SearchError> {
    let mut tracker = ResourceTracker::new(limits);

    let mut frontier: BinaryHeap<Entry> = BinaryHeap::new();
    let mut counter: i64 = 1;

    let root = Branch {
        square: start,
        moves: 0,
        path: vec![start],
        pawns: pawns.clone(),
    };
    frontier.push(Entry {
        key: root.priority(counter),
        branch: root,
    });

    while let Some(Entry { branch: mut b, .. }) = frontier.pop() {
        tracker.bump_expansions("collect_bfs")?;

        // Capture on arrival, for this branch only.
        b.pawns.remove(&b.square);

        if b.pawns.is_empty() {
            return Ok(CollectOutcome {
                moves: b.moves,
                path: b.path,
                remaining: Vec::new(),
            });
        }

        // Un-captured pawns still block this branch's rays.
        for next in reachable_squares(kind, b.square, &b.pawns) {
            if b.path.contains(&next) {
                continue;
            }
            tracker.bump_enqueued("collect_bfs")?;
            counter += 1;

            let mut path = b.path.clone();
            path.push(next);
            let child = Branch {
                square: next,
                moves: b.moves + 1,
                path,
                pawns: b.pawns.clone(),
            };
            frontier.push(Entry {
                key: child.priority(counter),
                branch: child,
            });
        }
    }

    Err(SearchError::Unreachable {
        stage: "collect_bfs",
    })
}
