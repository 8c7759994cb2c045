//! Farthest-square evaluation and single-target shortest paths.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::chess::moves::reachable_squares;
use crate::chess::piece::PieceKind;
use crate::core::square::Square;
use crate::search::resources::{ResourceTracker, SearchLimits};
use crate::search::SearchError;

/// The board square with the greatest Euclidean distance from `from`, and
/// that distance.
///
/// Squares are scanned file-major, rank-minor, ascending; only a strictly
/// greater distance replaces the incumbent, so ties keep the
/// earliest-scanned square. Callers rely on that tie-break.
pub fn farthest_square(from: Square) -> (Square, f64) {
    let mut best = (from, 0.0f64);

    for file in 1..=8u8 {
        for rank in 1..=8u8 {
            // In-range by construction of the loop bounds.
            let sq = Square::new(file, rank).expect("scan stays on the board");
            let dist = from.distance(sq);
            if dist > best.1 {
                best = (sq, dist);
            }
        }
    }

    best
}

/// Minimum number of moves for `kind` to travel from `start` to `target`
/// with `blockers` as permanent walls.
///
/// Plain breadth-first search: the blocker set never changes between
/// expansions, and a blocker square itself stays reachable (capture), it
/// just ends its ray. `start == target` is 0 moves. An exhausted frontier
/// surfaces as [`SearchError::Unreachable`] rather than a bogus count.
pub fn min_moves(
    start: Square,
    target: Square,
    kind: PieceKind,
    blockers: &FxHashSet<Square>,
    limits: SearchLimits,
) -> Result<u32, SearchError> {
    let mut tracker = ResourceTracker::new(limits);

    let mut visited: FxHashSet<Square> = FxHashSet::default();
    visited.insert(start);

    let mut frontier: VecDeque<(Square, u32)> = VecDeque::new();
    frontier.push_back((start, 0));

    while let Some((square, moves)) = frontier.pop_front() {
        if square == target {
            return Ok(moves);
        }
        tracker.bump_expansions("target_bfs")?;

        for next in reachable_squares(kind, square, blockers) {
            if visited.insert(next) {
                frontier.push_back((next, moves + 1));
            }
        }
    }

    Err(SearchError::Unreachable {
        stage: "target_bfs",
    })
}
