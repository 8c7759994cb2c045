//! Mode orchestration: wire a placed pawn set, the farthest-square
//! evaluator and the searches together for the CLI binaries.
//!
//! The pawn set is an opaque input here; callers obtain one from
//! [`crate::board::random_pawns`] (or anywhere else) and hand it in, which
//! keeps mode runs deterministic for a given placement.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::chess::piece::Piece;
use crate::core::square::Square;
use crate::search::collect::collect_all;
use crate::search::resources::SearchLimits;
use crate::search::target::{farthest_square, min_moves};
use crate::search::SearchError;

/// Number of pawns both CLI modes scatter on the board.
pub const PAWN_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Result of farthest-path mode.
pub struct TargetReport {
    pub farthest: Square,
    pub distance: f64,
    pub moves: u32,
    /// The placed pawns, sorted for stable output.
    pub pawns: Vec<Square>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Result of collect mode.
pub struct CollectReport {
    pub moves: u32,
    pub path: Vec<Square>,
    /// Empty on success; kept so callers can see a failed run's leftovers.
    pub remaining: Vec<Square>,
    /// The placed pawns, sorted for stable output.
    pub pawns: Vec<Square>,
}

/// Evaluates the farthest square from the piece's start and runs the
/// single-target search toward it, with `pawns` as permanent walls.
pub fn run_farthest_path_mode(
    piece: Piece,
    pawns: &FxHashSet<Square>,
    limits: SearchLimits,
) -> Result<TargetReport, SearchError> {
    let (farthest, distance) = farthest_square(piece.square);
    let moves = min_moves(piece.square, farthest, piece.kind, pawns, limits)?;

    Ok(TargetReport {
        farthest,
        distance,
        moves,
        pawns: sorted(pawns),
    })
}

/// Runs the collect-all search to capture every pawn in `pawns`.
pub fn run_collect_mode(
    piece: Piece,
    pawns: &FxHashSet<Square>,
    limits: SearchLimits,
) -> Result<CollectReport, SearchError> {
    let outcome = collect_all(piece.square, piece.kind, pawns, limits)?;

    Ok(CollectReport {
        moves: outcome.moves,
        path: outcome.path,
        remaining: outcome.remaining,
        pawns: sorted(pawns),
    })
}

fn sorted(pawns: &FxHashSet<Square>) -> Vec<Square> {
    let mut out: Vec<Square> = pawns.iter().copied().collect();
    out.sort();
    out
}
