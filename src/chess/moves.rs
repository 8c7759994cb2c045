//! One-move reachability per piece kind.
//!
//! Blockers (pawns) end a sliding ray *after* the blocker square itself: the
//! pawn can be captured, but nothing behind it is visible. Knight jumps
//! ignore blockers entirely.

use rustc_hash::FxHashSet;

use crate::chess::piece::{PieceKind, KNIGHT_DELTAS};
use crate::core::square::Square;

/// Squares reachable in exactly one move from `from`.
///
/// The output is ordered by the kind's fixed ray/offset tables and holds no
/// duplicates; every returned square is on the board by construction.
pub fn reachable_squares(
    kind: PieceKind,
    from: Square,
    blockers: &FxHashSet<Square>,
) -> Vec<Square> {
    match kind {
        PieceKind::Knight => knight_moves(from),
        PieceKind::Queen | PieceKind::Rook => slider_moves(kind, from, blockers),
    }
}

fn slider_moves(kind: PieceKind, from: Square, blockers: &FxHashSet<Square>) -> Vec<Square> {
    let mut out = Vec::new();

    for &dir in kind.slide_dirs() {
        let mut cursor = from.offset(dir);
        while let Some(sq) = cursor {
            out.push(sq);
            if blockers.contains(&sq) {
                break;
            }
            cursor = sq.offset(dir);
        }
    }

    out
}

fn knight_moves(from: Square) -> Vec<Square> {
    KNIGHT_DELTAS
        .iter()
        .filter_map(|&delta| from.offset(delta))
        .collect()
}
