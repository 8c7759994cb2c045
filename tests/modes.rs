//! Mode orchestration: seeded placement for farthest-path mode, fixed pawn
//! spreads for collect mode, and report JSON round-trips.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;

use pawn_pursuit::board::random_pawns;
use pawn_pursuit::chess::piece::{Piece, PieceKind};
use pawn_pursuit::core::square::Square;
use pawn_pursuit::modes::{run_collect_mode, run_farthest_path_mode, PAWN_COUNT};
use pawn_pursuit::search::resources::SearchLimits;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn squares(names: &[&str]) -> FxHashSet<Square> {
    names.iter().map(|s| sq(s)).collect()
}

#[test]
fn farthest_path_mode_reaches_the_far_corner() {
    let piece = Piece::new(PieceKind::Queen, sq("e4"));
    let mut rng = StdRng::seed_from_u64(42);
    let pawns = random_pawns(&mut rng, piece.square, PAWN_COUNT);
    let report = run_farthest_path_mode(piece, &pawns, SearchLimits::default()).unwrap();

    // The evaluator ignores pawns: from e4 the farthest square is a8.
    assert_eq!(report.farthest, sq("a8"));
    assert_eq!(report.pawns.len(), PAWN_COUNT);
    assert!(!report.pawns.contains(&sq("e4")));
    assert!(report.moves >= 1);
}

#[test]
fn farthest_path_mode_succeeds_across_seeds() {
    for seed in 0..20 {
        let piece = Piece::new(PieceKind::Knight, sq("b1"));
        let mut rng = StdRng::seed_from_u64(seed);
        let pawns = random_pawns(&mut rng, piece.square, PAWN_COUNT);
        let report = run_farthest_path_mode(piece, &pawns, SearchLimits::default()).unwrap();
        assert_eq!(report.farthest, sq("h8"));
        assert!(report.moves >= 1, "seed {seed}");
    }
}

#[test]
fn collect_mode_queen_sweeps_aligned_pawns() {
    let piece = Piece::new(PieceKind::Queen, sq("d5"));
    let pawns = squares(&["a5", "d8", "g5", "d2", "a2", "g8", "g2", "a8"]);
    let report = run_collect_mode(piece, &pawns, SearchLimits::default()).unwrap();

    assert_eq!(report.moves, 8);
    assert!(report.remaining.is_empty());
    assert_eq!(report.path.first(), Some(&sq("d5")));
    assert_eq!(report.path.len(), report.moves as usize + 1);
    for pawn in &pawns {
        assert!(report.path.contains(pawn), "path misses {pawn}");
    }
}

#[test]
fn collect_mode_rook_follows_the_chain() {
    let piece = Piece::new(PieceKind::Rook, sq("a1"));
    let pawns = squares(&["a4", "d4", "d1", "f1", "f5", "h5", "h8", "c8"]);
    let report = run_collect_mode(piece, &pawns, SearchLimits::default()).unwrap();

    assert_eq!(report.moves, 8);
    assert!(report.remaining.is_empty());
}

#[test]
fn collect_mode_knight_hops_every_pawn() {
    let piece = Piece::new(PieceKind::Knight, sq("b1"));
    let pawns = squares(&["c3", "d2", "a3", "e4", "f6", "g8", "h4", "d6"]);
    let report = run_collect_mode(piece, &pawns, SearchLimits::default()).unwrap();

    assert_eq!(report.moves, 12);
    assert!(report.remaining.is_empty());
    for pawn in &pawns {
        assert!(report.path.contains(pawn), "path misses {pawn}");
    }

    let unique: FxHashSet<Square> = report.path.iter().copied().collect();
    assert_eq!(unique.len(), report.path.len());
}

#[test]
fn reports_round_trip_through_json() {
    let piece = Piece::new(PieceKind::Rook, sq("a1"));
    let pawns = squares(&["a4", "d4", "d1", "f1", "f5", "h5", "h8", "c8"]);

    let collect = run_collect_mode(piece, &pawns, SearchLimits::default()).unwrap();
    let text = serde_json::to_string(&collect).unwrap();
    let back: pawn_pursuit::modes::CollectReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back, collect);

    let target = run_farthest_path_mode(piece, &pawns, SearchLimits::default()).unwrap();
    let text = serde_json::to_string(&target).unwrap();
    let back: pawn_pursuit::modes::TargetReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back, target);
}
