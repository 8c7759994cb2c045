use pawn_pursuit::board::{random_pawns, Board, PAWN_ICON};
use pawn_pursuit::chess::piece::{Piece, PieceKind};
use pawn_pursuit::core::square::Square;
use pawn_pursuit::modes::{run_farthest_path_mode, PAWN_COUNT};
use pawn_pursuit::search::resources::SearchLimits;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: farthest_target <queen|rook|knight> <square>\n\nExample: farthest_target knight b1");
        std::process::exit(2);
    }

    let kind: PieceKind = match args[1].parse() {
        Ok(k) => k,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let square: Square = match args[2].parse() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("invalid square {:?}: {e}", args[2]);
            std::process::exit(2);
        }
    };

    let piece = Piece::new(kind, square);
    let pawns = random_pawns(&mut rand::thread_rng(), piece.square, PAWN_COUNT);
    let report = match run_farthest_path_mode(piece, &pawns, SearchLimits::default()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("search failed: {e}");
            std::process::exit(1);
        }
    };

    let mut board = Board::new();
    board.place(piece.square, piece.kind.icon());
    for &pawn in &report.pawns {
        board.place(pawn, PAWN_ICON);
    }
    println!("\n{}", board.render());

    println!(
        "Farthest square from {}: {}\tDistance: {:.2}",
        piece.square, report.farthest, report.distance
    );
    println!(
        "Minimum # of {} moves from {} to {}: {}",
        piece.kind, piece.square, report.farthest, report.moves
    );
}
