use pawn_pursuit::board::{random_pawns, Board, PAWN_ICON};
use pawn_pursuit::chess::piece::{Piece, PieceKind};
use pawn_pursuit::core::square::Square;
use pawn_pursuit::modes::{run_collect_mode, PAWN_COUNT};
use pawn_pursuit::search::resources::SearchLimits;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if !(args.len() == 3 || (args.len() == 4 && args[3] == "--json")) {
        eprintln!("Usage: collect_pawns <queen|rook|knight> <square> [--json]\n\nExample: collect_pawns queen d5");
        std::process::exit(2);
    }
    let as_json = args.len() == 4;

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
    let report = match run_collect_mode(piece, &pawns, SearchLimits::default()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("search failed: {e}");
            std::process::exit(1);
        }
    };

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut board = Board::new();
    board.place(piece.square, piece.kind.icon());
    for &pawn in &report.pawns {
        board.place(pawn, PAWN_ICON);
    }
    println!("\n{}", board.render());

    println!("Minimum # of {} moves: {}", piece.kind, report.moves);
    let path: Vec<String> = report.path.iter().map(|s| s.to_string()).collect();
    println!("Moves: {}", path.join(" -> "));
}
