use rustc_hash::FxHashSet;

use pawn_pursuit::chess::moves::reachable_squares;
use pawn_pursuit::chess::piece::PieceKind;
use pawn_pursuit::core::square::Square;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: possible_moves <queen|rook|knight> <square>\n\nExample: possible_moves rook e4");
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

    // Standard mode: one-move reachability on an otherwise empty board.
    let moves = reachable_squares(kind, square, &FxHashSet::default());
    let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    println!("{}", listed.join(", "));
}
