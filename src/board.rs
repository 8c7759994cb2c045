//! Textual board rendering and random pawn placement.
//!
//! Both live outside the searches: rendering consumes a board state, and
//! placement produces the opaque pawn set the searches take as input.

use rand::Rng;
use rustc_hash::FxHashSet;

use crate::core::square::Square;

/// Icon for an enemy pawn.
pub const PAWN_ICON: char = '\u{265F}';

const EMPTY_CELL: char = '.';

/// An 8×8 display grid. Purely cosmetic; the searches never touch it.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[char; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY_CELL; 8]; 8],
        }
    }

    pub fn place(&mut self, square: Square, icon: char) {
        self.cells[square.file() as usize - 1][square.rank() as usize - 1] = icon;
    }

    /// Renders ranks 8 down to 1 with a file-letter footer:
    ///
    /// ```text
    /// 8 . . . . . . . .
    /// ...
    /// 1 ♖ . . . . . . .
    ///   a b c d e f g h
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            out.push(char::from_digit(rank as u32 + 1, 10).expect("rank digit"));
            for file in 0..8 {
                out.push(' ');
                out.push(self.cells[file][rank]);
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Places `count` pawns on distinct random squares, none of them `mover`.
pub fn random_pawns<R: Rng>(rng: &mut R, mover: Square, count: usize) -> FxHashSet<Square> {
    let mut pawns = FxHashSet::default();

    while pawns.len() < count {
        let file: u8 = rng.gen_range(1..=8);
        let rank: u8 = rng.gen_range(1..=8);
        let sq = Square::new(file, rank).expect("sampled range is on the board");
        if sq != mover {
            pawns.insert(sq);
        }
    }

    pawns
}
