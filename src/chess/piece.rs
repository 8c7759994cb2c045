use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Queen,
    Rook,
    Knight,
}

impl PieceKind {
    /// Unit ray directions for sliding pieces; empty for the knight.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        match self {
            PieceKind::Queen => &QUEEN_DIRS,
            PieceKind::Rook => &ROOK_DIRS,
            PieceKind::Knight => &[],
        }
    }

    /// Unicode icon used by the board renderer.
    #[inline]
    pub fn icon(self) -> char {
        match self {
            PieceKind::Queen => '\u{2655}',
            PieceKind::Rook => '\u{2656}',
            PieceKind::Knight => '\u{2658}',
        }
    }

    /// Parses a piece name case-insensitively.
    ///
    /// Anything but the three supported names is rejected; there is no
    /// fallback kind.
    pub fn from_name(s: &str) -> Result<PieceKind, UnknownPiece> {
        match s.to_ascii_lowercase().as_str() {
            "queen" => Ok(PieceKind::Queen),
            "rook" => Ok(PieceKind::Rook),
            "knight" => Ok(PieceKind::Knight),
            _ => Err(UnknownPiece(s.to_string())),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
        };
        f.write_str(name)
    }
}

impl FromStr for PieceKind {
    type Err = UnknownPiece;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::from_name(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPiece(pub String);

impl fmt::Display for UnknownPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown piece {:?} (expected queen, rook or knight)", self.0)
    }
}

impl std::error::Error for UnknownPiece {}

/// The mover: a kind plus its start square.
///
/// Searches never mutate a `Piece`; they re-derive moves per visited square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    #[inline]
    pub fn new(kind: PieceKind, square: Square) -> Self {
        Self { kind, square }
    }
}

// Ray order is north, east, south, west, then the diagonals clockwise from
// north-east. Move lists therefore come out in a fixed scan order.
pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 0, y: 1 },
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: -1 },
    Coord { x: -1, y: 0 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { x: 0, y: 1 },
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: -1 },
    Coord { x: -1, y: 1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_names_parse_case_insensitively() {
        assert_eq!(PieceKind::from_name("Queen"), Ok(PieceKind::Queen));
        assert_eq!(PieceKind::from_name("ROOK"), Ok(PieceKind::Rook));
        assert_eq!(PieceKind::from_name("knight"), Ok(PieceKind::Knight));
    }

    #[test]
    fn unsupported_names_are_rejected() {
        for bad in ["bishop", "king", "pawn", "", "que en"] {
            assert!(PieceKind::from_name(bad).is_err(), "accepted {bad:?}");
        }
    }
}
