use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::coord::Coord;

/// A validated cell of the 8×8 board.
///
/// Both coordinates are 1-based: file `1..=8` maps to `'a'..='h'`, rank
/// `1..=8` to `'1'..='8'`. A `Square` can only exist in-range, so the
/// algebraic conversion is total and bijective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Constructs a square, rejecting (never clamping) out-of-range input.
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// 1-based file (column), `1` = the a-file.
    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    /// 1-based rank (row).
    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Parses strict two-character algebraic notation ("e4").
    ///
    /// The file letter may be uppercase; everything else (wrong length,
    /// out-of-range letter or digit, whitespace) is rejected.
    pub fn from_algebraic(s: &str) -> Result<Square, ParseSquareError> {
        let mut chars = s.chars();
        let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::Length {
                found: s.chars().count(),
            });
        };

        let file_ch = file_ch.to_ascii_lowercase();
        if !('a'..='h').contains(&file_ch) {
            return Err(ParseSquareError::File { found: file_ch });
        }
        if !('1'..='8').contains(&rank_ch) {
            return Err(ParseSquareError::Rank { found: rank_ch });
        }

        Ok(Square {
            file: (file_ch as u8) - b'a' + 1,
            rank: (rank_ch as u8) - b'0',
        })
    }

    /// Total validity predicate over arbitrary strings; never panics.
    pub fn is_valid(s: &str) -> bool {
        Square::from_algebraic(s).is_ok()
    }

    /// Translates by `delta`, returning `None` when the result leaves the board.
    pub fn offset(self, delta: Coord) -> Option<Square> {
        let file = self.file as i32 + delta.x;
        let rank = self.rank as i32 + delta.y;
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Square) -> f64 {
        let dx = f64::from(self.file) - f64::from(other.file);
        let dy = f64::from(self.rank) - f64::from(other.rank);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_ch = (b'a' + self.file - 1) as char;
        write!(f, "{}{}", file_ch, self.rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

// Squares serialize as their algebraic string, which keeps JSON reports
// readable and round-trips through the strict parser.
impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why an algebraic square string failed to parse.
pub enum ParseSquareError {
    /// Not exactly two characters.
    Length { found: usize },
    /// First character outside `a..=h`.
    File { found: char },
    /// Second character outside `1..=8`.
    Rank { found: char },
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSquareError::Length { found } => {
                write!(f, "expected exactly 2 characters, found {found}")
            }
            ParseSquareError::File { found } => {
                write!(f, "file {found:?} is not a letter in a..h")
            }
            ParseSquareError::Rank { found } => {
                write!(f, "rank {found:?} is not a digit in 1..8")
            }
        }
    }
}

impl std::error::Error for ParseSquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn algebraic_round_trip() {
        for file in b'a'..=b'h' {
            for rank in b'1'..=b'8' {
                let text = format!("{}{}", file as char, rank as char);
                assert_eq!(sq(&text).to_string(), text);
            }
        }
    }

    #[test]
    fn uppercase_file_is_normalized() {
        assert_eq!(sq("E4"), sq("e4"));
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "e", "e44", "e4 ", " e4", "e 4", "e ", " 4", "i4", "e9", "e0", "44"] {
            assert!(!Square::is_valid(bad), "accepted {bad:?}");
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Square::new(0, 4).is_none());
        assert!(Square::new(9, 4).is_none());
        assert!(Square::new(4, 0).is_none());
        assert!(Square::new(4, 9).is_none());
        assert_eq!(Square::new(5, 4), Some(sq("e4")));
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(sq("e4").offset(Coord::new(1, 2)), Some(sq("f6")));
        assert_eq!(sq("a1").offset(Coord::new(-1, 0)), None);
        assert_eq!(sq("h8").offset(Coord::new(0, 1)), None);
    }

    #[test]
    fn corner_distance() {
        let d = sq("a1").distance(sq("h8"));
        assert!((d - 98f64.sqrt()).abs() < 1e-12);
    }
}
