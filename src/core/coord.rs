/// A move delta in (file, rank) space.
///
/// Direction tables for the sliding pieces and the knight's jump offsets
/// live next to [`crate::chess::piece::PieceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
