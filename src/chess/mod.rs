pub mod moves;
pub mod piece;
