//! Shortest-move planning for a single chess piece on an 8×8 board scattered
//! with capturable pawns.

pub mod board;
pub mod chess;
pub mod core;
pub mod modes;
pub mod search;
