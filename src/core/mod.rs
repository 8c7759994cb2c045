pub mod coord;
pub mod square;
