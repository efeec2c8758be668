pub mod board;

pub use board::{DieId, Highlight, Position};
