pub mod board;
pub mod rules;
pub mod turn;
pub mod types;

pub use board::{BOARD_SIZE, Board};
pub use rules::{apply, candidate_turns, validate};
pub use turn::Turn;
pub use types::*;
