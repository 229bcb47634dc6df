pub mod strategy;

pub use strategy::{FixedPlayer, Player, RandomPlayer, strategy_by_name};
