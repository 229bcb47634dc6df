//! Draughts (checkers) rules engine: board state, turn validation and
//! application, pluggable player strategies, and a local match loop.

pub mod client;
pub mod config;
pub mod game;
pub mod player;
