//! Player strategies — trait definition, FixedPlayer, and RandomPlayer.
//!
//! The `Player` trait is the boundary between the rules engine and whatever
//! selects moves. A strategy receives a read-only board and a turn that is
//! already bound to the acting colour; it fills in the origin and direction
//! list and hands control back.

use rand::seq::SliceRandom;

use crate::game::board::Board;
use crate::game::rules::candidate_turns;
use crate::game::turn::Turn;
use crate::game::types::{Color, Direction, DraughtsError};

// =========================================================================
// Player trait
// =========================================================================

/// The move-selection interface.
pub trait Player: Send + Sync {
    /// Populate `turn` with an origin and direction sequence for the turn's
    /// colour. The board is read-only input and must not be mutated.
    fn fill_turn(&self, board: &Board, turn: &mut Turn) -> Result<(), DraughtsError>;

    /// Human-readable name for this strategy.
    fn name(&self) -> &str;
}

// =========================================================================
// FixedPlayer
// =========================================================================

/// Plays one scripted opening move per side: Black pushes the man at (1, 2)
/// down-right, White pushes the man at (0, 5) up-right. Useful as a
/// deterministic opponent in tests and demos; it has no notion of game state,
/// so its script stops validating after each side has moved once.
pub struct FixedPlayer;

impl Player for FixedPlayer {
    fn fill_turn(&self, _board: &Board, turn: &mut Turn) -> Result<(), DraughtsError> {
        match turn.color() {
            Color::Black => {
                turn.set_piece_position(1, 2);
                turn.push(Direction::DownRight);
            }
            Color::White => {
                turn.set_piece_position(0, 5);
                turn.push(Direction::UpRight);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "FixedPlayer"
    }
}

// =========================================================================
// RandomPlayer
// =========================================================================

/// Picks uniformly among the validator-approved single-direction turns.
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn fill_turn(&self, board: &Board, turn: &mut Turn) -> Result<(), DraughtsError> {
        let candidates = candidate_turns(board, turn.color());
        let mut rng = rand::thread_rng();
        let Some(pick) = candidates.choose(&mut rng) else {
            return Err(DraughtsError::NoTurnAvailable(turn.color()));
        };
        turn.set_piece_position(pick.x, pick.y);
        for &dir in &pick.movements {
            turn.push(dir);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "RandomPlayer"
    }
}

// =========================================================================
// Strategy selection
// =========================================================================

/// Resolve a strategy by configuration name (case-insensitive).
pub fn strategy_by_name(name: &str) -> Result<Box<dyn Player>, DraughtsError> {
    match name.to_lowercase().as_str() {
        "random" => Ok(Box::new(RandomPlayer)),
        "fixed" => Ok(Box::new(FixedPlayer)),
        other => Err(DraughtsError::UnknownStrategy(other.to_string())),
    }
}

// =========================================================================
// Tests
// =========================================================================
