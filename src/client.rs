//! Local match loop driving two player strategies against one board.
//!
//! `Client` owns the board and the strategies, alternates the acting colour
//! each round, and applies each filled-in turn. A failed application is a
//! hard error for the match: the loop stops and the error is returned.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::game::board::Board;
use crate::game::rules;
use crate::game::turn::Turn;
use crate::game::types::{Color, Direction, DraughtsError};
use crate::player::Player;

// =========================================================================
// RoundRecord
// =========================================================================

/// A completed round in the match history.
#[derive(Clone, Debug)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    /// The side that acted.
    pub color: Color,
    /// Origin of the piece that moved.
    pub x: u8,
    pub y: u8,
    /// The direction sequence that was applied.
    pub movements: Vec<Direction>,
}

// =========================================================================
// Client
// =========================================================================

/// A running match between two strategies.
pub struct Client {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    rounds: Vec<RoundRecord>,

    // Metadata
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Create a match on a fresh starting board.
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Client {
            board: Board::new(),
            white,
            black,
            rounds: Vec::new(),
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Current board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed round history.
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Play up to `max_rounds` rounds, White first, alternating colours.
    ///
    /// Each round constructs a fresh `Turn` bound to the acting colour, asks
    /// that side's strategy to fill it, and applies it to the board. Returns
    /// the number of rounds completed, or the first error — from a strategy
    /// that cannot produce a turn, or from applying an invalid one.
    pub fn run(&mut self, max_rounds: u32) -> Result<u32, DraughtsError> {
        tracing::debug!("\n{}", self.board);

        let mut color = Color::White;
        for round in 1..=max_rounds {
            let player = match color {
                Color::White => &self.white,
                Color::Black => &self.black,
            };

            let mut turn = Turn::new(color);
            player.fill_turn(&self.board, &mut turn)?;
            rules::apply(&mut self.board, &turn)?;

            tracing::info!(round, player = player.name(), "applied turn {turn}");
            tracing::debug!("\n{}", self.board);

            self.rounds.push(RoundRecord {
                round,
                color,
                x: turn.x,
                y: turn.y,
                movements: turn.movements.clone(),
            });
            color = !color;
        }

        Ok(self.rounds.len() as u32)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Cell;
    use crate::player::{FixedPlayer, RandomPlayer};

    fn fixed_client() -> Client {
        Client::new(Box::new(FixedPlayer), Box::new(FixedPlayer))
    }

    #[test]
    fn zero_rounds_is_a_no_op() {
        let mut client = fixed_client();
        let before = client.board().clone();
        assert_eq!(client.run(0).unwrap(), 0);
        assert_eq!(*client.board(), before);
        assert!(client.rounds().is_empty());
    }

    #[test]
    fn two_fixed_rounds_move_both_scripted_pieces() {
        let mut client = fixed_client();
        assert_eq!(client.run(2).unwrap(), 2);

        let board = client.board();
        // Round 1: White (0, 5) -> (1, 4).
        assert_eq!(board.get_cell(0, 5), Cell::Empty);
        assert_eq!(board.get_cell(1, 4), Cell::White);
        // Round 2: Black (1, 2) -> (2, 3).
        assert_eq!(board.get_cell(1, 2), Cell::Empty);
        assert_eq!(board.get_cell(2, 3), Cell::Black);
    }

    #[test]
    fn history_records_rounds_in_order() {
        let mut client = fixed_client();
        client.run(2).unwrap();
        let rounds = client.rounds();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].round, 1);
        assert_eq!(rounds[0].color, Color::White);
        assert_eq!((rounds[0].x, rounds[0].y), (0, 5));
        assert_eq!(rounds[1].round, 2);
        assert_eq!(rounds[1].color, Color::Black);
        assert_eq!((rounds[1].x, rounds[1].y), (1, 2));
    }

    #[test]
    fn stale_script_aborts_the_match() {
        // FixedPlayer replays the same squares every round; by round 3 the
        // White origin is empty and application must fail hard.
        let mut client = fixed_client();
        let err = client.run(3).unwrap_err();
        assert!(matches!(
            err,
            DraughtsError::TurnInvalid {
                color: Color::White,
                ..
            }
        ));
        // The two completed rounds are still on record.
        assert_eq!(client.rounds().len(), 2);
    }

    #[test]
    fn random_match_runs_some_rounds() {
        let mut client = Client::new(Box::new(RandomPlayer), Box::new(RandomPlayer));
        // Single-jump candidates always exist for both sides this early.
        let played = client.run(4).unwrap();
        assert_eq!(played, 4);
        assert_eq!(client.rounds().len(), 4);
    }

    #[test]
    fn client_metadata_is_populated() {
        let client = fixed_client();
        assert!(!client.id.is_empty());
        assert!(client.created_at <= Utc::now());
    }
}
