//! A turn proposal: one piece's origin plus an ordered list of diagonal steps.

use std::fmt;

use crate::game::types::{Color, Direction};

/// One player's proposed action for a round.
///
/// A turn is read-only input to validation; only the board is mutated when a
/// turn is applied. The acting colour is fixed at construction — strategies
/// fill in the origin and the direction list but cannot reassign the side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    color: Color,
    /// x position of the piece being moved.
    pub x: u8,
    /// y position of the piece being moved.
    pub y: u8,
    /// The diagonal steps to take, in order.
    pub movements: Vec<Direction>,
}

impl Turn {
    /// A fresh turn for `color` with origin `(0, 0)` and no movements.
    pub fn new(color: Color) -> Self {
        Turn {
            color,
            x: 0,
            y: 0,
            movements: Vec::new(),
        }
    }

    /// The side this turn acts for.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the origin of the piece being moved.
    pub fn set_piece_position(&mut self, x: u8, y: u8) {
        self.x = x;
        self.y = y;
    }

    /// Append a step to the movement sequence.
    pub fn push(&mut self, dir: Direction) {
        self.movements.push(dir);
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.color, self.x, self.y)?;
        for (i, dir) in self.movements.iter().enumerate() {
            let sep = if i == 0 { ':' } else { ',' };
            write!(f, "{sep} {dir}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_turn_defaults() {
        let turn = Turn::new(Color::Black);
        assert_eq!(turn.color(), Color::Black);
        assert_eq!((turn.x, turn.y), (0, 0));
        assert!(turn.movements.is_empty());
    }

    #[test]
    fn set_position_and_push() {
        let mut turn = Turn::new(Color::White);
        turn.set_piece_position(4, 5);
        turn.push(Direction::UpLeft);
        turn.push(Direction::UpRight);
        assert_eq!((turn.x, turn.y), (4, 5));
        assert_eq!(
            turn.movements,
            vec![Direction::UpLeft, Direction::UpRight]
        );
    }

    #[test]
    fn display_without_movements() {
        let mut turn = Turn::new(Color::White);
        turn.set_piece_position(0, 5);
        assert_eq!(turn.to_string(), "white (0, 5)");
    }

    #[test]
    fn display_with_movements() {
        let mut turn = Turn::new(Color::Black);
        turn.set_piece_position(1, 2);
        turn.push(Direction::DownRight);
        turn.push(Direction::DownLeft);
        assert_eq!(turn.to_string(), "black (1, 2): down-right, down-left");
    }
}
