//! The turn engine: validation and application of proposed turns.
//!
//! `validate` decides whether a turn is legal on a given board without
//! touching it; `apply` re-validates and, only if valid, mutates the board in
//! place — relocating the moving piece and removing every captured piece.
//! Checks run in a fixed order and the first violated rule determines the
//! outcome tag.

use crate::game::board::{BOARD_SIZE, Board};
use crate::game::turn::Turn;
use crate::game::types::{Cell, Color, Direction, DraughtsError, TurnValidity};

#[inline]
fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Decide whether `turn` is a legal turn on `board`.
///
/// Check order: origin in bounds, origin occupied, piece owned by the acting
/// colour, every direction legal for a non-king, then either the single-step
/// simple-move short-circuit or the capture walk. A turn with no movements is
/// vacuously `Valid`; `apply` treats it as a no-op.
pub fn validate(board: &Board, turn: &Turn) -> TurnValidity {
    if !in_bounds(turn.x as i32, turn.y as i32) {
        return TurnValidity::MoveOOB;
    }

    let piece = board.get_cell(turn.x, turn.y);
    let Some(piece_color) = piece.color() else {
        return TurnValidity::CellEmpty;
    };

    if piece_color != turn.color() {
        return TurnValidity::WrongColor;
    }

    // A regular piece may never step backward, in any leg of the sequence.
    // Evaluated against the piece's kind at the origin for the whole turn.
    if !piece.is_king() {
        for &dir in &turn.movements {
            if piece_color.is_backward(dir) {
                return TurnValidity::NotKing;
            }
        }
    }

    // A single direction is ambiguous between a simple move onto an empty
    // adjacent square and the first leg of a one-capture sequence. Try the
    // non-capturing reading first; fall through to the capture walk if the
    // adjacent square is occupied.
    if turn.movements.len() == 1 {
        let (dx, dy) = turn.movements[0].step();
        let (nx, ny) = (turn.x as i32 + dx, turn.y as i32 + dy);
        if !in_bounds(nx, ny) {
            return TurnValidity::MoveOOB;
        }
        if board.get_cell(nx as u8, ny as u8) == Cell::Empty {
            return TurnValidity::Valid;
        }
    }

    // Capture walk: each direction jumps two squares, over the piece on the
    // intermediate square. Track which squares were jumped so no piece is
    // captured twice within the turn.
    let mut jumped: Vec<(i32, i32)> = Vec::new();
    let (mut cx, mut cy) = (turn.x as i32, turn.y as i32);
    for &dir in &turn.movements {
        let (dx, dy) = dir.step();
        let (mx, my) = (cx + dx, cy + dy);
        let (lx, ly) = (cx + 2 * dx, cy + 2 * dy);

        if !in_bounds(lx, ly) {
            return TurnValidity::MoveOOB;
        }
        if jumped.contains(&(mx, my)) {
            return TurnValidity::TakeInvalid;
        }
        let over = board.get_cell(mx as u8, my as u8);
        match over.color() {
            None => return TurnValidity::TakeInvalid,
            Some(c) if c == turn.color() => return TurnValidity::TakeInvalid,
            Some(_) => {}
        }
        if board.get_cell(lx as u8, ly as u8) != Cell::Empty {
            return TurnValidity::SpaceBlocked;
        }

        jumped.push((mx, my));
        cx = lx;
        cy = ly;
    }

    TurnValidity::Valid
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

/// Apply `turn` to `board`.
///
/// Re-validates first; on any failure returns `DraughtsError::TurnInvalid`
/// and leaves every cell untouched. On success, either relocates the piece
/// one square (simple move) or removes each jumped piece and relocates the
/// mover from its origin to the final landing square in one step.
pub fn apply(board: &mut Board, turn: &Turn) -> Result<(), DraughtsError> {
    let validity = validate(board, turn);
    if !validity.is_valid() {
        return Err(DraughtsError::TurnInvalid {
            color: turn.color(),
            x: turn.x,
            y: turn.y,
            validity,
        });
    }

    // A movement-free turn is vacuously valid and moves nothing.
    if turn.movements.is_empty() {
        return Ok(());
    }

    // Simple move: one direction onto an empty adjacent square.
    if turn.movements.len() == 1 {
        let (dx, dy) = turn.movements[0].step();
        let (nx, ny) = ((turn.x as i32 + dx) as u8, (turn.y as i32 + dy) as u8);
        if board.get_cell(nx, ny) == Cell::Empty {
            board.move_cell(turn.x, turn.y, nx, ny);
            return Ok(());
        }
    }

    // Capture sequence: clear each jumped square, then relocate the mover
    // from its origin straight to the final landing square. The intermediate
    // landing squares are never written.
    let (mut cx, mut cy) = (turn.x as i32, turn.y as i32);
    for &dir in &turn.movements {
        let (dx, dy) = dir.step();
        board.remove_piece((cx + dx) as u8, (cy + dy) as u8);
        cx += 2 * dx;
        cy += 2 * dy;
    }
    board.move_cell(turn.x, turn.y, cx as u8, cy as u8);

    // TODO: crown a piece that lands on its far rank; nothing promotes a man
    // to a king yet, so kings only enter the board via explicit set_cell.

    Ok(())
}

// ---------------------------------------------------------------------------
// Candidate enumeration
// ---------------------------------------------------------------------------

/// All single-direction turns for `color` that the validator accepts.
///
/// One candidate per (piece, direction) pair covers both readings of a single
/// step: a simple move onto an empty square, or a one-jump capture. Longer
/// capture sequences are not enumerated.
pub fn candidate_turns(board: &Board, color: Color) -> Vec<Turn> {
    let mut turns = Vec::new();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if board.get_cell(x, y).color() != Some(color) {
                continue;
            }
            for dir in Direction::ALL {
                let mut turn = Turn::new(color);
                turn.set_piece_position(x, y);
                turn.push(dir);
                if validate(board, &turn).is_valid() {
                    turns.push(turn);
                }
            }
        }
    }
    turns
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
