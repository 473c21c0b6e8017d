//! The boundary-facing engine: one owned position and the calls a request layer makes on it.
//!
//! Coordinates arrive as raw integers from the outside and are bounds-checked
//! here; anything off the board is treated as "no piece, no moves".

use crate::board::{Board, Color, LastMove, Position, Square};
use crate::fen::FenError;
use crate::rules::GameCondition;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    position: Position,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self {
            position: Position::from_fen(fen)?,
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn turn(&self) -> Color {
        self.position.turn
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.position.last_move
    }

    /// Legal destinations from (row, col). Empty for out-of-range input.
    pub fn available_moves(&self, row: i32, col: i32) -> Vec<Square> {
        match Square::new(row, col) {
            Some(sq) => self.position.available_moves(sq),
            None => Vec::new(),
        }
    }

    /// Play the piece on `from` to (to_row, to_col). `false` if illegal or off the board.
    pub fn apply_move(&mut self, from: (i32, i32), to_row: i32, to_col: i32) -> bool {
        match (Square::new(from.0, from.1), Square::new(to_row, to_col)) {
            (Some(from), Some(to)) => self.position.apply_move(from, to),
            _ => false,
        }
    }

    pub fn is_in_check(&self) -> bool {
        self.position.is_in_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    pub fn game_condition(&self) -> GameCondition {
        self.position.game_condition()
    }

    /// Back to the standard start, White to move, all rights, clocks zeroed.
    pub fn reset(&mut self) {
        self.position = Position::new();
    }

    /// Replace the position wholesale. On error the current position is kept.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        self.position = Position::from_fen(fen)?;
        Ok(())
    }
}
