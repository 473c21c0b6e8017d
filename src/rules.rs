// State transition and terminal-condition queries.

use std::fmt;

use crate::board::{Color, LastMove, Piece, PieceKind, Position, Square};
use crate::movegen::{is_en_passant_capture, simulate};

/// Outcome of inspecting the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCondition {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameCondition {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameCondition::Checkmate | GameCondition::Stalemate)
    }
}

impl fmt::Display for GameCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameCondition::Ongoing => write!(f, "ongoing"),
            GameCondition::Check => write!(f, "check"),
            GameCondition::Checkmate => write!(f, "checkmate"),
            GameCondition::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Position {
    /// Apply `from -> to` if it is legal for the side to move.
    ///
    /// Returns `false` and leaves the position untouched when `from` is
    /// empty, holds an opponent's piece, or `to` is not an available move.
    /// Otherwise commits every side effect (castling rook, en-passant
    /// capture, promotion to queen, rights, clocks, turn) and returns `true`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        let piece = match self.piece_at(from) {
            Some(p) if p.color == self.turn => p,
            _ => return false,
        };
        if !self.available_moves(from).contains(&to) {
            return false;
        }

        // Validation done: from here on every effect is committed
        let captured = self.piece_at(to);
        if piece.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        match piece.kind {
            PieceKind::King => self.castling.clear_color(piece.color),
            PieceKind::Rook => self.castling.clear_corner(from),
            _ => {}
        }
        // Una torre catturata sul suo angolo toglie il diritto all'avversario
        if captured.is_some_and(|p| p.kind == PieceKind::Rook) {
            self.castling.clear_corner(to);
        }

        let en_passant = self.en_passant;
        debug_assert!(
            !is_en_passant_capture(piece, from, to, en_passant) || captured.is_none(),
            "en-passant target must be empty"
        );
        simulate(&mut self.board, piece, from, to, en_passant);

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() as usize {
            self.board
                .set(to, Some(Piece::new(piece.color, PieceKind::Queen)));
        }

        self.en_passant = if piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Square::new(((from.row() + to.row()) / 2) as i32, from.col() as i32)
        } else {
            None
        };

        self.turn = self.turn.opposite();
        if self.turn == Color::White {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.last_move = Some(LastMove { piece, from, to });
        true
    }

    /// In check with no legal reply.
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_legal_move()
    }

    /// Not in check, yet no legal move.
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_move()
    }

    pub fn game_condition(&self) -> GameCondition {
        match (self.is_in_check(), self.has_legal_move()) {
            (true, false) => GameCondition::Checkmate,
            (true, true) => GameCondition::Check,
            (false, false) => GameCondition::Stalemate,
            (false, true) => GameCondition::Ongoing,
        }
    }
}
