//! FEN serialization and parsing for [`Position`].

use std::fmt::Write as _;
use std::str::FromStr;

use crate::board::{Color, Piece, PieceKind, Position, Square};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("invalid piece char {0:?}")]
    InvalidPiece(char),
    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),
    #[error("rank {rank} covers {width} files, expected 8")]
    RankWidth { rank: usize, width: usize },
    #[error("invalid side {0:?}")]
    InvalidSide(String),
    #[error("invalid castling char {0:?}")]
    InvalidCastling(char),
    #[error("invalid en-passant square {0:?}")]
    InvalidEnPassant(String),
    #[error("invalid {field} {value:?}")]
    InvalidCounter { field: &'static str, value: String },
    #[error("unexpected trailing field {0:?}")]
    TrailingField(String),
}

impl Position {
    /// `<placement> <turn> <castling> <en-passant> <halfmove> <fullmove>`
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for (i, row) in self.board.rows().iter().enumerate() {
            if i > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for cell in row {
                match cell {
                    None => empty += 1,
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(fen, "{}", empty);
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                }
            }
            if empty > 0 {
                let _ = write!(fen, "{}", empty);
            }
        }

        fen.push(' ');
        fen.push(match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling.is_empty() {
            fen.push('-');
        } else {
            let c = &self.castling;
            for (set, ch) in [
                (c.white_king_side, 'K'),
                (c.white_queen_side, 'Q'),
                (c.black_king_side, 'k'),
                (c.black_queen_side, 'q'),
            ] {
                if set {
                    fen.push(ch);
                }
            }
        }

        match self.en_passant {
            Some(sq) => {
                let _ = write!(fen, " {}", sq);
            }
            None => fen.push_str(" -"),
        }

        let _ = write!(fen, " {} {}", self.halfmove_clock, self.fullmove_number);
        fen
    }

    /// Parse a FEN string. The two clock fields are optional and default to `0 1`.
    ///
    /// The board is taken as given: no check is made that each side has exactly
    /// one king or that castling rights match the rook placement.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let piece_part = parts.next().ok_or(FenError::MissingField("pieces"))?;
        let side_part = parts.next().ok_or(FenError::MissingField("side"))?;
        let castle_part = parts.next().ok_or(FenError::MissingField("castling"))?;
        let ep_part = parts.next().ok_or(FenError::MissingField("en-passant"))?;
        let (halfmove_part, fullmove_part) = match parts.next() {
            Some(h) => (h, parts.next().ok_or(FenError::MissingField("fullmove"))?),
            None => ("0", "1"),
        };
        if let Some(extra) = parts.next() {
            return Err(FenError::TrailingField(extra.to_string()));
        }

        let mut pos = Position::empty();

        // Parse pieces: row 0 (rank 8) first
        let ranks: Vec<&str> = piece_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (row, rank_part) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_part.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                let sq = Square::new(row as i32, col as i32).ok_or(FenError::RankWidth {
                    rank: 8 - row,
                    width: col + 1,
                })?;
                pos.board.set(sq, Some(piece));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::RankWidth {
                    rank: 8 - row,
                    width: col,
                });
            }
        }

        pos.turn = match side_part {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSide(other.to_string())),
        };

        // Castling rights: KQkq
        if castle_part != "-" {
            for ch in castle_part.chars() {
                match ch {
                    'K' => pos.castling.white_king_side = true,
                    'Q' => pos.castling.white_queen_side = true,
                    'k' => pos.castling.black_king_side = true,
                    'q' => pos.castling.black_queen_side = true,
                    _ => return Err(FenError::InvalidCastling(ch)),
                }
            }
        }

        // En-passant: the target lies behind an enemy pawn that just advanced two
        pos.en_passant = match ep_part {
            "-" => None,
            s => {
                let invalid = || FenError::InvalidEnPassant(s.to_string());
                let sq: Square = s.parse().map_err(|_| invalid())?;
                let enemy = pos.turn.opposite();
                let expected_row = (enemy.pawn_start_row() as i32 + enemy.forward() as i32) as usize;
                if sq.row() != expected_row || pos.board.is_occupied(sq) {
                    return Err(invalid());
                }
                let pawn_sq = sq.offset(enemy.forward(), 0).ok_or_else(invalid)?;
                if pos.board.piece_at(pawn_sq) != Some(Piece::new(enemy, PieceKind::Pawn)) {
                    return Err(invalid());
                }
                Some(sq)
            }
        };

        pos.halfmove_clock = halfmove_part.parse().map_err(|_| FenError::InvalidCounter {
            field: "halfmove",
            value: halfmove_part.to_string(),
        })?;
        pos.fullmove_number = fullmove_part.parse().map_err(|_| FenError::InvalidCounter {
            field: "fullmove",
            value: fullmove_part.to_string(),
        })?;

        Ok(pos)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
