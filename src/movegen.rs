// Pseudo-legal generation per piece, then king-safety filtering on a board copy.

use crate::attacks::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use crate::board::{Board, Color, Piece, PieceKind, Position, Square};

// Castling geometry on the mover's back row: (king_to, rook_from, rook_to)
pub(crate) const KING_SIDE: (usize, usize, usize) = (6, 7, 5);
pub(crate) const QUEEN_SIDE: (usize, usize, usize) = (2, 0, 3);
const KING_START_COL: usize = 4;

impl Position {
    /// Destinations for the piece on `from`, ignoring whether the mover's king is left attacked.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    pub fn pseudo_moves(&self, from: Square) -> Vec<Square> {
        let piece = match self.piece_at(from) {
            Some(p) if p.color == self.turn => p,
            _ => return Vec::new(),
        };

        let mut out = Vec::with_capacity(28);
        match piece.kind {
            PieceKind::Pawn => self.pawn_pseudos(from, piece.color, &mut out),
            PieceKind::Knight => self.step_pseudos(from, piece.color, &KNIGHT_OFFSETS, &mut out),
            PieceKind::Bishop => self.slide_pseudos(from, piece.color, &BISHOP_DIRECTIONS, &mut out),
            PieceKind::Rook => self.slide_pseudos(from, piece.color, &ROOK_DIRECTIONS, &mut out),
            PieceKind::Queen => {
                self.slide_pseudos(from, piece.color, &ROOK_DIRECTIONS, &mut out);
                self.slide_pseudos(from, piece.color, &BISHOP_DIRECTIONS, &mut out);
            }
            PieceKind::King => {
                self.step_pseudos(from, piece.color, &KING_OFFSETS, &mut out);
                self.castling_pseudos(from, piece.color, &mut out);
            }
        }
        out
    }

    fn pawn_pseudos(&self, from: Square, side: Color, out: &mut Vec<Square>) {
        let fwd = side.forward();

        // Single push, then double push from the starting row
        if let Some(one) = from.offset(fwd, 0) {
            if !self.board.is_occupied(one) {
                out.push(one);
                if from.row() == side.pawn_start_row() as usize {
                    if let Some(two) = one.offset(fwd, 0) {
                        if !self.board.is_occupied(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }

        // Diagonal captures, including onto the en-passant target
        for dc in [-1, 1] {
            let Some(to) = from.offset(fwd, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color != side => out.push(to),
                None if self.en_passant == Some(to) => out.push(to),
                _ => {}
            }
        }
    }

    fn step_pseudos(&self, from: Square, side: Color, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                if self.piece_at(to).map_or(true, |p| p.color != side) {
                    out.push(to);
                }
            }
        }
    }

    fn slide_pseudos(&self, from: Square, side: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
        for &(dr, dc) in dirs {
            let mut cur = from.offset(dr, dc);
            while let Some(to) = cur {
                match self.piece_at(to) {
                    None => out.push(to),
                    Some(p) => {
                        if p.color != side {
                            out.push(to);
                        }
                        break;
                    }
                }
                cur = to.offset(dr, dc);
            }
        }
    }

    fn castling_pseudos(&self, from: Square, side: Color, out: &mut Vec<Square>) {
        let row = side.back_row();
        if from != Square::at(row, KING_START_COL as u8) {
            return;
        }
        if !self.castling.king_side(side) && !self.castling.queen_side(side) {
            return;
        }
        if self.is_in_check() {
            return;
        }

        let enemy = side.opposite();
        let rook = Piece::new(side, PieceKind::Rook);
        let on_row = |col: usize| Square::at(row, col as u8);

        // Kingside: f and g empty and not attacked
        if self.castling.king_side(side) {
            let (king_to, rook_from, _) = KING_SIDE;
            let clear = (KING_START_COL + 1..rook_from).all(|c| !self.board.is_occupied(on_row(c)));
            let safe = (KING_START_COL + 1..=king_to)
                .all(|c| !self.board.is_square_attacked(on_row(c), enemy));
            if self.piece_at(on_row(rook_from)) == Some(rook) && clear && safe {
                out.push(on_row(king_to));
            }
        }

        // Queenside: b, c and d empty; only d and c (the king's path) must be unattacked
        if self.castling.queen_side(side) {
            let (king_to, rook_from, _) = QUEEN_SIDE;
            let clear = (rook_from + 1..KING_START_COL).all(|c| !self.board.is_occupied(on_row(c)));
            let safe = (king_to..KING_START_COL)
                .all(|c| !self.board.is_square_attacked(on_row(c), enemy));
            if self.piece_at(on_row(rook_from)) == Some(rook) && clear && safe {
                out.push(on_row(king_to));
            }
        }
    }

    /// Would the mover's king be safe after `from -> to`?
    ///
    /// The move is played on a copy of the board (en-passant removal and
    /// castling rook included); the live position is never touched.
    pub fn is_move_safe(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        let mut board = self.board;
        simulate(&mut board, piece, from, to, self.en_passant);
        !board.is_king_attacked(piece.color)
    }

    /// Legal destinations for the piece on `from`, in generation order.
    pub fn available_moves(&self, from: Square) -> Vec<Square> {
        self.pseudo_moves(from)
            .into_iter()
            .filter(|&to| self.is_move_safe(from, to))
            .collect()
    }

    /// Every legal (from, to) pair for the side to move, origins in row-major order.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == self.turn)
            .flat_map(|(from, _)| self.available_moves(from).into_iter().map(move |to| (from, to)))
            .collect()
    }

    pub fn has_legal_move(&self) -> bool {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == self.turn)
            .any(|(from, _)| {
                self.pseudo_moves(from)
                    .into_iter()
                    .any(|to| self.is_move_safe(from, to))
            })
    }
}

/// Board-only part of a move: capture, en-passant removal, rook hop, piece relocation.
/// Shared by the legality filter (on a copy) and the mutator (on the live board).
pub(crate) fn simulate(
    board: &mut Board,
    piece: Piece,
    from: Square,
    to: Square,
    en_passant: Option<Square>,
) {
    if is_en_passant_capture(piece, from, to, en_passant) {
        board.set(Square::at(from.row() as u8, to.col() as u8), None);
    }

    if let Some((rook_from, rook_to)) = castling_rook_hop(piece, from, to) {
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
    }

    board.set(from, None);
    board.set(to, Some(piece));
}

pub(crate) fn is_en_passant_capture(
    piece: Piece,
    from: Square,
    to: Square,
    en_passant: Option<Square>,
) -> bool {
    piece.kind == PieceKind::Pawn && en_passant == Some(to) && from.col() != to.col()
}

/// Rook squares moved alongside a castling king, inferred from a two-file king step.
pub(crate) fn castling_rook_hop(piece: Piece, from: Square, to: Square) -> Option<(Square, Square)> {
    if piece.kind != PieceKind::King || from.col().abs_diff(to.col()) != 2 {
        return None;
    }
    let (_, rook_from, rook_to) = if to.col() == KING_SIDE.0 {
        KING_SIDE
    } else {
        QUEEN_SIDE
    };
    let row = to.row() as u8;
    Some((Square::at(row, rook_from as u8), Square::at(row, rook_to as u8)))
}
