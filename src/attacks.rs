// Attack detection by scanning outward from the target square.

use crate::board::{Board, Color, PieceKind, Position, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// Direzioni per i pezzi a raggio: (delta row, delta col)
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// True iff any piece of color `by` attacks `sq` under the current occupancy.
    ///
    /// The target square's own occupant is irrelevant: this answers "could a
    /// piece capture here", not "could a piece move here".
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let is = |at: Option<Square>, kind: PieceKind| {
            at.and_then(|s| self.piece_at(s))
                .is_some_and(|p| p.color == by && p.kind == kind)
        };

        // Pawn attacks: an attacking pawn sits one step "behind" sq from its own point of view
        let back = -by.forward();
        if is(sq.offset(back, -1), PieceKind::Pawn) || is(sq.offset(back, 1), PieceKind::Pawn) {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, dc)| is(sq.offset(dr, dc), PieceKind::Knight))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(dr, dc)| is(sq.offset(dr, dc), PieceKind::King))
        {
            return true;
        }

        // Rook/Queen (orthogonal sliding), Bishop/Queen (diagonal sliding)
        self.ray_hits(sq, by, &ROOK_DIRECTIONS, PieceKind::Rook)
            || self.ray_hits(sq, by, &BISHOP_DIRECTIONS, PieceKind::Bishop)
    }

    // Walk each ray until the first occupied square; hit if it holds `slider` or a queen of `by`.
    fn ray_hits(&self, sq: Square, by: Color, dirs: &[(i8, i8)], slider: PieceKind) -> bool {
        for &(dr, dc) in dirs {
            let mut cur = sq.offset(dr, dc);
            while let Some(s) = cur {
                if let Some(p) = self.piece_at(s) {
                    if p.color == by && (p.kind == slider || p.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                cur = s.offset(dr, dc);
            }
        }
        false
    }

    /// Square of `color`'s king. `None` only on a malformed board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Is `color`'s king attacked on this board? A board without that king is never in check.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|k| self.is_square_attacked(k, color.opposite()))
    }
}

impl Position {
    /// The side to move is in check.
    pub fn is_in_check(&self) -> bool {
        self.board.is_king_attacked(self.turn)
    }
}
