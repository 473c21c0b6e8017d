// Leaf counting over the legal move tree, for cross-checking move generation.

use crate::board::Position;

/// Number of leaf positions reachable in exactly `depth` plies.
///
/// Each child is a clone of its parent with the move applied; there is no unmake.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = pos.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for (from, to) in moves {
        let mut child = pos.clone();
        if child.apply_move(from, to) {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Per-root-move breakdown, in generation order, as `(uci, nodes)` pairs.
pub fn divide(pos: &Position, depth: u8) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for (from, to) in pos.legal_moves() {
        let mut child = pos.clone();
        if child.apply_move(from, to) {
            out.push((format!("{}{}", from, to), perft(&child, depth - 1)));
        }
    }
    out
}
