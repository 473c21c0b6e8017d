use arbitro::{PieceKind, Position, Square};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position as _, Role};

const FENS: [&str; 6] = [
    "1r2k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPB1PPP/R2BK2R w KQk - 2 2",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "8/8/8/K2Pp2r/8/8/8/4k3 w - e6 0 1",
    "4k3/8/8/8/8/8/8/R3K2r w Q - 0 1",
];

// arbitro moves rendered as UCI, with the implied queen on promotion
fn arbitro_uci(pos: &Position) -> Vec<String> {
    let mut out: Vec<String> = pos
        .legal_moves()
        .into_iter()
        .map(|(from, to): (Square, Square)| {
            let piece = pos.piece_at(from).expect("origin occupied");
            let promo = piece.kind == PieceKind::Pawn
                && to.row() == piece.color.promotion_row() as usize;
            format!("{}{}{}", from, to, if promo { "q" } else { "" })
        })
        .collect();
    out.sort();
    out
}

fn shakmaty_uci(fen_str: &str) -> Vec<String> {
    let fen: Fen = fen_str.parse().unwrap();
    let pos: Chess = fen.into_position(CastlingMode::Standard).unwrap();
    let mut out: Vec<String> = pos
        .legal_moves()
        .into_iter()
        .filter(|m| m.promotion().map_or(true, |r| r == Role::Queen))
        .map(|m| m.to_uci(CastlingMode::Standard).to_string())
        .collect();
    out.sort();
    out
}

#[test]
fn legal_move_sets_match_shakmaty() {
    for fen in FENS {
        let pos = Position::from_fen(fen).expect("set_from_fen");
        assert_eq!(arbitro_uci(&pos), shakmaty_uci(fen), "move set mismatch for {fen}");
    }
}

#[test]
fn king_cannot_move_into_check() {
    let fen = FENS[0];
    let pos = Position::from_fen(fen).unwrap();
    let legal = shakmaty_uci(fen);
    let e1: Square = "e1".parse().unwrap();
    for to in pos.available_moves(e1) {
        let uci = format!("{}{}", e1, to);
        assert!(legal.contains(&uci), "illegal king move {uci}; legal: {legal:?}");
    }
}
