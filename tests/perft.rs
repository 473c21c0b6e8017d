use arbitro::perft::perft;
use arbitro::{Position, START_FEN};
use shakmaty::fen::Fen;
use shakmaty::{Chess, Position as _, Role};

// Under-promotions are not counted: arbitro always promotes to a queen
fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for m in pos.legal_moves() {
        if m.promotion().is_some_and(|r| r != Role::Queen) {
            continue;
        }
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}

fn run_perft_check(fen_str: &str, depth: u8, name: &str) {
    let pos = Position::from_fen(fen_str).expect("Valid FEN");
    let arbitro_cnt = perft(&pos, depth);

    let fen: Fen = fen_str.parse().unwrap();
    let oracle: Chess = fen
        .into_position(shakmaty::CastlingMode::Standard)
        .expect("Shakmaty should accept FEN");
    let shakmaty_cnt = perft_shakmaty(&oracle, depth);

    assert_eq!(
        arbitro_cnt, shakmaty_cnt,
        "Mismatch in {name} at depth {depth}"
    );
}

#[test]
fn perft_regression_starting_pos() {
    let pos = Position::new();
    let oracle = Chess::default();
    for depth in 1..=3u8 {
        let expected = perft_shakmaty(&oracle, depth);
        let got = perft(&pos, depth);
        assert_eq!(got, expected, "perft mismatch at depth {}", depth);
    }
    assert_eq!(perft(&Position::from_fen(START_FEN).unwrap(), 3), 8_902);
}

#[test]
fn perft_kiwipete() {
    run_perft_check(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        2,
        "Kiwipete",
    );
}

#[test]
fn perft_rook_endgame_en_passant() {
    run_perft_check("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3, "Position 3");
}

#[test]
fn perft_en_passant_discovered_check() {
    run_perft_check("8/8/8/k1pP4/8/8/8/4K3 w - c6 0 1", 3, "En Passant Discovered Check");
}

#[test]
fn perft_castling_prevented_by_attack() {
    run_perft_check("4k3/8/8/8/8/8/8/R3K2r w Q - 0 1", 2, "Castling in Check (Illegal)");
}

#[test]
fn perft_castling_through_check() {
    run_perft_check("4k3/8/8/8/8/5r2/8/R3K2R w KQ - 0 1", 2, "Castling Through Check");
}

#[test]
fn perft_promotion_capture() {
    run_perft_check("n1n5/P5P1/8/2k5/8/8/8/4K3 w - - 0 1", 2, "Promotion Capture");
}

#[test]
fn perft_double_check_response() {
    run_perft_check(
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        2,
        "Complex Check Response",
    );
}

#[test]
fn perft_rook_capture_drops_castling() {
    run_perft_check("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 3, "Rook Corners");
}
