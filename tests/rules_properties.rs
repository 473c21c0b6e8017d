use arbitro::{Color, Engine, GameCondition, Piece, PieceKind, Position, Square, START_FEN};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(pos: &mut Position, moves: &[&str]) {
    for m in moves {
        let (from, to) = m.split_at(2);
        assert!(pos.apply_move(sq(from), sq(to)), "move {m} rejected in {}", pos.to_fen());
    }
}

#[test]
fn initial_setup_matches_standard_array() {
    let engine = Engine::new();
    let rows = engine.board().rows();
    let back = "rnbqkbnr";
    for (col, ch) in back.chars().enumerate() {
        assert_eq!(rows[0][col], Piece::from_fen_char(ch));
        assert_eq!(rows[7][col], Piece::from_fen_char(ch.to_ascii_uppercase()));
        assert_eq!(rows[1][col], Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(rows[6][col], Some(Piece::new(Color::White, PieceKind::Pawn)));
    }
    let empty = rows[2..6].iter().flatten().filter(|c| c.is_none()).count();
    assert_eq!(empty, 32);
    assert_eq!(engine.turn(), Color::White);
    assert_eq!(engine.fen(), START_FEN);
}

// Deterministic pseudo-random playout: checks turn alternation and legality closure at every ply
#[test]
fn playouts_alternate_turns_and_never_expose_the_king() {
    for seed in [1usize, 7, 13, 29] {
        let mut pos = Position::new();
        for ply in 0..80usize {
            let moves = pos.legal_moves();
            if moves.is_empty() {
                assert!(pos.is_checkmate() || pos.is_stalemate());
                break;
            }
            let mover = pos.turn;
            for &(from, to) in &moves {
                let mut child = pos.clone();
                assert!(child.apply_move(from, to));
                assert!(
                    !child.board.is_king_attacked(mover),
                    "{}{} leaves the king attacked in {}",
                    from,
                    to,
                    pos.to_fen()
                );
            }
            let (from, to) = moves[(ply * seed + seed) % moves.len()];
            assert!(pos.apply_move(from, to));
            assert_eq!(pos.turn, mover.opposite());
        }
    }
}

#[test]
fn en_passant_takes_the_pawn_that_passed() {
    let mut pos = Position::new();
    // White pawn reaches e5; Black first moves a far pawn, then d7-d5 lands beside it
    play(&mut pos, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(pos.en_passant, Some(sq("d6")));
    assert_eq!(pos.to_fen(), "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");

    play(&mut pos, &["e5d6"]);
    assert_eq!(pos.piece_at(sq("d5")), None);
    assert_eq!(pos.piece_at(sq("e5")), None);
    assert_eq!(pos.piece_at(sq("d6")), Some(Piece::new(Color::White, PieceKind::Pawn)));
    // Neighbouring black pawns are untouched
    for s in ["c7", "e7", "a6"] {
        assert_eq!(pos.piece_at(sq(s)), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    }
    assert_eq!(pos.en_passant, None);
}

#[test]
fn castling_is_atomic() {
    let mut pos = Position::new();
    play(&mut pos, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);
    assert!(pos.available_moves(sq("e1")).contains(&sq("g1")));
    play(&mut pos, &["e1g1"]);
    assert_eq!(pos.piece_at(sq("g1")), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(pos.piece_at(sq("f1")), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(pos.piece_at(sq("h1")), None);
    assert_eq!(pos.piece_at(sq("e1")), None);
    assert!(!pos.castling.white_king_side && !pos.castling.white_queen_side);
    assert!(pos.to_fen().contains(" b kq - "));
}

#[test]
fn fools_mate_through_engine() {
    let mut engine = Engine::new();
    assert!(engine.apply_move((6, 5), 5, 5)); // f2-f3
    assert!(engine.apply_move((1, 4), 3, 4)); // e7-e5
    assert!(engine.apply_move((6, 6), 4, 6)); // g2-g4
    assert!(engine.apply_move((0, 3), 4, 7)); // Qd8-h4
    assert_eq!(engine.turn(), Color::White);
    assert!(engine.is_in_check());
    assert!(engine.is_checkmate());
    assert!(!engine.is_stalemate());
    assert_eq!(engine.game_condition(), GameCondition::Checkmate);
}

#[test]
fn promotion_by_push_and_capture_is_a_queen() {
    for (fen, mv, color) in [
        ("3qk3/2P5/8/8/8/8/8/4K3 w - - 0 1", "c7c8", Color::White),
        ("3qk3/2P5/8/8/8/8/8/4K3 w - - 0 1", "c7d8", Color::White),
        ("4k3/8/8/8/8/8/5p2/K5N1 b - - 0 1", "f2g1", Color::Black),
    ] {
        let mut pos = Position::from_fen(fen).unwrap();
        play(&mut pos, &[mv]);
        let to = sq(&mv[2..]);
        assert_eq!(pos.piece_at(to), Some(Piece::new(color, PieceKind::Queen)), "{fen} {mv}");
        assert_eq!(pos.halfmove_clock, 0);
    }
}

#[test]
fn rejected_move_keeps_clock_and_fen() {
    let mut engine = Engine::new();
    assert!(engine.apply_move((7, 6), 5, 5)); // Ng1-f3, halfmove 1
    let before = engine.fen();
    // Black tries to move a White piece, an empty square, then an impossible pawn jump
    assert!(!engine.apply_move((5, 5), 3, 4));
    assert!(!engine.apply_move((4, 4), 3, 4));
    assert!(!engine.apply_move((1, 4), 4, 4));
    assert_eq!(engine.fen(), before);
    assert!(before.ends_with(" 1 1"));
}

#[test]
fn generation_order_is_stable() {
    let pos = Position::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").unwrap();
    let first = pos.available_moves(sq("d4"));
    let second = pos.available_moves(sq("d4"));
    assert_eq!(first, second);
    assert_eq!(first.len(), 27);
    // Rook rays first (north along the file), bishop rays after
    assert_eq!(first[0], sq("d5"));
    assert_eq!(*first.last().unwrap(), sq("g1"));
}
