//! Make/unmake state-restoration tests.

use crate::board::{Board, Color, Move, Piece, Square};
use rand::prelude::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Positions exercising every special-move path.
const ROUND_TRIP_POSITIONS: &[&str] = &[
    Board::STARTING_FEN,
    // En passant available
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    // Both sides may castle both ways
    "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
    // Promotions, including captures
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    // Middlegame tangle
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
];

#[test]
fn test_every_legal_move_round_trips_the_fen() {
    for fen in ROUND_TRIP_POSITIONS {
        let mut board = Board::from_fen(fen);
        let before = board.to_fen();
        for mv in board.legal_moves() {
            board.make_move(mv);
            board.undo_move();
            assert_eq!(
                board.to_fen(),
                before,
                "state not restored after {mv} in {fen}"
            );
        }
    }
}

#[test]
fn test_hash_restored_and_consistent() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = board.hash();

    for mv in board.legal_moves() {
        board.make_move(mv);
        assert_eq!(board.hash(), board.position_hash());
        board.undo_move();
        assert_eq!(board.hash(), original);
    }
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let mut initial: Vec<String> = board.legal_moves().iter().map(Move::to_string).collect();
    initial.sort();

    for mv in board.legal_moves() {
        board.make_move(mv);
        board.undo_move();
    }

    let mut after: Vec<String> = board.legal_moves().iter().map(Move::to_string).collect();
    after.sort();
    assert_eq!(initial, after);
}

#[test]
fn test_random_playout_round_trips_everything() {
    let mut board = Board::new();
    let initial_fen = board.to_fen();
    let initial_hash = board.hash();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut made = 0;
    for _ in 0..200 {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.make_move(mv);
        made += 1;
        assert_eq!(board.history_len(), made);
    }

    while board.undo_move().is_some() {}

    assert_eq!(board.to_fen(), initial_fen);
    assert_eq!(board.hash(), initial_hash);
    assert_eq!(board.history_len(), 0);
}

#[test]
fn test_undo_returns_moves_in_reverse_order() {
    let mut board = Board::new();
    let mut played = Vec::new();
    for notation in ["e2e4", "e7e5", "g1f3", "b8c6"] {
        played.push(board.make_move_uci(notation).unwrap());
    }

    while let Some(undone) = board.undo_move() {
        assert_eq!(undone, played.pop().unwrap());
    }
    assert!(played.is_empty());
}

#[test]
fn test_en_passant_round_trip_restores_target() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let mv = board
        .legal_moves()
        .into_iter()
        .find(|m| m.is_en_passant())
        .unwrap();

    board.make_move(mv);
    assert_eq!(board.en_passant_target(), None);
    board.undo_move();
    assert_eq!(board.en_passant_target(), Some(sq("f6")));
    assert_eq!(board.piece_at(sq("f5")), Some((Color::Black, Piece::Pawn)));
}
