//! King cache, castling relocation and turn order.

use crate::board::{Board, BoardBuilder, Castling, Color, Coord, Figure, Piece};

fn sq(text: &str) -> Coord {
    Coord::parse(text)
}

#[test]
fn test_get_off_board_is_empty() {
    let board = BoardBuilder::starting_position().build();
    assert!(board.get(Coord::INVALID).is_empty());
    assert!(board.get(Coord::new(8, 0)).is_empty());
    assert!(board.get(Coord::new(40, 40)).is_empty());
}

#[test]
fn test_set_off_board_is_ignored() {
    let mut board = Board::new();
    board.set(Figure::new(Color::White, Piece::King), Coord::new(8, 0));
    assert_eq!(board.kings_position(Color::White), Coord::INVALID);
    assert!(Coord::all_valid().iter().all(|&c| board.get(c).is_empty()));
}

#[test]
fn test_king_cache_follows_king() {
    let mut board = Board::new();
    board.set(Figure::new(Color::Brown, Piece::King), sq("d5"));
    assert_eq!(board.kings_position(Color::Brown), sq("d5"));

    let mv = board.create_move(sq("d5"), sq("d6"));
    board.do_move(mv);
    assert_eq!(board.kings_position(Color::Brown), sq("d6"));
}

#[test]
fn test_captured_king_leaves_cache() {
    let mut board = BoardBuilder::new()
        .piece(sq("d5"), Color::Brown, Piece::King)
        .piece(sq("d7"), Color::White, Piece::Rook)
        .build();

    let mv = board.create_move(sq("d7"), sq("d5"));
    board.do_move(mv);
    assert_eq!(board.kings_position(Color::Brown), Coord::INVALID);
    assert!(board.get(sq("d5")).is(Color::White, Piece::Rook));
}

#[test]
fn test_turn_cycle() {
    let mut board = Board::new();
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(board.player());
        board.next_player();
    }
    assert_eq!(
        seen,
        vec![Color::White, Color::Brown, Color::Black, Color::White]
    );
}

#[test]
fn test_castling_moves_rook() {
    // (king from, king to, rook from, rook to)
    let lanes = [
        (Color::White, "a4", "a2", "a1", "a3"),
        (Color::White, "a4", "a7", "a8", "a6"),
        (Color::Brown, "j5", "l7", "m8", "k6"),
        (Color::Brown, "j5", "g2", "f1", "h3"),
        (Color::Black, "i13", "g13", "f13", "h13"),
        (Color::Black, "i13", "l13", "m13", "k13"),
    ];

    for (color, king_from, king_to, rook_from, rook_to) in lanes {
        let mut board = BoardBuilder::new()
            .piece(sq(king_from), color, Piece::King)
            .piece(sq(rook_from), color, Piece::Rook)
            .build();
        let mv = board.create_move(sq(king_from), sq(king_to));
        assert_ne!(mv.castling(), Castling::None, "{king_from}-{king_to}");

        board.do_move(mv);
        assert!(board.get(sq(king_to)).is(color, Piece::King));
        assert!(board.get(sq(rook_to)).is(color, Piece::Rook));
        assert!(board.get(sq(rook_from)).is_empty());
        assert!(board.get(sq(king_from)).is_empty());
        assert_eq!(board.kings_position(color), sq(king_to));
    }
}

#[test]
fn test_history_records_moves() {
    let mut board = BoardBuilder::starting_position().build();
    let first = board.create_move(sq("b1"), sq("c1"));
    board.do_move(first);
    let second = board.create_move(sq("e1"), sq("e2"));
    board.do_move(second);

    assert_eq!(board.moves(), &[first, second]);
    assert_eq!(board.last_move(), Some(&second));
}

#[test]
fn test_castling_rights_are_sticky() {
    let mut board = Board::new();
    board.disable_castling(Color::Black);
    board.disable_castling(Color::Black);
    assert!(board.is_castling_forbidden(Color::Black));
    assert_eq!(board.castling_forbidden().len(), 1);
}
