//! Game rules exercised through the public API.

use tri_chess::board::{BoardBuilder, Castling, Color, Coord, Figure, Move, Piece};
use tri_chess::engine::attacks::{attacks, attacks_jump, attacks_straight};
use tri_chess::engine::rules::is_valid_attack;
use tri_chess::engine::Engine;

fn sq(text: &str) -> Coord {
    Coord::parse(text)
}

fn sorted(mut squares: Vec<Coord>) -> Vec<Coord> {
    squares.sort_by_key(|c| (c.rank(), c.file()));
    squares
}

/// Kings of all three colors on their home squares plus `extra`.
fn position(extra: &[(&str, Color, Piece)]) -> BoardBuilder {
    let mut builder = BoardBuilder::new()
        .piece(sq("a4"), Color::White, Piece::King)
        .piece(sq("j5"), Color::Brown, Piece::King)
        .piece(sq("i13"), Color::Black, Piece::King);
    for &(name, color, piece) in extra {
        builder = builder.piece(sq(name), color, piece);
    }
    builder
}

#[test]
fn knight_attack_from_f4_to_d5() {
    let board = BoardBuilder::new()
        .piece(sq("f4"), Color::White, Piece::Knight)
        .build();
    let knight = board.get(sq("f4"));
    assert!(is_valid_attack(
        &board,
        Move::new(sq("f4"), knight, sq("d5"), Figure::Empty)
    ));
}

#[test]
fn jump_attackers_of_d5() {
    let ring = [
        "e3", "f4", "g6", "g7", "f8", "e8", "c7", "b6", "a4", "a3", "b2", "c2",
    ];
    let board = ring
        .iter()
        .fold(BoardBuilder::new(), |b, &name| {
            b.piece(sq(name), Color::White, Piece::Knight)
        })
        .build();

    let expected = sorted(ring.iter().map(|&name| sq(name)).collect());
    assert_eq!(sorted(attacks_jump(&board, Color::Black, sq("d5"))), expected);
}

#[test]
fn jump_attackers_ignore_non_neighbours() {
    let board = BoardBuilder::new()
        .piece(sq("e2"), Color::White, Piece::Knight)
        .build();
    assert!(attacks_jump(&board, Color::Black, sq("d5")).is_empty());
}

#[test]
fn straight_attacker_of_d5() {
    let board = BoardBuilder::new()
        .piece(sq("f5"), Color::White, Piece::Rook)
        .build();
    assert_eq!(attacks_straight(&board, Color::Black, sq("d5")), vec![sq("f5")]);
}

#[test]
fn start_game_state() {
    let mut engine = Engine::new();
    engine.start_game();
    let board = engine.board();

    assert_eq!(board.player(), Color::White);
    for color in Color::ALL {
        assert!(!engine.is_check(color));
        assert!(!board.is_castling_forbidden(color));
    }
    assert_eq!(board.kings_position(Color::White), sq("a4"));
    assert_eq!(board.kings_position(Color::Brown), sq("j5"));
    assert_eq!(board.kings_position(Color::Black), sq("i13"));
}

#[test]
fn pawn_double_step() {
    let mut engine = Engine::new();
    engine.start_game();
    assert!(engine.play(sq("b1"), sq("d1")));
    assert!(engine.board().get(sq("d1")).is(Color::White, Piece::Pawn));
    assert_eq!(engine.board().last_move_notation(), "b1d1");

    let mut blocked = Engine::new();
    blocked.start_game();
    blocked
        .board_mut()
        .set(Figure::new(Color::Brown, Piece::Knight), sq("c1"));
    assert!(!blocked.play(sq("b1"), sq("d1")));
    assert!(blocked.board().moves().is_empty());
}

#[test]
fn each_color_moves_in_turn() {
    let mut engine = Engine::new();
    engine.start_game();
    assert!(engine.play(sq("b1"), sq("c1")));
    assert!(engine.play(sq("e1"), sq("e2")));
    assert!(engine.play(sq("e12"), sq("e11")));
    assert_eq!(engine.board().player(), Color::White);
    assert_eq!(engine.board().moves().len(), 3);
}

#[test]
fn castling_king_side() {
    let board = position(&[("a1", Color::White, Piece::Rook)]).build();
    let mut engine = Engine::with_board(board);

    assert!(engine.play(sq("a4"), sq("a2")));
    let board = engine.board();
    assert!(board.get(sq("a2")).is(Color::White, Piece::King));
    assert!(board.get(sq("a3")).is(Color::White, Piece::Rook));
    assert!(board.get(sq("a1")).is_empty());
    assert!(board.is_castling_forbidden(Color::White));

    let last = board.last_move().copied();
    assert_eq!(last.map(|mv| mv.castling()), Some(Castling::KingSide));
    assert!(last.is_some_and(|mv| mv.disables_castling()));
}

#[test]
fn castling_queen_side_for_black() {
    let board = position(&[("m13", Color::Black, Piece::Rook)])
        .player(Color::Black)
        .build();
    let mut engine = Engine::with_board(board);

    assert!(engine.play(sq("i13"), sq("l13")));
    assert!(engine.board().get(sq("k13")).is(Color::Black, Piece::Rook));
    assert_eq!(engine.board().kings_position(Color::Black), sq("l13"));
}

#[test]
fn castling_refused() {
    // Rights already gone.
    let board = position(&[("a1", Color::White, Piece::Rook)])
        .forbid_castling(Color::White)
        .build();
    assert!(!Engine::with_board(board).play(sq("a4"), sq("a2")));

    // Path square a3 attacked.
    let board = position(&[
        ("a1", Color::White, Piece::Rook),
        ("h3", Color::Black, Piece::Rook),
    ])
    .build();
    assert!(!Engine::with_board(board).play(sq("a4"), sq("a2")));

    // King in check.
    let board = position(&[
        ("a1", Color::White, Piece::Rook),
        ("a8", Color::Black, Piece::Rook),
    ])
    .build();
    let mut engine = Engine::with_board(board);
    assert!(engine.is_check(Color::White));
    assert!(!engine.play(sq("a4"), sq("a2")));

    // No rook to castle with.
    let board = position(&[]).build();
    assert!(!Engine::with_board(board).play(sq("a4"), sq("a2")));
}

#[test]
fn capture_and_check_notation() {
    let board = position(&[
        ("d5", Color::White, Piece::Queen),
        ("d7", Color::Brown, Piece::Pawn),
    ])
    .build();
    let mut engine = Engine::with_board(board);
    assert!(engine.play(sq("d5"), sq("d7")));
    assert_eq!(engine.board().last_move_notation(), "Dd5xd7");
    assert!(engine.board().last_move().is_some_and(|mv| mv.is_capture()));

    let board = position(&[("b6", Color::White, Piece::Rook)]).build();
    let mut engine = Engine::with_board(board);
    assert!(engine.play(sq("b6"), sq("b5")));
    assert!(engine.is_check(Color::Brown));
    assert_eq!(engine.board().last_move_notation(), "Tb6b5+");
}

#[test]
fn move_leaving_check_unresolved_is_rejected() {
    let board = position(&[
        ("b6", Color::White, Piece::Rook),
        ("f2", Color::Brown, Piece::Pawn),
    ])
    .build();
    let mut engine = Engine::with_board(board);
    assert!(engine.play(sq("b6"), sq("b5")));
    assert!(engine.is_check(Color::Brown));

    let pawn_step = engine.board().create_move(sq("f2"), sq("f3"));
    assert!(engine.validate_move_or_attack(pawn_step));
    let before = engine.board().snapshot();
    assert!(!engine.play_move(pawn_step));
    assert_eq!(engine.board().snapshot(), before);

    assert!(engine.play(sq("j5"), sq("j6")));
    assert!(!engine.is_check(Color::Brown));
    assert_eq!(engine.board().player(), Color::Black);
}

#[test]
fn attacks_on_invalid_square_are_empty() {
    let board = BoardBuilder::starting_position().build();
    assert!(attacks(&board, Color::White, Coord::INVALID).is_empty());
    assert!(attacks(&board, Color::White, sq("zz")).is_empty());
}
