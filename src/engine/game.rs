use std::fmt;

use crate::board::{Board, Color, Coord, Figure, Move};

use super::attacks::recompute_checks;
use super::rules::{is_valid_attack, is_valid_move};

/// Why a move was turned down by [`Engine::validate_move_or_attack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    SameSquare,
    OffBoard,
    NotPlayersFigure { figure: Figure, player: Color },
    OwnCapture,
    IllegalMove,
    IllegalAttack,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::SameSquare => write!(f, "source and destination are the same square"),
            Rejection::OffBoard => write!(f, "square is off the board"),
            Rejection::NotPlayersFigure { figure, player } => {
                write!(f, "figure {figure} does not belong to active player {player}")
            }
            Rejection::OwnCapture => write!(f, "cannot capture own figure"),
            Rejection::IllegalMove => write!(f, "figure cannot move there"),
            Rejection::IllegalAttack => write!(f, "figure cannot attack there"),
        }
    }
}

/// The rules engine: owns a board and drives it one turn at a time.
///
/// A move is validated, simulated on a listener-free copy and committed to
/// the real board only if it does not leave the mover in check. Rejected
/// moves change nothing and notify nobody.
#[derive(Debug, Default)]
pub struct Engine {
    board: Board,
}

impl Engine {
    /// An engine over an empty board; call [`start_game`](Self::start_game)
    /// to set up the pieces.
    #[must_use]
    pub fn new() -> Self {
        Engine {
            board: Board::new(),
        }
    }

    /// Drive an existing board. Its check set is recomputed.
    #[must_use]
    pub fn with_board(mut board: Board) -> Self {
        recompute_checks(&mut board);
        Engine { board }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access, e.g. to register listeners.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Clear the board and set up the standard position.
    pub fn start_game(&mut self) -> &mut Self {
        self.board.clear().setup();
        trace_event!(info, "new game started");
        self
    }

    /// Play the figure on `from` to `to`. See [`play_move`](Self::play_move).
    pub fn play(&mut self, from: Coord, to: Coord) -> bool {
        let mv = self.board.create_move(from, to);
        self.play_move(mv)
    }

    /// Play one turn. Returns `false`, leaving the board untouched, if the
    /// move is illegal or would leave the mover in check.
    ///
    /// On success the move is recorded, the turn passes to the next color,
    /// checks are recomputed and move listeners are notified.
    pub fn play_move(&mut self, mv: Move) -> bool {
        if let Err(rejection) = self.check_move(mv) {
            trace_event!(debug, "move {mv} rejected: {rejection}");
            return false;
        }
        let Figure::Occupied { color, piece } = mv.figure() else {
            return false;
        };

        let mut mv = mv;
        let disables = piece.affects_castling();
        if disables && !self.board.is_castling_forbidden(color) {
            mv = mv.with_disables_castling();
        }

        if self.exposes_king(mv, color) {
            trace_event!(debug, "move {mv} rejected: leaves {color} in check");
            return false;
        }

        if mv.disables_castling() {
            self.board.disable_castling(color);
            trace_event!(info, "castling disabled for {color}");
        }
        self.board.do_move(mv);
        self.board.next_player();
        recompute_checks(&mut self.board);
        self.board.notify_move();
        trace_event!(info, "{color} played {}", self.board.last_move_notation());
        true
    }

    /// Whether `mv` follows the rules for the active player, ignoring
    /// whether it would leave the mover in check. Does not change the board.
    #[must_use]
    pub fn validate_move_or_attack(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    fn check_move(&self, mv: Move) -> Result<(), Rejection> {
        if mv.from() == mv.to() {
            return Err(Rejection::SameSquare);
        }
        if !mv.from().is_valid() || !mv.to().is_valid() {
            return Err(Rejection::OffBoard);
        }
        let player = self.board.player();
        let figure = mv.figure();
        if figure.color() != Some(player) {
            return Err(Rejection::NotPlayersFigure { figure, player });
        }
        match mv.captured().color() {
            None if is_valid_move(&self.board, mv) => Ok(()),
            None => Err(Rejection::IllegalMove),
            Some(owner) if owner == player => Err(Rejection::OwnCapture),
            Some(_) if is_valid_attack(&self.board, mv) => Ok(()),
            Some(_) => Err(Rejection::IllegalAttack),
        }
    }

    /// Simulate `mv` on a copy and report whether `color` ends up in check.
    fn exposes_king(&self, mv: Move, color: Color) -> bool {
        let mut trial = self.board.copy_of();
        trial.do_move(mv);
        recompute_checks(&mut trial);
        trial.is_check(color)
    }

    /// Every move the active player may make this turn.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let player = self.board.player();
        let squares = Coord::all_valid();
        squares
            .iter()
            .filter(|&&from| self.board.get(from).color() == Some(player))
            .flat_map(|&from| {
                squares
                    .iter()
                    .map(move |&to| self.board.create_move(from, to))
            })
            .filter(|&mv| self.check_move(mv).is_ok() && !self.exposes_king(mv, player))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.board.is_check(color)
    }
}
