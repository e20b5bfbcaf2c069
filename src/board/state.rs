use std::fmt;

use super::events::{CheckChange, FieldChange, Listeners, MoveEvent, PlayerChange};
use super::{CastlingGeometry, Color, ColorSet, Coord, Figure, Move, Piece, GRID_SIZE};

/// Back row of every color, from the king-side rook to the queen-side rook.
const HOME_PIECES: [Piece; 8] = [
    Piece::Rook,
    Piece::Bishop,
    Piece::Knight,
    Piece::King,
    Piece::Queen,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

const PAWNS_PER_COLOR: i32 = 9;

fn home_square(color: Color, i: i32) -> Coord {
    match color {
        Color::White => Coord::new(i, 0),
        Color::Brown => Coord::new(7 - i, 12 - i),
        Color::Black => Coord::new(12, 5 + i),
    }
}

fn pawn_square(color: Color, i: i32) -> Coord {
    match color {
        Color::White => Coord::new(i, 1),
        Color::Brown => Coord::new(i, 4 + i),
        Color::Black => Coord::new(11, 4 + i),
    }
}

/// The board: figures on a 13x13 backing grid (only valid cells are ever
/// written), the active player, castling rights, the check set, the king
/// cache and the move history.
///
/// Every mutation notifies the listeners registered for its kind.
pub struct Board {
    // grid[rank][file]
    pub(crate) grid: [[Figure; GRID_SIZE]; GRID_SIZE],
    pub(crate) player: Color,
    pub(crate) castling_forbidden: ColorSet,
    pub(crate) check: ColorSet,
    pub(crate) kings: [Coord; 3],
    pub(crate) moves: Vec<Move>,
    pub(crate) listeners: Listeners,
}

impl Board {
    /// An empty board with White to move and no kings.
    #[must_use]
    pub fn new() -> Self {
        Board {
            grid: [[Figure::Empty; GRID_SIZE]; GRID_SIZE],
            player: Color::White,
            castling_forbidden: ColorSet::empty(),
            check: ColorSet::empty(),
            kings: [Coord::INVALID; 3],
            moves: Vec::new(),
            listeners: Listeners::default(),
        }
    }

    /// An independent copy of the position and history, without listeners.
    #[must_use]
    pub fn copy_of(&self) -> Board {
        Board {
            grid: self.grid,
            player: self.player,
            castling_forbidden: self.castling_forbidden,
            check: self.check,
            kings: self.kings,
            moves: self.moves.clone(),
            listeners: Listeners::default(),
        }
    }

    /// The standard three-sided starting position.
    pub fn standard_position() -> impl Iterator<Item = (Coord, Figure)> {
        Color::ALL.into_iter().flat_map(|color| {
            let back_row = HOME_PIECES
                .iter()
                .enumerate()
                .map(move |(i, &piece)| (home_square(color, i as i32), Figure::new(color, piece)));
            let pawns = (0..PAWNS_PER_COLOR)
                .map(move |i| (pawn_square(color, i), Figure::new(color, Piece::Pawn)));
            back_row.chain(pawns)
        })
    }

    #[inline]
    fn cell(coord: Coord) -> (usize, usize) {
        (coord.rank() as usize, coord.file() as usize)
    }

    /// Content of a square; off-board coordinates are always empty.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Figure {
        if !coord.is_valid() {
            return Figure::Empty;
        }
        let (rank, file) = Self::cell(coord);
        self.grid[rank][file]
    }

    /// Put a figure on a square. Off-board coordinates are ignored.
    ///
    /// Placing a king updates the king cache; overwriting the cached king
    /// clears its entry.
    pub fn set(&mut self, figure: Figure, coord: Coord) -> &mut Self {
        if !coord.is_valid() {
            return self;
        }
        let (rank, file) = Self::cell(coord);
        let old = std::mem::replace(&mut self.grid[rank][file], figure);

        if let Figure::Occupied {
            color,
            piece: Piece::King,
        } = old
        {
            if self.kings[color.index()] == coord {
                self.kings[color.index()] = Coord::INVALID;
            }
        }
        if let Figure::Occupied {
            color,
            piece: Piece::King,
        } = figure
        {
            self.kings[color.index()] = coord;
        }

        self.listeners.field.emit(&FieldChange {
            coord,
            old,
            new: figure,
        });
        self
    }

    #[inline]
    #[must_use]
    pub fn player(&self) -> Color {
        self.player
    }

    pub fn set_player(&mut self, player: Color) -> &mut Self {
        let old = self.player;
        self.player = player;
        self.listeners.player.emit(&PlayerChange { old, new: player });
        self
    }

    /// Pass the turn: White, Brown, Black, White, ...
    pub fn next_player(&mut self) -> &mut Self {
        self.set_player(self.player.next())
    }

    /// Where the king of `color` stands, or the invalid coordinate.
    #[inline]
    #[must_use]
    pub fn kings_position(&self, color: Color) -> Coord {
        self.kings[color.index()]
    }

    /// Replace the check set.
    pub fn set_check(&mut self, colors: ColorSet) -> &mut Self {
        let old = self.check;
        self.check = colors;
        self.listeners.check.emit(&CheckChange { old, new: colors });
        self
    }

    #[inline]
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.check.contains(color)
    }

    #[inline]
    #[must_use]
    pub fn check(&self) -> ColorSet {
        self.check
    }

    pub fn disable_castling(&mut self, color: Color) -> &mut Self {
        self.castling_forbidden.insert(color);
        self
    }

    #[inline]
    #[must_use]
    pub fn is_castling_forbidden(&self, color: Color) -> bool {
        self.castling_forbidden.contains(color)
    }

    #[inline]
    #[must_use]
    pub fn castling_forbidden(&self) -> ColorSet {
        self.castling_forbidden
    }

    /// Moves played so far, oldest first.
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// A move from `from` to `to` built from the current square contents.
    #[must_use]
    pub fn create_move(&self, from: Coord, to: Coord) -> Move {
        Move::new(from, self.get(from), to, self.get(to))
    }

    /// Apply a move without any legality check and append it to the history.
    ///
    /// Castling moves also relocate the rook of the castling lane.
    pub fn do_move(&mut self, mv: Move) -> &mut Self {
        self.set(mv.figure(), mv.to());
        self.set(Figure::Empty, mv.from());

        if let Some(color) = mv.figure().color() {
            if let Some(&lane) = CastlingGeometry::of(color).lane(mv.castling()) {
                self.set(Figure::new(color, Piece::Rook), lane.rook_to);
                self.set(Figure::Empty, lane.rook_from);
            }
        }

        self.moves.push(mv);
        self
    }

    /// Tell move listeners about the last move in the history.
    pub(crate) fn notify_move(&mut self) {
        if let Some(&mv) = self.moves.last() {
            let event = MoveEvent {
                number: self.moves.len(),
                mv,
                undo: false,
            };
            self.listeners.moves.emit(&event);
        }
    }

    /// Empty every valid square and forget the kings.
    pub fn clear(&mut self) -> &mut Self {
        for &coord in Coord::all_valid() {
            self.set(Figure::Empty, coord);
        }
        self.kings = [Coord::INVALID; 3];
        self
    }

    /// Place the standard position and reset history, rights, check set and
    /// turn. Call on a cleared board.
    pub fn setup(&mut self) -> &mut Self {
        for (coord, figure) in Self::standard_position() {
            self.set(figure, coord);
        }
        self.moves.clear();
        self.castling_forbidden = ColorSet::empty();
        self.set_check(ColorSet::empty());
        self.set_player(Color::White);
        trace_event!(debug, "board set up with the standard position");
        self
    }

    /// Re-announce every valid square's content to the field listeners.
    pub fn refresh(&mut self) -> &mut Self {
        for &coord in Coord::all_valid() {
            let event = FieldChange {
                coord,
                old: Figure::Empty,
                new: self.get(coord),
            };
            self.listeners.field.emit(&event);
        }
        self
    }

    pub fn on_field_change(&mut self, listener: impl FnMut(&FieldChange) + 'static) -> &mut Self {
        self.listeners.field.subscribe(listener);
        self
    }

    pub fn on_player_change(
        &mut self,
        listener: impl FnMut(&PlayerChange) + 'static,
    ) -> &mut Self {
        self.listeners.player.subscribe(listener);
        self
    }

    pub fn on_move(&mut self, listener: impl FnMut(&MoveEvent) + 'static) -> &mut Self {
        self.listeners.moves.subscribe(listener);
        self
    }

    pub fn on_check_change(&mut self, listener: impl FnMut(&CheckChange) + 'static) -> &mut Self {
        self.listeners.check.subscribe(listener);
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("player", &self.player)
            .field("check", &self.check)
            .field("castling_forbidden", &self.castling_forbidden)
            .field("kings", &self.kings)
            .field("moves", &self.moves.len())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
