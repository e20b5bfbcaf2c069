//! Change notifications emitted by a [`Board`](super::Board).
//!
//! Listeners are plain closures registered per notification kind. Delivery
//! is synchronous, on the calling thread, in registration order. A listener
//! must not call back into the board or engine that notified it.

use std::fmt;

use super::{Color, ColorSet, Coord, Figure, Move};

/// A square changed content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub coord: Coord,
    pub old: Figure,
    pub new: Figure,
}

/// The active player changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerChange {
    pub old: Color,
    pub new: Color,
}

/// A move was committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEvent {
    /// 1-based number of the move in the game history
    pub number: usize,
    pub mv: Move,
    /// Always false; undo is not supported
    pub undo: bool,
}

/// The set of colors in check was recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckChange {
    pub old: ColorSet,
    pub new: ColorSet,
}

/// Ordered fan-out of one notification kind.
pub(crate) struct Channel<E> {
    listeners: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Channel<E> {
    pub(crate) fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn emit(&mut self, event: &E) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl<E> Default for Channel<E> {
    fn default() -> Self {
        Channel {
            listeners: Vec::new(),
        }
    }
}

/// Every listener of one board.
#[derive(Default)]
pub(crate) struct Listeners {
    pub(crate) field: Channel<FieldChange>,
    pub(crate) player: Channel<PlayerChange>,
    pub(crate) moves: Channel<MoveEvent>,
    pub(crate) check: Channel<CheckChange>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("field", &self.field.len())
            .field("player", &self.player.len())
            .field("moves", &self.moves.len())
            .field("check", &self.check.len())
            .finish()
    }
}
