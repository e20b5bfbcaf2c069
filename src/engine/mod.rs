//! Move legality, attack detection and turn handling.
//!
//! [`Engine`] drives a [`Board`](crate::board::Board) through the turn
//! protocol: validate, simulate on a copy, commit. The rule predicates and
//! attack scans it uses are exposed in [`rules`] and [`attacks`] so callers
//! can build on them without playing a move.

pub mod attacks;
mod game;
pub mod rules;

pub use game::Engine;
