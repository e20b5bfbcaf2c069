//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Standard position, clearing and copying
//! - `state.rs` - King cache, castling relocation, turn order
//! - `events.rs` - Listener notifications from the board and engine
//! - `proptest.rs` - Property-based tests

mod state;
