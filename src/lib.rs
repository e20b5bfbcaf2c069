/// Forwards to the `log` facade when the `logging` feature is on.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        {
            log::$level!($($arg)*);
        }
        #[cfg(not(feature = "logging"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

pub mod board;
pub mod engine;

pub use board::{Board, Color, Coord, Figure, Move, Piece};
pub use engine::Engine;
