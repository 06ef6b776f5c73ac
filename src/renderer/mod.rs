//! Terminal rendering module
//!
//! `frame` composes cells from game state, `terminal` puts them on screen.

pub mod frame;
pub mod terminal;

pub use frame::{Cell, CellColor, Frame, compose};
pub use terminal::{Surface, TerminalSurface};
