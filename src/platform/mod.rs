//! Platform layer
//!
//! Everything that touches the real world besides drawing:
//! - Keyboard input
//! - Wall-clock time between ticks

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{Command, poll_command};
