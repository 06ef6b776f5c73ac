//! Simulation module
//!
//! All gameplay logic lives here:
//! - Time comes in as dt, never read from a clock
//! - Randomness comes in through `RandomSource`
//! - Stable iteration order (blocks stay in generation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_walls, crosses_paddle, first_block_hit, paddle_deflection};
pub use grid::generate_blocks;
pub use rng::{RandomSource, SequenceRandom, launch_direction};
pub use state::{Ball, Block, BlockColor, GameEvent, GamePhase, GameState, Paddle, Playfield};
pub use tick::{Direction, TickInput, tick};
