//! Block Breaker - a terminal Breakout game
//!
//! Core modules:
//! - `sim`: Simulation (paddle, ball, blocks, collisions, game state)
//! - `renderer`: Turns game state into terminal cells
//! - `platform`: Keyboard input and frame timing
//! - `settings`: User preferences loaded from JSON

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Paddle width in cells
    pub const PADDLE_SIZE: u16 = 10;
    /// Paddle speed (cells/s)
    pub const PADDLE_SPEED: f32 = 500.0;
    /// Paddle sits this many rows above the bottom edge
    pub const PADDLE_BOTTOM_GAP: u16 = 2;

    /// Ball speed (cells/s)
    pub const BALL_SPEED: f32 = 20.0;
    /// Ball animation glyphs, cycled in order
    pub const BALL_GLYPHS: [char; 4] = ['O', '@', '●', '*'];
    /// Ticks between ball glyph changes
    pub const BALL_FRAME_INTERVAL: u64 = 5;
    /// Full blink period of the ball color (ticks); first half is the primary color
    pub const BALL_BLINK_PERIOD: u64 = 10;

    /// Block grid layout
    pub const BLOCK_ROWS: u16 = 5;
    pub const BLOCK_WIDTH: u16 = 3;
    /// Row of the first block line (leaves room for the status line)
    pub const BLOCK_TOP_ROW: u16 = 3;
    /// Points per destroyed block
    pub const POINTS_PER_BLOCK: u64 = 10;

    pub const STARTING_LIVES: u8 = 3;

    /// Smallest playable terminal
    pub const MIN_WIDTH: u16 = 12;
    pub const MIN_HEIGHT: u16 = 12;

    /// Longest frame the simulation will integrate in one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    pub const PADDLE_GLYPH: char = '═';
    pub const BLOCK_GLYPH: char = '█';
}

/// Unit direction for an angle measured from the +x axis, counter-clockwise.
///
/// Screen rows grow downward, so "up" (positive sine) becomes a negative y.
#[inline]
pub fn direction_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), -theta.sin())
}

/// Angle of a screen-space direction, the inverse of [`direction_from_angle`]
#[cfg(test)]
pub(crate) fn angle_of_direction(dir: Vec2) -> f32 {
    (-dir.y).atan2(dir.x)
}

/// Integer cell containing a position (truncates toward zero)
#[inline]
pub fn cell_of(pos: Vec2) -> (i32, i32) {
    (pos.x as i32, pos.y as i32)
}
