//! Collision detection and response on the cell grid
//!
//! The ball moves in continuous coordinates but blocks and the paddle live on
//! whole cells, so tests here either compare against a row crossing (paddle)
//! or against the truncated cell the ball lands in (blocks).

use std::f32::consts::PI;

use glam::Vec2;

use super::state::{Block, Paddle, Playfield};
use crate::{cell_of, direction_from_angle};

/// Result of bouncing a candidate position off the playfield walls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallBounce {
    pub pos: Vec2,
    pub dir: Vec2,
}

/// Reflect off the side walls and the ceiling.
///
/// A candidate outside `[0, width)` flips `dir.x` and is clamped to
/// `[0, width - 1]`; a candidate above row 0 flips `dir.y` and is pinned to 0.
/// The floor is open.
pub fn bounce_off_walls(mut pos: Vec2, mut dir: Vec2, field: Playfield) -> WallBounce {
    let width = f32::from(field.width());
    if pos.x < 0.0 || pos.x >= width {
        dir.x = -dir.x;
        pos.x = pos.x.clamp(0.0, width - 1.0);
    }
    if pos.y < 0.0 {
        dir.y = -dir.y;
        pos.y = 0.0;
    }
    WallBounce { pos, dir }
}

/// Whether the ball moving from `prev_y` to `next` crosses onto the paddle row
/// this tick, over the paddle.
pub fn crosses_paddle(prev_y: f32, next: Vec2, paddle: &Paddle) -> bool {
    prev_y < paddle.y && next.y >= paddle.y && paddle.spans(next.x)
}

/// Outgoing direction after striking the paddle at horizontal position `x`.
///
/// The hit point `h` runs 0..1 across the paddle and maps to an angle of
/// π/4..3π/4 above the horizontal. The horizontal component is `cos θ`
/// scaled by −1 on the left half and +1 on the right half, so both halves
/// return the ball up and to the left, mirrored about the center: shallow at
/// the edges, vertical in the middle.
pub fn paddle_deflection(x: f32, paddle: &Paddle) -> Vec2 {
    let h = ((x - paddle.x) / f32::from(paddle.size)).clamp(0.0, 1.0);
    let theta = PI * (0.25 + 0.5 * h);
    let sign = if h < 0.5 { -1.0 } else { 1.0 };
    let dir = direction_from_angle(theta);
    Vec2::new(dir.x * sign, dir.y)
}

/// Index of the first live block covering the ball's cell, in iteration order
pub fn first_block_hit(blocks: &[Block], pos: Vec2) -> Option<usize> {
    let (col, row) = cell_of(pos);
    blocks.iter().position(|b| !b.hit && b.covers(col, row))
}
