//! Per-tick simulation
//!
//! Advances paddle and ball by a variable dt and resolves collisions.

use super::collision::{bounce_off_walls, crosses_paddle, first_block_hit, paddle_deflection};
use super::rng::{RandomSource, launch_direction};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Horizontal paddle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub direction: Direction,
}

/// Advance the game by `dt` seconds.
///
/// Finished games are left untouched. Returns what happened this tick. The
/// animation counter is not advanced here; see [`GameState::advance_animation`].
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    if state.is_finished() {
        return Vec::new();
    }

    state.update_paddle(input.direction, dt);
    state.update_ball(dt, rng)
}

impl GameState {
    /// Move the paddle `PADDLE_SPEED * dt` cells in `direction`
    pub fn update_paddle(&mut self, direction: Direction, dt: f32) {
        let amount = self.paddle.speed * dt;
        match direction {
            Direction::Left => self.paddle.shift(-amount, self.field),
            Direction::Right => self.paddle.shift(amount, self.field),
            Direction::None => {}
        }
    }

    /// Move the ball and resolve walls, paddle, floor and blocks, in that order
    pub fn update_ball(&mut self, dt: f32, rng: &mut impl RandomSource) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.ball.anim_ticks % BALL_FRAME_INTERVAL == 0 {
            self.ball.advance_frame();
        }

        let prev_y = self.ball.pos.y;
        let candidate = self.ball.pos + self.ball.dir * self.ball.speed * dt;
        let bounced = bounce_off_walls(candidate, self.ball.dir, self.field);
        let mut next = bounced.pos;
        self.ball.dir = bounced.dir;

        if crosses_paddle(prev_y, next, &self.paddle) {
            self.ball.dir = paddle_deflection(next.x, &self.paddle);
            // Keep the ball out of the paddle row
            next.y = self.paddle.y - 1.0;
            events.push(GameEvent::PaddleHit);
        } else if next.y >= f32::from(self.field.height()) {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.phase = GamePhase::GameOver;
                log::info!("Game over with score {}", self.score);
                events.push(GameEvent::GameOver);
                return events;
            }

            self.ball.pos = self.paddle.serve_point();
            self.ball.dir = launch_direction(rng);
            log::debug!("Ball lost, {} lives left", self.lives);
            events.push(GameEvent::LifeLost {
                lives_left: self.lives,
            });
            return events;
        }

        self.ball.pos = next;

        if let Some(idx) = first_block_hit(&self.blocks, self.ball.pos) {
            let block = &mut self.blocks[idx];
            block.hit = true;
            self.score += POINTS_PER_BLOCK;
            self.ball.dir.y = -self.ball.dir.y;
            events.push(GameEvent::BlockDestroyed {
                x: block.x,
                y: block.y,
            });
        }

        if self.blocks_remaining() == 0 {
            self.phase = GamePhase::Won;
            log::info!("All blocks cleared with score {}", self.score);
            events.push(GameEvent::Won);
        }

        events
    }
}
