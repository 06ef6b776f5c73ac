//! Game state and core simulation types

use glam::Vec2;

use super::grid::generate_blocks;
use crate::consts::*;
use crate::error::Error;
use crate::{cell_of, direction_from_angle};

/// Playfield dimensions in character cells, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    width: u16,
    height: u16,
}

impl Playfield {
    /// Validate a terminal size as a playfield
    pub fn new(width: u16, height: u16) -> Result<Self, Error> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(Error::PlayfieldTooSmall {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether a signed cell coordinate lies on the playfield
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Out of lives
    GameOver,
    /// Every block destroyed
    Won,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PaddleHit,
    BlockDestroyed { x: u16, y: u16 },
    LifeLost { lives_left: u8 },
    GameOver,
    Won,
}

/// Block color, cycled by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColor {
    Cyan,
    Blue,
    Magenta,
}

impl BlockColor {
    pub fn for_row(row: u16) -> Self {
        match row % 3 {
            0 => BlockColor::Cyan,
            1 => BlockColor::Blue,
            _ => BlockColor::Magenta,
        }
    }
}

/// A destructible block occupying `width` cells of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub color: BlockColor,
    pub hit: bool,
}

impl Block {
    /// Whether the cell (col, row) is covered by this block
    pub fn covers(&self, col: i32, row: i32) -> bool {
        let x = i32::from(self.x);
        row == i32::from(self.y) && col >= x && col < x + i32::from(self.width)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge (cells)
    pub x: f32,
    /// Row
    pub y: f32,
    /// Width in cells
    pub size: u16,
    /// Cells per second
    pub speed: f32,
}

impl Paddle {
    /// Centered horizontally, `PADDLE_BOTTOM_GAP` rows above the bottom
    pub fn new(field: Playfield) -> Self {
        Self {
            x: f32::from(field.width() - PADDLE_SIZE) / 2.0,
            y: f32::from(field.height() - PADDLE_BOTTOM_GAP),
            size: PADDLE_SIZE,
            speed: PADDLE_SPEED,
        }
    }

    /// Largest legal x for the left edge
    #[inline]
    pub fn max_x(&self, field: Playfield) -> f32 {
        f32::from(field.width() - self.size)
    }

    /// Whether a horizontal position is over the paddle (left edge inclusive)
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x >= self.x && x < self.x + f32::from(self.size)
    }

    /// Move by `delta` cells, clamped to the playfield
    pub fn shift(&mut self, delta: f32, field: Playfield) {
        self.x = (self.x + delta).clamp(0.0, self.max_x(field));
    }

    /// Spot one row above the paddle's middle where a new ball is served
    pub fn serve_point(&self) -> Vec2 {
        Vec2::new(self.x + f32::from(self.size / 2), self.y - 1.0)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
    /// Cells per second
    pub speed: f32,
    /// Index into `BALL_GLYPHS`
    pub frame: usize,
    /// Ticks simulated so far, drives glyph animation and blink
    pub anim_ticks: u64,
}

impl Ball {
    /// Centered above the paddle, heading up and to the right at 45°
    pub fn new(field: Playfield, paddle: &Paddle) -> Self {
        Self {
            pos: Vec2::new(f32::from(field.width()) / 2.0, paddle.y - 1.0),
            dir: direction_from_angle(std::f32::consts::FRAC_PI_4),
            speed: BALL_SPEED,
            frame: 0,
            anim_ticks: 0,
        }
    }

    pub fn glyph(&self) -> char {
        BALL_GLYPHS[self.frame % BALL_GLYPHS.len()]
    }

    pub fn advance_frame(&mut self) {
        self.frame = (self.frame + 1) % BALL_GLYPHS.len();
    }

    /// Cell the ball is drawn in
    pub fn cell(&self) -> (i32, i32) {
        cell_of(self.pos)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub field: Playfield,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major, in generation order
    pub blocks: Vec<Block>,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
}

impl GameState {
    /// Create a fresh game on the given playfield
    pub fn new(field: Playfield) -> Self {
        let paddle = Paddle::new(field);
        let ball = Ball::new(field, &paddle);
        Self {
            field,
            paddle,
            ball,
            blocks: generate_blocks(field.width()),
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Playing,
        }
    }

    /// Start over on the same playfield
    pub fn reset(&mut self) {
        *self = Self::new(self.field);
        log::info!("Game reset on {}x{}", self.field.width(), self.field.height());
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Game over or won; no further simulation happens
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    pub fn blocks_remaining(&self) -> usize {
        self.blocks.iter().filter(|b| !b.hit).count()
    }

    /// Step the ball's animation counter once the frame has been drawn.
    /// Frozen once the game is finished.
    pub fn advance_animation(&mut self) {
        if !self.is_finished() {
            self.ball.anim_ticks += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(30, 20).unwrap()
    }

    #[test]
    fn test_playfield_minimum() {
        assert!(Playfield::new(12, 12).is_ok());
        assert!(matches!(
            Playfield::new(11, 40),
            Err(Error::PlayfieldTooSmall { width: 11, .. })
        ));
        assert!(Playfield::new(80, 5).is_err());
    }

    #[test]
    fn test_smallest_playfield_builds_a_game() {
        let field = Playfield::new(MIN_WIDTH, MIN_HEIGHT).unwrap();
        assert_eq!((field.width(), field.height()), (12, 12));
        let state = GameState::new(field);
        assert_eq!(state.paddle.x, 1.0);
        assert_eq!(state.paddle.y, 10.0);
        assert_eq!(state.paddle.max_x(field), 2.0);
        assert_eq!(state.blocks.len(), 20);
    }

    #[test]
    fn test_advance_animation_stops_when_finished() {
        let mut state = GameState::new(field());
        state.advance_animation();
        state.advance_animation();
        assert_eq!(state.ball.anim_ticks, 2);

        state.phase = GamePhase::Won;
        state.advance_animation();
        assert_eq!(state.ball.anim_ticks, 2);
    }

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(field());
        assert_eq!(state.paddle.x, 10.0);
        assert_eq!(state.paddle.y, 18.0);
        assert_eq!(state.ball.pos, Vec2::new(15.0, 17.0));
        assert!(state.ball.dir.x > 0.0 && state.ball.dir.y < 0.0);
        assert!((state.ball.dir.x + state.ball.dir.y).abs() < 1e-6);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.blocks.len(), 50);
    }

    #[test]
    fn test_reset_restores_everything_but_the_field() {
        let mut state = GameState::new(field());
        state.score = 120;
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        state.blocks[3].hit = true;
        state.paddle.x = 0.0;
        state.ball.anim_ticks = 99;

        state.reset();
        assert_eq!(state, GameState::new(field()));
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let f = field();
        let mut paddle = Paddle::new(f);
        paddle.shift(-100.0, f);
        assert_eq!(paddle.x, 0.0);
        paddle.shift(100.0, f);
        assert_eq!(paddle.x, 20.0);
    }

    #[test]
    fn test_paddle_span_is_half_open() {
        let paddle = Paddle::new(field());
        assert!(paddle.spans(10.0));
        assert!(paddle.spans(19.99));
        assert!(!paddle.spans(20.0));
        assert!(!paddle.spans(9.99));
    }

    #[test]
    fn test_serve_point_uses_whole_half_paddle() {
        let mut paddle = Paddle::new(field());
        paddle.x = 3.5;
        assert_eq!(paddle.serve_point(), Vec2::new(8.5, 17.0));
    }

    #[test]
    fn test_ball_glyph_cycles() {
        let mut ball = Ball::new(field(), &Paddle::new(field()));
        let glyphs: Vec<char> = (0..5)
            .map(|_| {
                let g = ball.glyph();
                ball.advance_frame();
                g
            })
            .collect();
        assert_eq!(glyphs, vec!['O', '@', '●', '*', 'O']);
    }

    #[test]
    fn test_block_covers() {
        let block = Block {
            x: 3,
            y: 4,
            width: 3,
            color: BlockColor::Blue,
            hit: false,
        };
        assert!(block.covers(3, 4));
        assert!(block.covers(5, 4));
        assert!(!block.covers(6, 4));
        assert!(!block.covers(4, 5));
    }
}
