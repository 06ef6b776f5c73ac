//! Frame composition
//!
//! Turns a `GameState` into the list of cells to draw this frame. Nothing
//! here knows about the terminal.

use crate::consts::*;
use crate::sim::{BlockColor, GamePhase, GameState, Playfield};

pub const GAME_OVER_TEXT: &str = "GAME OVER - Press 'r' to restart or 'q' to quit";
pub const WIN_TEXT: &str = "YOU WIN! - Press 'r' to restart or 'q' to quit";

/// Foreground color of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    White,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Red,
}

impl From<BlockColor> for CellColor {
    fn from(color: BlockColor) -> Self {
        match color {
            BlockColor::Cyan => CellColor::Cyan,
            BlockColor::Blue => CellColor::Blue,
            BlockColor::Magenta => CellColor::Magenta,
        }
    }
}

/// One character to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    pub color: CellColor,
    pub bold: bool,
}

/// Cells for one frame, in draw order (later cells overwrite earlier ones)
#[derive(Debug, Clone)]
pub struct Frame {
    field: Playfield,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(field: Playfield) -> Self {
        Self {
            field,
            cells: Vec::new(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Queue a cell; anything off the playfield is dropped
    pub fn put(&mut self, x: i32, y: i32, glyph: char, color: CellColor, bold: bool) {
        if !self.field.contains(x, y) {
            return;
        }
        self.cells.push(Cell {
            x: x as u16,
            y: y as u16,
            glyph,
            color,
            bold,
        });
    }

    /// Queue a left-to-right run of text starting at (x, y)
    pub fn put_text(&mut self, x: i32, y: i32, text: &str, color: CellColor) {
        for (i, glyph) in text.chars().enumerate() {
            self.put(x + i as i32, y, glyph, color, false);
        }
    }
}

/// Ball color for the current blink phase
pub fn ball_color(anim_ticks: u64) -> CellColor {
    if anim_ticks % BALL_BLINK_PERIOD < BALL_BLINK_PERIOD / 2 {
        CellColor::White
    } else {
        CellColor::Yellow
    }
}

pub fn status_line(state: &GameState) -> String {
    format!("Score: {}  Lives: {}", state.score, state.lives)
}

/// Compose the frame for the current state
pub fn compose(state: &GameState) -> Frame {
    let mut frame = Frame::new(state.field);

    let paddle_x = state.paddle.x as i32;
    let paddle_y = state.paddle.y as i32;
    for i in 0..i32::from(state.paddle.size) {
        frame.put(paddle_x + i, paddle_y, PADDLE_GLYPH, CellColor::Green, false);
    }

    let (ball_x, ball_y) = state.ball.cell();
    frame.put(
        ball_x,
        ball_y,
        state.ball.glyph(),
        ball_color(state.ball.anim_ticks),
        true,
    );

    for block in state.blocks.iter().filter(|b| !b.hit) {
        for i in 0..block.width {
            frame.put(
                i32::from(block.x + i),
                i32::from(block.y),
                BLOCK_GLYPH,
                block.color.into(),
                false,
            );
        }
    }

    frame.put_text(0, 0, &status_line(state), CellColor::Yellow);

    let banner = match state.phase {
        GamePhase::Playing => None,
        GamePhase::GameOver => Some((GAME_OVER_TEXT, CellColor::Red)),
        GamePhase::Won => Some((WIN_TEXT, CellColor::Yellow)),
    };
    if let Some((text, color)) = banner {
        let len = text.chars().count() as i32;
        let x = ((i32::from(state.field.width()) - len) / 2).max(0);
        frame.put_text(x, i32::from(state.field.height() / 2), text, color);
    }

    frame
}
