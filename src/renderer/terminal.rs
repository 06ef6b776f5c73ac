//! Terminal output via crossterm
//!
//! Commands are queued per cell and flushed once per frame.

use std::io::{self, Write};

use crossterm::style::{self, Attribute, Color};
use crossterm::{cursor, execute, queue, terminal};

use super::frame::{Cell, CellColor, Frame};

/// Somewhere frames can be drawn
pub trait Surface {
    /// Start a new frame
    fn begin(&mut self) -> io::Result<()>;
    fn draw_cell(&mut self, cell: &Cell) -> io::Result<()>;
    /// Show everything drawn since `begin`
    fn present(&mut self) -> io::Result<()>;

    fn draw_frame(&mut self, frame: &Frame) -> io::Result<()> {
        self.begin()?;
        for cell in frame.cells() {
            self.draw_cell(cell)?;
        }
        self.present()
    }
}

impl From<CellColor> for Color {
    fn from(color: CellColor) -> Self {
        match color {
            CellColor::White => Color::White,
            CellColor::Yellow => Color::Yellow,
            CellColor::Green => Color::Green,
            CellColor::Cyan => Color::Cyan,
            CellColor::Blue => Color::Blue,
            CellColor::Magenta => Color::Magenta,
            CellColor::Red => Color::Red,
        }
    }
}

/// A crossterm-backed surface writing to `out`
pub struct TerminalSurface<W: Write> {
    out: W,
    /// Emit color commands (monochrome terminals get glyphs only)
    color: bool,
    entered: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            entered: false,
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )
    }

    /// Undo `enter`; a no-op if it never ran
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        execute!(
            self.out,
            style::ResetColor,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        )?;
        terminal::disable_raw_mode()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn begin(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    fn draw_cell(&mut self, cell: &Cell) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(cell.x, cell.y))?;
        if self.color {
            queue!(self.out, style::SetForegroundColor(cell.color.into()))?;
        }
        if cell.bold {
            queue!(
                self.out,
                style::SetAttribute(Attribute::Bold),
                style::Print(cell.glyph),
                style::SetAttribute(Attribute::NormalIntensity),
            )
        } else {
            queue!(self.out, style::Print(cell.glyph))
        }
    }

    fn present(&mut self) -> io::Result<()> {
        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::frame::compose;
    use crate::sim::{GameState, Playfield};

    fn render(color: bool) -> String {
        let state = GameState::new(Playfield::new(30, 20).unwrap());
        let mut surface = TerminalSurface::new(Vec::new(), color);
        surface.draw_frame(&compose(&state)).unwrap();
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_frame_reaches_the_writer() {
        let out = render(true);
        assert!(out.contains('═'));
        assert!(out.contains('█'));
        assert!(out.contains('O'));
        // Status line is printed glyph by glyph
        assert!(out.contains('S') && out.contains('L'));
    }

    #[test]
    fn test_monochrome_skips_colors() {
        let colored = render(true);
        let mono = render(false);
        assert!(mono.len() < colored.len());
        assert!(mono.contains('█'));
    }

    #[test]
    fn test_restore_without_enter_is_noop() {
        let mut surface = TerminalSurface::new(Vec::new(), true);
        surface.restore().unwrap();
        assert!(surface.into_inner().is_empty());
    }

    #[derive(Default)]
    struct Recorder {
        begun: usize,
        cells: Vec<Cell>,
        presented: usize,
    }

    impl Surface for Recorder {
        fn begin(&mut self) -> io::Result<()> {
            self.begun += 1;
            Ok(())
        }

        fn draw_cell(&mut self, cell: &Cell) -> io::Result<()> {
            self.cells.push(*cell);
            Ok(())
        }

        fn present(&mut self) -> io::Result<()> {
            self.presented += 1;
            Ok(())
        }
    }

    #[test]
    fn test_draw_frame_draws_every_cell_then_presents_once() {
        let state = GameState::new(Playfield::new(30, 20).unwrap());
        let frame = compose(&state);
        let mut recorder = Recorder::default();
        recorder.draw_frame(&frame).unwrap();
        assert_eq!(recorder.begun, 1);
        assert_eq!(recorder.presented, 1);
        assert_eq!(recorder.cells, frame.cells());
    }
}
