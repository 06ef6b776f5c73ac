//! Keyboard input

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::Direction;

/// What the player asked for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    Left,
    Right,
    Quit,
    Restart,
    #[default]
    None,
}

impl Command {
    /// Paddle direction carried by this command
    pub fn direction(self) -> Direction {
        match self {
            Command::Left => Direction::Left,
            Command::Right => Direction::Right,
            _ => Direction::None,
        }
    }
}

/// Map a key event to a command. Key releases are ignored.
pub fn command_for_key(key: KeyEvent) -> Command {
    if key.kind == KeyEventKind::Release {
        return Command::None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') => Command::Left,
        KeyCode::Right | KeyCode::Char('d') => Command::Right,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') => Command::Restart,
        _ => Command::None,
    }
}

/// Fold one more command into what has been read this tick.
///
/// Quit sticks; otherwise the newest real command wins.
pub fn combine(current: Command, next: Command) -> Command {
    match (current, next) {
        (Command::Quit, _) => Command::Quit,
        (current, Command::None) => current,
        (_, next) => next,
    }
}

/// Drain pending terminal events without blocking
pub fn poll_command() -> io::Result<Command> {
    let mut command = Command::None;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            command = combine(command, command_for_key(key));
        }
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_and_letter_keys() {
        assert_eq!(command_for_key(press(KeyCode::Left)), Command::Left);
        assert_eq!(command_for_key(press(KeyCode::Char('a'))), Command::Left);
        assert_eq!(command_for_key(press(KeyCode::Right)), Command::Right);
        assert_eq!(command_for_key(press(KeyCode::Char('d'))), Command::Right);
        assert_eq!(command_for_key(press(KeyCode::Char('r'))), Command::Restart);
        assert_eq!(command_for_key(press(KeyCode::Char('x'))), Command::None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(command_for_key(press(KeyCode::Esc)), Command::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(ctrl_c), Command::Quit);
        assert_eq!(command_for_key(press(KeyCode::Char('c'))), Command::None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(command_for_key(release), Command::None);
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine(Command::Left, Command::None), Command::Left);
        assert_eq!(combine(Command::Left, Command::Right), Command::Right);
        assert_eq!(combine(Command::Quit, Command::Right), Command::Quit);
        assert_eq!(combine(Command::Restart, Command::Quit), Command::Quit);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Command::Left.direction(), Direction::Left);
        assert_eq!(Command::Right.direction(), Direction::Right);
        assert_eq!(Command::Restart.direction(), Direction::None);
    }
}
