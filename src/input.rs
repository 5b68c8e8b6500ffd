//! Keyboard commands and the input capability the runner polls

use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Control legend shown under the grid
pub const CONTROLS: &str = "Space:Pause N:Step R:Random C:Clear Q:Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Step,
    Randomize,
    Clear,
    Quit,
}

impl Command {
    /// Map a key to its command; unknown keys map to nothing
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            ' ' => Some(Command::TogglePause),
            'n' | 'N' => Some(Command::Step),
            'r' | 'R' => Some(Command::Randomize),
            'c' | 'C' => Some(Command::Clear),
            'q' | 'Q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Source of single-key commands.
///
/// `poll_key` returns at most one pending key. With a zero `wait` it must not
/// block; otherwise it may wait up to `wait` but should return as soon as a
/// key arrives. `Ok(None)` means nothing was pressed.
pub trait InputSource {
    fn poll_key(&mut self, wait: Duration) -> io::Result<Option<char>>;
}

/// Keyboard input from the crossterm event queue.
///
/// Expects raw mode to be enabled (see `Terminal::new`) so keys arrive
/// without waiting for Enter.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_key(&mut self, wait: Duration) -> io::Result<Option<char>> {
        if !poll(wait)? {
            return Ok(None);
        }

        let key = match read()? {
            // Windows reports releases too
            Event::Key(event) if event.kind == KeyEventKind::Release => None,
            // Raw mode swallows the signal, so Ctrl+C arrives as a key
            Event::Key(event)
                if event.code == KeyCode::Char('c')
                    && event.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some('q')
            }
            Event::Key(event) => match event.code {
                KeyCode::Char(c) => Some(c),
                KeyCode::Esc => Some('q'),
                _ => None,
            },
            _ => None,
        };
        Ok(key)
    }
}
