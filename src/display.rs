//! Rendering of the grid and status line
//!
//! `TerminalDisplay` draws into the raw-mode terminal; `TextDisplay` writes
//! plain lines to any writer and backs print mode.

use crate::engine::Engine;
use crate::terminal::Terminal;
use crossterm::style::Color;
use log::warn;
use std::io::{self, Write};

/// Characters used for living and dead cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '█',
            dead: '░',
        }
    }
}

/// Session information drawn under the grid
#[derive(Debug, Clone, Copy)]
pub struct Status<'a> {
    pub generation: u64,
    pub paused: bool,
    pub controls: &'a str,
}

impl Status<'_> {
    pub fn line(&self) -> String {
        let state = if self.paused { "PAUSED" } else { "RUNNING" };
        if self.controls.is_empty() {
            format!("Gen: {} | {}", self.generation, state)
        } else {
            format!("Gen: {} | {} | {}", self.generation, state, self.controls)
        }
    }
}

/// Everything a display needs for one full redraw
pub struct Frame<'a> {
    pub engine: &'a Engine,
    pub status: Option<Status<'a>>,
}

/// Full-screen redraw of a frame. Each call draws the whole frame, so
/// rendering the same frame twice gives the same picture.
pub trait Display {
    fn render(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Grid rows as text, followed by a blank line and the status line if any
pub fn frame_lines(frame: &Frame, glyphs: Glyphs) -> Vec<String> {
    let mut lines: Vec<String> = frame
        .engine
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&alive| if alive { glyphs.alive } else { glyphs.dead })
                .collect()
        })
        .collect();

    if let Some(status) = frame.status {
        lines.push(String::new());
        lines.push(status.line());
    }
    lines
}

/// Plain-text renderer for pipes, files and tests
pub struct TextDisplay<W: Write> {
    out: W,
    glyphs: Glyphs,
}

impl<W: Write> TextDisplay<W> {
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self { out, glyphs }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for TextDisplay<W> {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        for line in frame_lines(frame, self.glyphs) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

/// Colored renderer for the interactive session
pub struct TerminalDisplay {
    term: Terminal,
    glyphs: Glyphs,
}

impl TerminalDisplay {
    pub fn new(term: Terminal, glyphs: Glyphs, grid_width: usize, grid_height: usize) -> Self {
        let (cols, rows) = term.size();
        // Grid plus a blank line and the status line
        if grid_width > cols as usize || grid_height + 2 > rows as usize {
            warn!(
                "{}x{} grid does not fit a {}x{} terminal, output will be clipped",
                grid_width, grid_height, cols, rows
            );
        }
        Self { term, glyphs }
    }
}

impl Display for TerminalDisplay {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        let engine = frame.engine;
        self.term.clear();

        for (y, row) in engine.rows().iter().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                let (ch, color, bold) = if alive {
                    // Brighter when the cell will survive
                    match engine.neighbors(x, y).unwrap_or(0) {
                        2 => (self.glyphs.alive, Color::Green, false),
                        3 => (self.glyphs.alive, Color::Green, true),
                        _ => (self.glyphs.alive, Color::DarkGreen, false),
                    }
                } else {
                    (self.glyphs.dead, Color::DarkGrey, false)
                };
                self.term.set(x as i32, y as i32, ch, Some(color), bold);
            }
        }

        if let Some(status) = frame.status {
            let color = if status.paused { Color::Yellow } else { Color::Grey };
            let y = engine.height() as i32 + 1;
            self.term.set_str(0, y, &status.line(), Some(color), status.paused);
        }

        self.term.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(size: usize) -> Engine {
        let mut engine = Engine::new(size, size, None).unwrap();
        engine.clear();
        for i in 0..size {
            engine.set_cell(i, i, true).unwrap();
        }
        engine
    }

    #[test]
    fn status_line_format() {
        let status = Status {
            generation: 5,
            paused: true,
            controls: "Space:Pause N:Step R:Random C:Clear Q:Quit",
        };
        assert_eq!(
            status.line(),
            "Gen: 5 | PAUSED | Space:Pause N:Step R:Random C:Clear Q:Quit"
        );

        let status = Status {
            generation: 0,
            paused: false,
            controls: "",
        };
        assert_eq!(status.line(), "Gen: 0 | RUNNING");
    }

    #[test]
    fn lines_without_status() {
        let engine = diagonal(2);
        let frame = Frame {
            engine: &engine,
            status: None,
        };
        assert_eq!(frame_lines(&frame, Glyphs::default()), vec!["█░", "░█"]);
    }

    #[test]
    fn lines_with_status_and_custom_glyphs() {
        let engine = diagonal(3);
        let frame = Frame {
            engine: &engine,
            status: Some(Status {
                generation: 2,
                paused: false,
                controls: "Test:Help",
            }),
        };
        let glyphs = Glyphs { alive: '#', dead: '.' };
        assert_eq!(
            frame_lines(&frame, glyphs),
            vec!["#..", ".#.", "..#", "", "Gen: 2 | RUNNING | Test:Help"]
        );
    }

    #[test]
    fn text_display_is_idempotent() {
        let engine = diagonal(2);
        let frame = Frame {
            engine: &engine,
            status: None,
        };
        let mut display = TextDisplay::new(Vec::new(), Glyphs { alive: 'O', dead: '.' });
        display.render(&frame).unwrap();
        display.render(&frame).unwrap();
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out, "O.\n.O\nO.\n.O\n");
    }
}
