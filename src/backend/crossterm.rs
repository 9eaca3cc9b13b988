//! Real terminal backend built on crossterm.
//!
//! crossterm handles raw mode, the alternate screen, cursor visibility,
//! mouse capture and terminal size. Input bytes are read by our own stdin
//! thread and decoded by [`InputDecoder`](crate::input::InputDecoder).

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use super::Backend;
use crate::config::Config;
use crate::input::{InputSink, StdinReader};
use crate::types::{Attr, Cell, Rgba};

const ATTRIBUTES: [(Attr, Attribute); 8] = [
    (Attr::BOLD, Attribute::Bold),
    (Attr::DIM, Attribute::Dim),
    (Attr::ITALIC, Attribute::Italic),
    (Attr::UNDERLINE, Attribute::Underlined),
    (Attr::BLINK, Attribute::SlowBlink),
    (Attr::INVERSE, Attribute::Reverse),
    (Attr::HIDDEN, Attribute::Hidden),
    (Attr::STRIKETHROUGH, Attribute::CrossedOut),
];

/// Backend for the process's own terminal (stdin/stdout).
pub struct CrosstermBackend {
    /// Accumulated output, written with a single syscall on flush
    out: Vec<u8>,
    reader: Option<StdinReader>,
    mouse: bool,
    alternate_screen: bool,
    flush_lone_escape: bool,
    initialized: bool,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            out: Vec::with_capacity(16384),
            reader: None,
            mouse: config.mouse,
            alternate_screen: config.alternate_screen,
            flush_lone_escape: config.flush_lone_escape,
            initialized: false,
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for CrosstermBackend {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if self.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, Hide, Clear(ClearType::All))?;
        if self.mouse {
            execute!(stdout, EnableMouseCapture)?;
        }

        self.initialized = true;
        log::debug!(
            "terminal initialised (alternate_screen={}, mouse={})",
            self.alternate_screen,
            self.mouse
        );
        Ok(())
    }

    fn start(&mut self, sink: Box<dyn InputSink>) -> io::Result<()> {
        // One reader at a time: a second thread would race the first for
        // stdin bytes. `restore` stops it.
        if self.reader.is_none() {
            self.reader = Some(StdinReader::spawn(sink, self.flush_lone_escape)?);
        }
        Ok(())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        let Some(ch) = cell.symbol() else {
            return Ok(());
        };

        queue!(
            self.out,
            MoveTo(x, y),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_color(cell.fg)),
            SetBackgroundColor(to_color(cell.bg))
        )?;
        for (flag, attribute) in ATTRIBUTES {
            if cell.attrs.contains(flag) {
                queue!(self.out, SetAttribute(attribute))?;
            }
        }
        queue!(self.out, Print(ch))
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.out.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.out)?;
        stdout.flush()?;
        self.out.clear();
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        // Stop reading before the terminal leaves raw mode, so whatever
        // the user types next belongs to the host program
        if let Some(mut reader) = self.reader.take() {
            reader.stop();
        }

        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        let mut stdout = io::stdout();
        if self.mouse {
            execute!(stdout, DisableMouseCapture)?;
        }
        execute!(stdout, SetAttribute(Attribute::Reset), Show)?;
        if self.alternate_screen {
            execute!(stdout, LeaveAlternateScreen)?;
        }
        terminal::disable_raw_mode()?;

        log::debug!("terminal restored");
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r as u8,
            g: color.g as u8,
            b: color.b as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(to_color(Rgba::ansi(9)), Color::AnsiValue(9));
        assert_eq!(to_color(Rgba::rgb(1, 2, 3)), Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn test_set_cell_buffers_until_flush() {
        let mut backend = CrosstermBackend::new();
        let cell = Cell {
            char: 'x' as u32,
            attrs: Attr::BOLD,
            ..Cell::default()
        };
        backend.set_cell(3, 1, &cell).unwrap();

        let written = String::from_utf8_lossy(&backend.out).to_string();
        assert!(written.contains("\x1b[2;4H"));
        assert!(written.ends_with('x'));
    }

    #[test]
    fn test_continuation_cells_skipped() {
        let mut backend = CrosstermBackend::new();
        let cell = Cell {
            char: Cell::CONTINUATION,
            ..Cell::default()
        };
        backend.set_cell(0, 0, &cell).unwrap();
        assert!(backend.out.is_empty());
    }
}
