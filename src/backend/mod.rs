//! Terminal backends - where input comes from and where cells go.
//!
//! The scheduler is the only caller of a backend. All screen writes happen
//! on the scheduler thread; input is delivered from whatever thread the
//! backend chooses through the [`InputSink`] handed to [`Backend::start`].

mod crossterm;

pub use self::crossterm::CrosstermBackend;
pub use self::test::TestBackend;

use std::io;

use crate::input::InputSink;
use crate::types::Cell;

/// Contract between the dispatch core and a terminal.
pub trait Backend {
    /// Prepare the terminal (raw mode, alternate screen, mouse reporting).
    fn init(&mut self) -> io::Result<()>;

    /// Begin delivering input to `sink`. Called once per `Ui::run`, after
    /// `init`.
    fn start(&mut self, sink: Box<dyn InputSink>) -> io::Result<()>;

    /// Current size in cells as (width, height).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Write one cell. May be buffered until `flush`.
    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()>;

    /// Present everything written since the last flush.
    fn flush(&mut self) -> io::Result<()>;

    /// Stop delivering input and undo `init`.
    ///
    /// Once this returns no more input is consumed until the next `start`.
    fn restore(&mut self) -> io::Result<()>;
}
