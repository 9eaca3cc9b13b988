//! # spark-dispatch
//!
//! Event model and dispatch loop for terminal user interfaces.
//!
//! ## Architecture
//!
//! Everything that happens to a UI is an [`Event`]: a key press, a mouse
//! action, a repaint request, a callback to run, or a quit request. Events
//! flow through one FIFO queue into one scheduler ([`Ui::run`]), which is the
//! only place the widget tree and the screen are touched:
//!
//! ```text
//! terminal bytes → InputDecoder ─┐
//!                                ├─→ EventQueue ─→ Ui::run ─→ Widget / DiffRenderer ─→ Backend
//! other threads → UiHandle ──────┘
//! ```
//!
//! ## Modules
//!
//! - [`event`] - Key, mouse and queue event types, key naming
//! - [`input`] - Raw terminal bytes to key and mouse events
//! - [`dispatch`] - Event queue, keybindings, cross-thread handle, scheduler
//! - [`renderer`] - Cell grid and diffed redraw
//! - [`backend`] - Terminal contract, crossterm and in-memory backends
//! - [`widget`] - What the scheduler needs from the root widget
//!
//! ## Example
//!
//! ```no_run
//! use spark_dispatch::{CrosstermBackend, FrameBuffer, Key, ModMask, Style, Ui, Widget};
//!
//! struct Hello;
//!
//! impl Widget for Hello {
//!     fn draw(&self, frame: &mut FrameBuffer) {
//!         frame.set_str(0, 0, "hello, press Esc", Style::default(), None);
//!     }
//! }
//!
//! let mut ui = Ui::new(Hello, CrosstermBackend::new());
//! let handle = ui.handle();
//! ui.register_keybinding(Key::Esc, ModMask::NONE, move |_| {
//!     handle.quit();
//! });
//! ui.run()?;
//! # Ok::<(), spark_dispatch::Error>(())
//! ```

pub mod backend;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod input;
pub mod renderer;
pub mod types;
pub mod widget;

pub use types::*;

pub use backend::{Backend, CrosstermBackend, TestBackend};
pub use config::Config;
pub use dispatch::{KeyBinding, KeybindingRegistry, State, Ui, UiHandle};
pub use error::{Error, Result};
pub use event::{
    format_key_event, Callback, Event, Key, KeyEvent, ModMask, MouseButton, MouseEvent, MouseKind,
};
pub use input::{InputDecoder, InputSink, ParsedEvent};
pub use renderer::{DiffRenderer, FrameBuffer};
pub use widget::Widget;
