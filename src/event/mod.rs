//! Event model - everything that flows through the event queue.
//!
//! ```text
//! stdin bytes ─→ InputDecoder ─→ Key / Mouse ─┐
//!                                             ├─→ EventQueue ─→ Ui (scheduler)
//! any thread ─→ UiHandle ─→ Callback / Repaint / Quit ─┘
//! ```
//!
//! `R` is the root widget type. Callbacks receive it mutably when they run
//! on the scheduler.

pub mod key;
pub mod modifiers;
pub mod mouse;

use std::fmt;

pub use key::{format_key_event, Key, KeyEvent};
pub use modifiers::ModMask;
pub use mouse::{MouseButton, MouseEvent, MouseKind};

use crate::input::ParsedEvent;

/// Work submitted from any thread, run once on the scheduler.
pub type Callback<R> = Box<dyn FnOnce(&mut R) + Send + 'static>;

/// The single type carried by the event queue.
pub enum Event<R> {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Re-render the current widget tree.
    Repaint,
    Callback(Callback<R>),
    /// Stop the scheduler loop.
    Quit,
}

impl<R> Event<R> {
    /// Wrap a closure as a callback event.
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(&mut R) + Send + 'static,
    {
        Event::Callback(Box::new(f))
    }

    /// Short tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Key(_) => "key",
            Event::Mouse(_) => "mouse",
            Event::Repaint => "repaint",
            Event::Callback(_) => "callback",
            Event::Quit => "quit",
        }
    }
}

impl<R> fmt::Debug for Event<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Key(ev) => f.debug_tuple("Key").field(ev).finish(),
            Event::Mouse(ev) => f.debug_tuple("Mouse").field(ev).finish(),
            Event::Repaint => f.write_str("Repaint"),
            Event::Callback(_) => f.write_str("Callback(..)"),
            Event::Quit => f.write_str("Quit"),
        }
    }
}

impl<R> From<KeyEvent> for Event<R> {
    fn from(ev: KeyEvent) -> Self {
        Event::Key(ev)
    }
}

impl<R> From<MouseEvent> for Event<R> {
    fn from(ev: MouseEvent) -> Self {
        Event::Mouse(ev)
    }
}

impl<R> From<ParsedEvent> for Event<R> {
    fn from(ev: ParsedEvent) -> Self {
        match ev {
            ParsedEvent::Key(key) => Event::Key(key),
            ParsedEvent::Mouse(mouse) => Event::Mouse(mouse),
        }
    }
}
