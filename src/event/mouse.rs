//! Mouse events.
//!
//! The dispatch core only routes by position. Button and action are carried
//! along untouched for whichever widget receives the event.

use super::modifiers::ModMask;
use crate::types::Point;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// What the mouse did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseKind {
    Press(MouseButton),
    Release(MouseButton),
    Move,
    ScrollUp,
    ScrollDown,
}

/// A mouse action at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub pos: Point,
    pub kind: MouseKind,
    pub modifiers: ModMask,
}

impl MouseEvent {
    /// Left-button press at `(x, y)`.
    pub const fn click(x: u16, y: u16) -> Self {
        Self {
            pos: Point::new(x, y),
            kind: MouseKind::Press(MouseButton::Left),
            modifiers: ModMask::NONE,
        }
    }
}
