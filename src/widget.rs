//! The widget contract consumed by the scheduler.
//!
//! The scheduler talks to a single root widget. Containers route keys to
//! their focused child and mouse events to the child whose bounds contain
//! the pointer; how they lay out and draw children is their own business.

use crate::event::{KeyEvent, MouseEvent};
use crate::renderer::FrameBuffer;
use crate::types::Rect;

pub trait Widget {
    /// Paint into `frame`. Called on every repaint, after `resize`.
    fn draw(&self, frame: &mut FrameBuffer);

    /// The area the widget occupies for the coming repaint.
    fn resize(&mut self, _area: Rect) {}

    /// A key press no keybinding claimed. Returns true if it was handled.
    fn on_key(&mut self, _event: &KeyEvent) -> bool {
        false
    }

    /// A mouse event at a cell inside the screen.
    fn on_mouse(&mut self, _event: &MouseEvent) -> bool {
        false
    }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn draw(&self, frame: &mut FrameBuffer) {
        (**self).draw(frame)
    }

    fn resize(&mut self, area: Rect) {
        (**self).resize(area)
    }

    fn on_key(&mut self, event: &KeyEvent) -> bool {
        (**self).on_key(event)
    }

    fn on_mouse(&mut self, event: &MouseEvent) -> bool {
        (**self).on_mouse(event)
    }
}
