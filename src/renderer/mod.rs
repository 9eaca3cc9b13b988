//! Terminal renderer - the cell grid and the diffed redraw.
//!
//! The renderer knows only about cells. Widgets fill a [`FrameBuffer`];
//! the [`DiffRenderer`] sends the changed cells to the backend.

pub mod buffer;
pub mod diff;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
