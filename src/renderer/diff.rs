//! Differential renderer.
//!
//! Compares the new frame to the previous one and only writes cells that
//! changed:
//!
//! 1. For each cell in the new frame:
//!    - If the previous frame has the same size and the cell is unchanged: skip
//!    - Otherwise: hand the cell to the backend
//! 2. Flush the backend once
//! 3. Keep the frame for the next comparison

use std::io;

use super::buffer::FrameBuffer;
use crate::backend::Backend;

/// Keeps the previous frame so each redraw only writes what changed.
#[derive(Debug, Default)]
pub struct DiffRenderer {
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Render a frame, writing only changed cells.
    ///
    /// Returns the number of cells written.
    pub fn render<B: Backend + ?Sized>(
        &mut self,
        frame: &FrameBuffer,
        backend: &mut B,
    ) -> io::Result<usize> {
        let prev = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == frame.width() && prev.height() == frame.height());

        let mut written = 0;
        for (x, y, cell) in frame.iter() {
            if prev.and_then(|p| p.get(x, y)) == Some(cell) {
                continue;
            }
            backend.set_cell(x, y, cell)?;
            written += 1;
        }

        backend.flush()?;
        log::trace!("redraw wrote {} cells", written);

        self.previous = Some(frame.clone());
        Ok(written)
    }

    /// Force the next frame to be written in full.
    ///
    /// Use after the screen was cleared or corrupted behind our back.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }
}
