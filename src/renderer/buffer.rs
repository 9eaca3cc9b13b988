//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be displayed
//! on the terminal. Widgets paint into it during a repaint.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: drawing functions accept an optional clip `Rect`.
//! - **Wide characters**: double-width glyphs leave a continuation cell.

use unicode_width::UnicodeWidthChar;

use crate::types::{Cell, Point, Rect, Style};

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Iterate over cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % width) as u16;
            let y = (i / width) as u16;
            (x, y, cell)
        })
    }

    /// Clear the entire buffer to default cells.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the buffer (clears content).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::default());
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// Returns true if the cell was set.
    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell, clip: Option<&Rect>) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if let Some(clip) = clip {
            if !clip.contains(Point::new(x, y)) {
                return false;
            }
        }

        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Draw a string starting at (x, y) on a single row.
    ///
    /// Returns the number of columns written. Zero-width characters are
    /// skipped; a wide glyph that does not fit is not drawn.
    pub fn set_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: Style,
        clip: Option<&Rect>,
    ) -> u16 {
        let limit = match clip {
            Some(clip) => clip.intersect(&self.bounds()),
            None => Some(self.bounds()),
        };
        let Some(limit) = limit else { return 0 };
        let right = limit.x as u32 + limit.width as u32;

        let mut col = x as u32;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u32;
            if w == 0 {
                continue;
            }
            if col + w > right {
                break;
            }

            let cell = style.cell(ch);
            self.set_cell(col as u16, y, cell, Some(&limit));
            if w == 2 {
                let cont = Cell {
                    char: Cell::CONTINUATION,
                    ..cell
                };
                self.set_cell(col as u16 + 1, y, cont, Some(&limit));
            }
            col += w;
        }

        (col - x as u32) as u16
    }

    /// Fill a rectangle with one cell value.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let Some(area) = area.intersect(&self.bounds()) else { return };
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                let idx = self.index(x, y);
                self.cells[idx] = cell;
            }
        }
    }

    /// The visible text of each row, for inspection in tests and logs.
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .filter_map(|x| self.get(x, y).and_then(Cell::symbol))
                    .collect()
            })
            .collect()
    }
}
