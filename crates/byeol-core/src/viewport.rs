//! Logical-pixel viewport model.
//!
//! The simulation runs in logical pixels, not terminal cells, so the
//! animation constants (velocities, margins, star density) stay independent
//! of glyph geometry. Each cell covers a fixed logical footprint; the scale
//! is consulted only when rasterizing to the cell grid.

/// Logical width of one terminal cell in pixels.
pub const CELL_WIDTH_PX: f32 = 10.0;

/// Logical height of one terminal cell in pixels. Cells are roughly twice
/// as tall as they are wide, which this ratio preserves.
pub const CELL_HEIGHT_PX: f32 = 20.0;

/// Viewport state in logical pixels, mutated only on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical width in pixels.
    pub width: f32,
    /// Logical height in pixels.
    pub height: f32,
    /// Horizontal pixels per cell.
    pub cell_width: f32,
    /// Vertical pixels per cell.
    pub cell_height: f32,
}

impl Viewport {
    /// Build a viewport from terminal cell dimensions.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as f32 * CELL_WIDTH_PX,
            height: rows as f32 * CELL_HEIGHT_PX,
            cell_width: CELL_WIDTH_PX,
            cell_height: CELL_HEIGHT_PX,
        }
    }

    /// Build a viewport directly from logical pixel dimensions.
    pub fn from_pixels(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            cell_width: CELL_WIDTH_PX,
            cell_height: CELL_HEIGHT_PX,
        }
    }

    /// Logical area in square pixels.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Number of columns this viewport rasterizes to.
    pub fn cols(&self) -> u16 {
        (self.width / self.cell_width) as u16
    }

    /// Number of rows this viewport rasterizes to.
    pub fn rows(&self) -> u16 {
        (self.height / self.cell_height) as u16
    }

    /// Map a logical position to a cell coordinate, or `None` when it
    /// falls outside the visible grid.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(((x / self.cell_width) as u16, (y / self.cell_height) as u16))
    }
}
