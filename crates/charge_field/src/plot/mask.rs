//! Coarse occupancy mask for spacing streamlines.
use glam::DVec2;

use crate::field::AxisRange;

/// A `cols × rows` boolean lattice over the plot rectangle; a cell is occupied once a
/// streamline has passed through it.
#[derive(Clone, Debug)]
pub struct OccupancyMask {
    x_range: AxisRange,
    y_range: AxisRange,
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl OccupancyMask {
    pub fn new(x_range: AxisRange, y_range: AxisRange, resolution: usize) -> Self {
        let n = resolution.max(1);
        Self {
            x_range,
            y_range,
            cols: n,
            rows: n,
            cells: vec![false; n * n],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// World size of one cell.
    pub fn cell_size(&self) -> DVec2 {
        DVec2::new(
            self.x_range.span() / self.cols as f64,
            self.y_range.span() / self.rows as f64,
        )
    }

    /// Flat index of the cell containing `p`, or `None` outside the rectangle.
    pub fn cell_of(&self, p: DVec2) -> Option<usize> {
        if !self.x_range.contains(p.x) || !self.y_range.contains(p.y) {
            return None;
        }
        let u = (p.x - self.x_range.min) / self.x_range.span();
        let v = (p.y - self.y_range.min) / self.y_range.span();
        let col = ((u * self.cols as f64) as usize).min(self.cols - 1);
        let row = ((v * self.rows as f64) as usize).min(self.rows - 1);
        Some(row * self.cols + col)
    }

    /// World position of a cell's center.
    pub fn cell_center(&self, idx: usize) -> DVec2 {
        let (row, col) = (idx / self.cols, idx % self.cols);
        let size = self.cell_size();
        DVec2::new(
            self.x_range.min + (col as f64 + 0.5) * size.x,
            self.y_range.min + (row as f64 + 0.5) * size.y,
        )
    }

    #[inline]
    pub fn is_occupied(&self, idx: usize) -> bool {
        self.cells.get(idx).copied().unwrap_or(true)
    }

    pub fn occupy(&mut self, idx: usize) {
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = true;
        }
    }

    pub fn release(&mut self, idx: usize) {
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = false;
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }
}
