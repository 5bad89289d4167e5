//! Sampled 2D vector fields aligned to a [`SamplingGrid`].
use glam::DVec2;

use super::grid::SamplingGrid;
use crate::error::{Error, Result};

/// Two same-shaped row-major component arrays `ex[i][j]`, `ey[i][j]` over a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorField {
    grid: SamplingGrid,
    ex: Vec<f64>,
    ey: Vec<f64>,
}

impl VectorField {
    /// Creates a field with every component set to zero.
    pub fn zeros(grid: SamplingGrid) -> Self {
        let len = grid.len();
        Self {
            grid,
            ex: vec![0.0; len],
            ey: vec![0.0; len],
        }
    }

    /// Wraps precomputed component arrays, checking both match the grid shape.
    pub fn from_components(grid: SamplingGrid, ex: Vec<f64>, ey: Vec<f64>) -> Result<Self> {
        if ex.len() != grid.len() || ey.len() != grid.len() {
            return Err(Error::InvalidConfig(format!(
                "component lengths ({}, {}) do not match grid of {} nodes",
                ex.len(),
                ey.len(),
                grid.len()
            )));
        }
        Ok(Self { grid, ex, ey })
    }

    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    /// `(rows, cols)`; identical for both components.
    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    /// Flat row-major x components.
    pub fn ex(&self) -> &[f64] {
        &self.ex
    }

    /// Flat row-major y components.
    pub fn ey(&self) -> &[f64] {
        &self.ey
    }

    /// Rows of the x component, one slice per grid row.
    pub fn ex_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.ex.chunks(self.grid.density())
    }

    /// Rows of the y component, one slice per grid row.
    pub fn ey_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.ey.chunks(self.grid.density())
    }

    /// Field vector at node `(i, j)`, or `None` outside the grid.
    pub fn get(&self, i: usize, j: usize) -> Option<DVec2> {
        let n = self.grid.density();
        if i >= n || j >= n {
            return None;
        }
        let idx = self.grid.index(i, j);
        Some(DVec2::new(self.ex[idx], self.ey[idx]))
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, v: DVec2) {
        let idx = self.grid.index(i, j);
        self.ex[idx] = v.x;
        self.ey[idx] = v.y;
    }

    /// Iterates `(node position, field vector)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.grid.nodes().map(move |(i, j, p)| {
            let idx = self.grid.index(i, j);
            (p, DVec2::new(self.ex[idx], self.ey[idx]))
        })
    }

    /// `sqrt(ex² + ey²)` per node, row-major.
    pub fn magnitude(&self) -> Vec<f64> {
        self.ex
            .iter()
            .zip(&self.ey)
            .map(|(x, y)| (x * x + y * y).sqrt())
            .collect()
    }

    /// Smallest and largest finite magnitude, or `None` if there is none.
    pub fn magnitude_range(&self) -> Option<(f64, f64)> {
        min_max(self.magnitude().into_iter().filter(|m| m.is_finite()))
    }

    /// Like [`magnitude_range`](Self::magnitude_range), ignoring zero-magnitude nodes.
    pub fn positive_magnitude_range(&self) -> Option<(f64, f64)> {
        let magnitudes = self.magnitude().into_iter();
        min_max(magnitudes.filter(|m| m.is_finite() && *m > 0.0))
    }

    /// Unit-length copy of the field. Nodes with zero magnitude stay `(0, 0)`.
    pub fn normalized(&self) -> VectorField {
        let mut ex = Vec::with_capacity(self.ex.len());
        let mut ey = Vec::with_capacity(self.ey.len());
        for (&x, &y) in self.ex.iter().zip(&self.ey) {
            let unit = DVec2::new(x, y).normalize_or_zero();
            ex.push(unit.x);
            ey.push(unit.y);
        }
        VectorField {
            grid: self.grid.clone(),
            ex,
            ey,
        }
    }

    /// Bilinear interpolation of the field at `p`, or `None` outside the grid rectangle.
    pub fn interpolate(&self, p: DVec2) -> Option<DVec2> {
        let (row, col) = self.grid.locate(p)?;
        let last = (self.grid.density() - 2) as f64;
        let i0 = row.floor().min(last).max(0.0);
        let j0 = col.floor().min(last).max(0.0);
        let ty = row - i0;
        let tx = col - j0;
        let (i0, j0) = (i0 as usize, j0 as usize);

        let v00 = self.node_vec(i0, j0);
        let v01 = self.node_vec(i0, j0 + 1);
        let v10 = self.node_vec(i0 + 1, j0);
        let v11 = self.node_vec(i0 + 1, j0 + 1);

        let bottom = v00.lerp(v01, tx);
        let top = v10.lerp(v11, tx);
        Some(bottom.lerp(top, ty))
    }

    #[inline]
    fn node_vec(&self, i: usize, j: usize) -> DVec2 {
        let idx = self.grid.index(i, j);
        DVec2::new(self.ex[idx], self.ey[idx])
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, m| match acc {
        None => Some((m, m)),
        Some((lo, hi)) => Some((lo.min(m), hi.max(m))),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn grid() -> SamplingGrid {
        SamplingGrid::try_new((0.0, 2.0), (0.0, 2.0), 3).unwrap()
    }

    fn linear_field() -> VectorField {
        // ex = x, ey = 2y
        let g = grid();
        let mut field = VectorField::zeros(g.clone());
        for (i, j, p) in g.nodes() {
            field.set(i, j, DVec2::new(p.x, 2.0 * p.y));
        }
        field
    }

    #[test]
    fn from_components_checks_lengths() {
        let ok = VectorField::from_components(grid(), vec![0.0; 9], vec![0.0; 9]);
        assert!(ok.is_ok());
        let short = VectorField::from_components(grid(), vec![0.0; 9], vec![0.0; 8]);
        assert!(short.is_err());
    }

    #[test]
    fn magnitude_matches_component_norm() {
        let (ex, ey) = (vec![3.0; 9], vec![4.0; 9]);
        let field = VectorField::from_components(grid(), ex, ey).unwrap();
        assert!(field.magnitude().iter().all(|m| *m == 5.0));
        assert_eq!(field.magnitude_range(), Some((5.0, 5.0)));
    }

    #[test]
    fn positive_magnitude_range_skips_zero_nodes() {
        // Node (0, 0) of the linear field is the only zero.
        let field = linear_field();
        assert_eq!(field.magnitude_range().map(|(lo, _)| lo), Some(0.0));
        let (lo, hi) = field.positive_magnitude_range().unwrap();
        assert_eq!(lo, 1.0);
        assert_relative_eq!(hi, 20.0_f64.sqrt(), epsilon = 1e-12);

        let empty = VectorField::zeros(grid());
        assert_eq!(empty.positive_magnitude_range(), None);
    }

    #[test]
    fn normalized_has_unit_length_and_keeps_zero_nodes() {
        let field = linear_field();
        let unit = field.normalized();
        assert_eq!(unit.shape(), field.shape());
        assert_eq!(unit.get(0, 0), Some(DVec2::ZERO));
        for (i, j, _) in field.grid().nodes().skip(1) {
            let v = unit.get(i, j).unwrap();
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn interpolate_reproduces_linear_fields() {
        let field = linear_field();
        for &(x, y) in &[(0.0, 0.0), (0.5, 1.25), (1.9, 0.1), (2.0, 2.0), (1.0, 2.0)] {
            let v = field.interpolate(DVec2::new(x, y)).unwrap();
            assert_relative_eq!(v.x, x, epsilon = 1e-12);
            assert_relative_eq!(v.y, 2.0 * y, epsilon = 1e-12);
        }
        assert_eq!(field.interpolate(DVec2::new(-0.1, 1.0)), None);
    }

    #[test]
    fn rows_iterate_over_density_sized_slices() {
        let field = linear_field();
        let rows: Vec<&[f64]> = field.ex_rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[0.0, 1.0, 2.0]);
        let ey_rows: Vec<&[f64]> = field.ey_rows().collect();
        assert_eq!(ey_rows[2], &[4.0, 4.0, 4.0]);
    }

    #[test]
    fn get_rejects_out_of_range_indices() {
        let field = linear_field();
        assert_eq!(field.get(3, 0), None);
        assert_eq!(field.get(2, 2), Some(DVec2::new(2.0, 4.0)));
    }
}
