//! Uniform sampling grids over a rectangular region.
//!
//! This module defines [`AxisRange`] and [`SamplingGrid`]. A grid holds `density` evenly
//! spaced coordinates per axis, inclusive of both endpoints, and addresses its nodes in
//! meshgrid order: node `(i, j)` sits at `(xs[j], ys[i])`, so rows follow the y axis.
use glam::DVec2;

use crate::error::{Error, Result};

/// Smallest density for which evenly spaced inclusive endpoints are defined.
pub const MIN_DENSITY: usize = 2;

/// A closed interval `[min, max]` along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The interval `(-extent, extent)`.
    pub const fn symmetric(extent: f64) -> Self {
        Self {
            min: -extent,
            max: extent,
        }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// `n` evenly spaced values from `min` to `max`, both included.
    pub fn linspace(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = self.span() / (n - 1) as f64;
                let mut out: Vec<f64> = (0..n).map(|k| self.min + step * k as f64).collect();
                out[n - 1] = self.max;
                out
            }
        }
    }

    fn validate(&self, axis: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "{axis}_range bounds must be finite"
            )));
        }
        if self.min >= self.max {
            return Err(Error::InvalidConfig(format!(
                "{axis}_range min must be < max (got {} >= {})",
                self.min, self.max
            )));
        }
        if !self.span().is_finite() {
            return Err(Error::InvalidConfig(format!(
                "{axis}_range span overflows (got {} to {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// A `density × density` lattice of evaluation points.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingGrid {
    x_range: AxisRange,
    y_range: AxisRange,
    density: usize,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SamplingGrid {
    /// Creates a grid, rejecting densities below [`MIN_DENSITY`] and empty or non-finite ranges.
    pub fn try_new(
        x_range: impl Into<AxisRange>,
        y_range: impl Into<AxisRange>,
        density: usize,
    ) -> Result<Self> {
        let x_range = x_range.into();
        let y_range = y_range.into();
        x_range.validate("x")?;
        y_range.validate("y")?;
        if density < MIN_DENSITY {
            return Err(Error::InvalidConfig(format!(
                "density must be >= {MIN_DENSITY} (got {density})"
            )));
        }

        Ok(Self {
            x_range,
            y_range,
            density,
            xs: x_range.linspace(density),
            ys: y_range.linspace(density),
        })
    }

    /// A grid over `(-extent, extent)` on both axes.
    pub fn square(extent: f64, density: usize) -> Result<Self> {
        Self::try_new(
            AxisRange::symmetric(extent),
            AxisRange::symmetric(extent),
            density,
        )
    }

    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    /// Points per axis.
    pub fn density(&self) -> usize {
        self.density
    }

    /// Shape of arrays aligned to this grid as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.density, self.density)
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.density * self.density
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column coordinates along x.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Row coordinates along y.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Distance between neighbouring nodes along each axis.
    pub fn spacing(&self) -> DVec2 {
        let n = (self.density - 1) as f64;
        DVec2::new(self.x_range.span() / n, self.y_range.span() / n)
    }

    /// Row-major flat index of node `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.density + j
    }

    /// World position of node `(i, j)`.
    #[inline]
    pub fn node(&self, i: usize, j: usize) -> DVec2 {
        DVec2::new(self.xs[j], self.ys[i])
    }

    /// Iterates `(i, j, position)` in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, usize, DVec2)> + '_ {
        self.ys.iter().enumerate().flat_map(move |(i, &y)| {
            self.xs
                .iter()
                .enumerate()
                .map(move |(j, &x)| (i, j, DVec2::new(x, y)))
        })
    }

    /// Returns `true` if `p` lies inside the closed grid rectangle.
    pub fn contains(&self, p: DVec2) -> bool {
        self.x_range.contains(p.x) && self.y_range.contains(p.y)
    }

    /// Converts a world position to fractional `(row, col)` coordinates, or `None` outside.
    pub fn locate(&self, p: DVec2) -> Option<(f64, f64)> {
        if !self.contains(p) {
            return None;
        }
        let spacing = self.spacing();
        let col = (p.x - self.x_range.min) / spacing.x;
        let row = (p.y - self.y_range.min) / spacing.y;
        Some((row, col))
    }
}
