//! Configuration surface exposed to hosts: grid density and plot range.
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::{AxisRange, SamplingGrid};

/// Accepted points per axis.
pub const GRID_DENSITY_BOUNDS: RangeInclusive<usize> = 10..=50;
/// Accepted symmetric plot extents.
pub const PLOT_RANGE_BOUNDS: RangeInclusive<f64> = 1.0..=20.0;

pub const DEFAULT_GRID_DENSITY: usize = 25;
pub const DEFAULT_PLOT_RANGE: f64 = 10.0;

/// Sampling resolution and the symmetric bound shared by both axes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSettings {
    /// Points per axis.
    pub grid_density: usize,
    /// Both axes span `(-plot_range, plot_range)`.
    pub plot_range: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            grid_density: DEFAULT_GRID_DENSITY,
            plot_range: DEFAULT_PLOT_RANGE,
        }
    }
}

impl PlotSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grid density.
    pub fn with_grid_density(mut self, grid_density: usize) -> Self {
        self.grid_density = grid_density;
        self
    }

    /// Sets the plot range.
    pub fn with_plot_range(mut self, plot_range: f64) -> Self {
        self.plot_range = plot_range;
        self
    }

    /// Validates the settings, returning an error if either value is out of bounds.
    pub fn validate(&self) -> Result<()> {
        if !GRID_DENSITY_BOUNDS.contains(&self.grid_density) {
            return Err(Error::InvalidConfig(format!(
                "grid_density must be in [{}, {}] (got {})",
                GRID_DENSITY_BOUNDS.start(),
                GRID_DENSITY_BOUNDS.end(),
                self.grid_density
            )));
        }
        if !PLOT_RANGE_BOUNDS.contains(&self.plot_range) {
            return Err(Error::InvalidConfig(format!(
                "plot_range must be in [{}, {}] (got {})",
                PLOT_RANGE_BOUNDS.start(),
                PLOT_RANGE_BOUNDS.end(),
                self.plot_range
            )));
        }
        Ok(())
    }

    pub fn x_range(&self) -> AxisRange {
        AxisRange::symmetric(self.plot_range)
    }

    pub fn y_range(&self) -> AxisRange {
        AxisRange::symmetric(self.plot_range)
    }

    /// Validates and builds the sampling grid described by these settings.
    pub fn grid(&self) -> Result<SamplingGrid> {
        self.validate()?;
        SamplingGrid::try_new(self.x_range(), self.y_range(), self.grid_density)
    }
}
