//! Streamline tracing through a sampled vector field.
//!
//! Seeds sit at the centers of an [`OccupancyMask`] lattice. From each free seed a line is
//! integrated backward and forward with RK4 along the normalized, bilinearly interpolated
//! field. A direction stops at the grid boundary, where the field vanishes, when it would enter
//! a cell claimed by another line, when it comes within the clearance radius of a charge, or
//! after `max_steps`.
use glam::DVec2;
use tracing::debug;

use super::mask::OccupancyMask;
use crate::charge::Charge;
use crate::error::{Error, Result};
use crate::field::VectorField;

/// Mask cells per axis at `density == 1.0`.
pub const BASE_RESOLUTION: f64 = 30.0;

/// Tuning for [`trace_streamlines`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamlineOptions {
    /// Line density; scales the seed lattice and occupancy mask.
    pub density: f64,
    /// Integration step as a fraction of a mask cell.
    pub step_fraction: f64,
    /// Step cap per direction.
    pub max_steps: usize,
    /// Shorter lines are dropped and their cells released.
    pub min_vertices: usize,
    /// Field magnitude under which integration stops.
    pub min_magnitude: f64,
    /// Stopping radius around charges, in mask cells.
    pub charge_clearance: f64,
}

impl Default for StreamlineOptions {
    fn default() -> Self {
        Self {
            density: 1.5,
            step_fraction: 0.2,
            max_steps: 2000,
            min_vertices: 4,
            min_magnitude: 1e-12,
            charge_clearance: 0.5,
        }
    }
}

impl StreamlineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_step_fraction(mut self, step_fraction: f64) -> Self {
        self.step_fraction = step_fraction;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_min_vertices(mut self, min_vertices: usize) -> Self {
        self.min_vertices = min_vertices;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(Error::InvalidConfig("density must be > 0".into()));
        }
        if !(self.step_fraction > 0.0 && self.step_fraction <= 1.0) {
            let msg = "step_fraction must be in (0, 1]";
            return Err(Error::InvalidConfig(msg.into()));
        }
        if self.max_steps == 0 {
            return Err(Error::InvalidConfig("max_steps must be > 0".into()));
        }
        if !(self.charge_clearance.is_finite() && self.charge_clearance >= 0.0) {
            return Err(Error::InvalidConfig("charge_clearance must be >= 0".into()));
        }
        Ok(())
    }

    /// Mask cells per axis.
    pub fn mask_resolution(&self) -> usize {
        (BASE_RESOLUTION * self.density).round().max(1.0) as usize
    }
}

/// A polyline tangent to the field, ordered along the field direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Streamline {
    pub points: Vec<DVec2>,
    /// Interpolated field magnitude at each point.
    pub magnitudes: Vec<f64>,
}

impl Streamline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive `(start, end, magnitude at start)` triples.
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2, f64)> + '_ {
        self.points
            .windows(2)
            .zip(&self.magnitudes)
            .map(|(w, m)| (w[0], w[1], *m))
    }

    /// Midpoint vertex and unit direction of travel there, for arrowheads.
    pub fn arrow(&self) -> Option<(DVec2, DVec2)> {
        if self.points.len() < 2 {
            return None;
        }
        let mid = (self.points.len() - 1) / 2;
        let dir = (self.points[mid + 1] - self.points[mid]).normalize_or_zero();
        (dir != DVec2::ZERO).then_some((self.points[mid], dir))
    }
}

/// Traces evenly spaced streamlines through `field`, stopping short of `charges`.
pub fn trace_streamlines(
    field: &VectorField,
    charges: &[Charge],
    options: &StreamlineOptions,
) -> Vec<Streamline> {
    let grid = field.grid();
    let mut mask = OccupancyMask::new(grid.x_range(), grid.y_range(), options.mask_resolution());
    let cell = mask.cell_size().min_element();
    let tracer = Tracer {
        field,
        charges,
        options,
        step: options.step_fraction * cell,
        clearance: options.charge_clearance * cell,
    };

    let mut lines = Vec::new();
    for idx in 0..mask.len() {
        if mask.is_occupied(idx) {
            continue;
        }
        let seed = mask.cell_center(idx);
        if tracer.near_charge(seed) {
            continue;
        }
        if let Some(line) = tracer.trace(&mut mask, seed) {
            lines.push(line);
        }
    }

    debug!(
        "Traced {} streamlines from {} seeds ({} cells occupied).",
        lines.len(),
        mask.len(),
        mask.occupied_count()
    );
    lines
}

struct Tracer<'a> {
    field: &'a VectorField,
    charges: &'a [Charge],
    options: &'a StreamlineOptions,
    step: f64,
    clearance: f64,
}

impl Tracer<'_> {
    fn trace(&self, mask: &mut OccupancyMask, seed: DVec2) -> Option<Streamline> {
        let seed_cell = mask.cell_of(seed)?;
        let seed_mag = self.field.interpolate(seed)?.length();
        if !(seed_mag >= self.options.min_magnitude) {
            return None;
        }

        mask.occupy(seed_cell);
        let mut claimed = vec![seed_cell];
        let backward = self.walk(mask, &mut claimed, seed, seed_cell, -1.0);
        let forward = self.walk(mask, &mut claimed, seed, seed_cell, 1.0);

        let n = backward.len() + 1 + forward.len();
        if n < self.options.min_vertices {
            for c in claimed {
                mask.release(c);
            }
            return None;
        }

        let mut points = Vec::with_capacity(n);
        let mut magnitudes = Vec::with_capacity(n);
        for (p, m) in backward
            .into_iter()
            .rev()
            .chain(std::iter::once((seed, seed_mag)))
            .chain(forward)
        {
            points.push(p);
            magnitudes.push(m);
        }
        Some(Streamline { points, magnitudes })
    }

    /// Integrates from `seed` in direction `sign`, claiming mask cells as it goes.
    fn walk(
        &self,
        mask: &mut OccupancyMask,
        claimed: &mut Vec<usize>,
        seed: DVec2,
        seed_cell: usize,
        sign: f64,
    ) -> Vec<(DVec2, f64)> {
        let h = self.step * sign;
        let mut out = Vec::new();
        let mut p = seed;
        let mut cell = seed_cell;

        for _ in 0..self.options.max_steps {
            let Some(next) = self.rk4_step(p, h) else {
                break;
            };
            // Opposing directions inside one step: a null point.
            if next.distance(p) < 0.1 * self.step {
                break;
            }
            let Some(e) = self.field.interpolate(next) else {
                break;
            };
            let mag = e.length();
            if !(mag >= self.options.min_magnitude) {
                break;
            }
            let Some(next_cell) = mask.cell_of(next) else {
                break;
            };
            if next_cell != cell {
                if mask.is_occupied(next_cell) {
                    break;
                }
                mask.occupy(next_cell);
                claimed.push(next_cell);
                cell = next_cell;
            }
            out.push((next, mag));
            p = next;
            if self.near_charge(p) {
                break;
            }
        }
        out
    }

    fn direction(&self, p: DVec2) -> Option<DVec2> {
        let unit = self.field.interpolate(p)?.normalize_or_zero();
        (unit != DVec2::ZERO).then_some(unit)
    }

    fn rk4_step(&self, p: DVec2, h: f64) -> Option<DVec2> {
        let k1 = self.direction(p)?;
        let k2 = self.direction(p + 0.5 * h * k1)?;
        let k3 = self.direction(p + 0.5 * h * k2)?;
        let k4 = self.direction(p + h * k3)?;
        Some(p + h * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0)
    }

    fn near_charge(&self, p: DVec2) -> bool {
        let r2 = self.clearance * self.clearance;
        self.charges
            .iter()
            .any(|c| c.q != 0.0 && p.distance_squared(c.position()) < r2)
    }
}
