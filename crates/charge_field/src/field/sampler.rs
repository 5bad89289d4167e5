//! Grid sampling of field sources.
//!
//! Every call recomputes the whole grid; cost is `O(density² × charges)` with no caching
//! or spatial acceleration.
use tracing::debug;

use super::evaluator::SingularityPolicy;
use super::grid::SamplingGrid;
use super::vector_field::VectorField;
use super::{FieldSource, PointCharges};
use crate::charge::Charge;
use crate::error::Result;

/// Samples the Coulomb field of `charges` at every node of `grid`.
pub fn sample(charges: &[Charge], grid: &SamplingGrid) -> VectorField {
    sample_with(charges, grid, SingularityPolicy::default())
}

/// Like [`sample`], with an explicit singularity policy.
pub fn sample_with(
    charges: &[Charge],
    grid: &SamplingGrid,
    policy: SingularityPolicy,
) -> VectorField {
    debug!(
        "Sampling {} charges on a {}x{} grid.",
        charges.len(),
        grid.density(),
        grid.density()
    );
    sample_source(&PointCharges::new(charges).with_policy(policy), grid)
}

/// Samples over `(-extent, extent)` on both axes.
pub fn sample_square(charges: &[Charge], extent: f64, density: usize) -> Result<VectorField> {
    let grid = SamplingGrid::square(extent, density)?;
    Ok(sample(charges, &grid))
}

/// Evaluates any [`FieldSource`] at every grid node.
pub fn sample_source<S>(source: &S, grid: &SamplingGrid) -> VectorField
where
    S: FieldSource + ?Sized,
{
    let mut field = VectorField::zeros(grid.clone());
    for (i, j, p) in grid.nodes() {
        field.set(i, j, source.field_at(p));
    }
    field
}
