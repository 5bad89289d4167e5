//! Field subsystem: Coulomb superposition, uniform sampling grids, and sampled vector fields.
//!
//! [`evaluator`] maps a charge configuration and a query point to a field vector,
//! [`sampler`] evaluates a [`FieldSource`] at every node of a [`SamplingGrid`], and
//! [`VectorField`] holds the resulting component arrays together with normalization and
//! interpolation helpers.
use glam::DVec2;

use crate::charge::Charge;

pub mod evaluator;
pub mod grid;
pub mod sampler;
pub mod vector_field;

pub use evaluator::SingularityPolicy;
pub use grid::{AxisRange, SamplingGrid};
pub use vector_field::VectorField;

/// Anything that yields a 2D field vector at a point in the plane.
pub trait FieldSource {
    fn field_at(&self, p: DVec2) -> DVec2;
}

impl FieldSource for [Charge] {
    #[inline]
    fn field_at(&self, p: DVec2) -> DVec2 {
        evaluator::evaluate(self, p)
    }
}

impl FieldSource for Vec<Charge> {
    #[inline]
    fn field_at(&self, p: DVec2) -> DVec2 {
        evaluator::evaluate(self, p)
    }
}

/// A borrowed charge configuration paired with an explicit singularity policy.
#[derive(Clone, Copy, Debug)]
pub struct PointCharges<'a> {
    pub charges: &'a [Charge],
    pub policy: SingularityPolicy,
}

impl<'a> PointCharges<'a> {
    pub fn new(charges: &'a [Charge]) -> Self {
        Self {
            charges,
            policy: SingularityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SingularityPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl FieldSource for PointCharges<'_> {
    #[inline]
    fn field_at(&self, p: DVec2) -> DVec2 {
        evaluator::evaluate_with(self.charges, p, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_and_point_charges_agree_under_default_policy() {
        let charges = [Charge::new(1.0, -2.0, 0.0), Charge::new(-1.0, 2.0, 0.0)];
        let p = DVec2::new(0.5, 1.5);
        let a = charges[..].field_at(p);
        let b = PointCharges::new(&charges).field_at(p);
        assert_eq!(a, b);
    }

    #[test]
    fn exact_zero_policy_keeps_contributions_inside_epsilon_ball() {
        let charges = [Charge::new(1.0, 0.0, 0.0)];
        let p = DVec2::new(1e-7, 0.0);
        let skipped = PointCharges::new(&charges).field_at(p);
        let kept = PointCharges::new(&charges)
            .with_policy(SingularityPolicy::ExactZero)
            .field_at(p);
        assert_eq!(skipped, DVec2::ZERO);
        assert!(kept.x > 0.0 && kept.x.is_finite());
    }
}
