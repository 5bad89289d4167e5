//! Coulomb field of point charges by superposition (unit constant, `k = 1`).
use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::charge::Charge;

/// Radius of the default skip ball around each charge.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// How a query point coinciding with a charge is handled.
///
/// A charge whose squared distance to the query point falls under the policy's threshold
/// contributes nothing, so evaluation never produces an infinite or NaN vector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SingularityPolicy {
    /// Skip a charge only when `r² == 0`.
    ExactZero,
    /// Skip a charge when `r² < epsilon²`.
    EpsilonBall { epsilon: f64 },
}

impl Default for SingularityPolicy {
    fn default() -> Self {
        SingularityPolicy::EpsilonBall {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl SingularityPolicy {
    /// Returns `true` if a charge at squared distance `r2` must be skipped.
    #[inline]
    pub fn skips(&self, r2: f64) -> bool {
        match *self {
            SingularityPolicy::ExactZero => r2 == 0.0,
            SingularityPolicy::EpsilonBall { epsilon } => r2 < epsilon * epsilon,
        }
    }
}

/// Field at `point` under the default [`SingularityPolicy`].
#[must_use]
pub fn evaluate(charges: &[Charge], point: impl Into<Vector2<f64>>) -> DVec2 {
    evaluate_with(charges, point, SingularityPolicy::default())
}

/// Field at `point`, summing `q / r²` along the unit displacement of every charge.
#[must_use]
pub fn evaluate_with(
    charges: &[Charge],
    point: impl Into<Vector2<f64>>,
    policy: SingularityPolicy,
) -> DVec2 {
    let p = DVec2::from(point.into());
    let mut e = DVec2::ZERO;
    for c in charges {
        let dx = p.x - c.x;
        let dy = p.y - c.y;
        let r2 = dx * dx + dy * dy;
        if policy.skips(r2) {
            continue;
        }
        let r = r2.sqrt();
        let magnitude = c.q / r2;
        e.x += magnitude * (dx / r);
        e.y += magnitude * (dy / r);
    }
    e
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn rand_in(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
        let t = rng.next_u32() as f64 / (u32::MAX as f64 + 1.0);
        lo + (hi - lo) * t
    }

    fn random_charge(rng: &mut StdRng) -> Charge {
        Charge::new(
            rand_in(rng, -3.0, 3.0),
            rand_in(rng, -10.0, 10.0),
            rand_in(rng, -10.0, 10.0),
        )
    }

    #[test]
    fn dipole_at_origin_points_toward_negative_charge() {
        // Each charge contributes +0.25 along x at the midpoint.
        let charges = [Charge::new(1.0, -2.0, 0.0), Charge::new(-1.0, 2.0, 0.0)];
        let e = evaluate(&charges, [0.0, 0.0]);
        assert_relative_eq!(e.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(e.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn superposition_is_linear() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let a = random_charge(&mut rng);
            let b = random_charge(&mut rng);
            let p = DVec2::new(
                rand_in(&mut rng, -12.0, 12.0),
                rand_in(&mut rng, -12.0, 12.0),
            );
            if p.distance(a.position()) < 1e-3 || p.distance(b.position()) < 1e-3 {
                continue;
            }
            let both = evaluate(&[a, b], p);
            let sum = evaluate(&[a], p) + evaluate(&[b], p);
            assert_relative_eq!(both.x, sum.x, epsilon = 1e-9, max_relative = 1e-12);
            assert_relative_eq!(both.y, sum.y, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn single_charge_field_is_point_symmetric() {
        let charges = [Charge::new(2.5, 0.0, 0.0)];
        for &(x, y) in &[(1.0, 0.0), (0.3, -2.0), (-4.0, 5.5), (7.0, 7.0)] {
            let e = evaluate(&charges, [x, y]);
            let mirrored = evaluate(&charges, [-x, -y]);
            assert_relative_eq!(e.x, -mirrored.x, epsilon = 1e-12);
            assert_relative_eq!(e.y, -mirrored.y, epsilon = 1e-12);
            assert_relative_eq!(e.length(), mirrored.length(), epsilon = 1e-12);
        }
    }

    #[test]
    fn single_charge_magnitude_falls_off_with_inverse_square() {
        for &q in &[1.0, -3.0, 0.25] {
            let charges = [Charge::new(q, 0.0, 0.0)];
            for &r in &[1e-3, 0.5, 1.0, 2.0, 10.0, 100.0] {
                let angle: f64 = 0.7;
                let e = evaluate(&charges, [r * angle.cos(), r * angle.sin()]);
                assert_relative_eq!(e.length(), q.abs() / (r * r), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn field_points_away_from_positive_and_toward_negative() {
        let p = DVec2::new(3.0, 4.0);
        let away = evaluate(&[Charge::new(1.0, 0.0, 0.0)], p);
        let toward = evaluate(&[Charge::new(-1.0, 0.0, 0.0)], p);
        assert!(away.dot(p) > 0.0);
        assert!(toward.dot(p) < 0.0);
    }

    #[test]
    fn query_on_charge_skips_its_contribution() {
        let e = evaluate(&[Charge::new(1.0, 0.0, 0.0)], [0.0, 0.0]);
        assert_eq!(e, DVec2::ZERO);

        let e = evaluate_with(
            &[Charge::new(1.0, 0.0, 0.0)],
            [0.0, 0.0],
            SingularityPolicy::ExactZero,
        );
        assert_eq!(e, DVec2::ZERO);
    }

    #[test]
    fn query_on_one_charge_still_sees_the_others() {
        let charges = [Charge::new(1.0, 0.0, 0.0), Charge::new(1.0, 2.0, 0.0)];
        let e = evaluate(&charges, [0.0, 0.0]);
        assert_relative_eq!(e.x, -0.25, epsilon = 1e-12);
        assert!(e.is_finite());
    }

    #[test]
    fn zero_charge_and_empty_configuration_contribute_nothing() {
        assert_eq!(evaluate(&[], [1.0, 1.0]), DVec2::ZERO);
        let neutral = [Charge::new(0.0, 0.0, 0.0)];
        assert_eq!(evaluate(&neutral, [1.0, 1.0]), DVec2::ZERO);
    }

    #[test]
    fn epsilon_ball_threshold_is_strict() {
        let policy = SingularityPolicy::EpsilonBall { epsilon: 0.5 };
        assert!(policy.skips(0.0));
        assert!(policy.skips(0.2499));
        assert!(!policy.skips(0.25));
        assert!(!SingularityPolicy::ExactZero.skips(1e-300));
    }
}
