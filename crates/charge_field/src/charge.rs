//! Point charges in the plane.
use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An idealized point source with scalar magnitude `q` at `(x, y)`.
///
/// Charges carry no identity beyond their values; duplicates are allowed and a zero charge is
/// legal (it contributes nothing to the field).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charge {
    /// Signed charge magnitude.
    pub q: f64,
    /// Position along the x axis.
    pub x: f64,
    /// Position along the y axis.
    pub y: f64,
}

/// Sign of a charge, used for marker styling.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Charge {
    /// Creates a charge from the `(q, x, y)` triple.
    pub const fn new(q: f64, x: f64, y: f64) -> Self {
        Self { q, x, y }
    }

    /// Creates a charge at a position given as any mint-compatible 2D vector.
    pub fn at(q: f64, position: impl Into<Vector2<f64>>) -> Self {
        let p = DVec2::from(position.into());
        Self { q, x: p.x, y: p.y }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn polarity(&self) -> Polarity {
        if self.q > 0.0 {
            Polarity::Positive
        } else if self.q < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    /// Returns `true` when all three components are finite.
    pub fn is_finite(&self) -> bool {
        self.q.is_finite() && self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64, f64)> for Charge {
    fn from((q, x, y): (f64, f64, f64)) -> Self {
        Self::new(q, x, y)
    }
}

impl From<Charge> for (f64, f64, f64) {
    fn from(c: Charge) -> Self {
        (c.q, c.x, c.y)
    }
}
