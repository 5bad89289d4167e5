//! Charge markers: position, sign color, and magnitude-based size.
use glam::DVec2;

use super::colormap::Rgb;
use crate::charge::{Charge, Polarity};

/// Marker diameter per unit of `|q|`, in points.
pub const MARKER_SCALE: f64 = 5.0;
pub const MIN_MARKER_SIZE: f64 = 6.0;
pub const MAX_MARKER_SIZE: f64 = 20.0;

pub const POSITIVE_COLOR: Rgb = [255, 0, 0];
pub const NEGATIVE_COLOR: Rgb = [0, 0, 255];
pub const NEUTRAL_COLOR: Rgb = [128, 128, 128];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeMarker {
    pub position: DVec2,
    pub polarity: Polarity,
    /// Diameter in points.
    pub size: f64,
    pub color: Rgb,
}

impl ChargeMarker {
    pub fn for_charge(charge: &Charge) -> Self {
        let polarity = charge.polarity();
        Self {
            position: charge.position(),
            polarity,
            size: marker_size(charge.q),
            color: polarity_color(polarity),
        }
    }
}

/// `|q| · MARKER_SCALE`, clamped to `[MIN_MARKER_SIZE, MAX_MARKER_SIZE]`.
pub fn marker_size(q: f64) -> f64 {
    (q.abs() * MARKER_SCALE).clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE)
}

pub fn polarity_color(polarity: Polarity) -> Rgb {
    match polarity {
        Polarity::Positive => POSITIVE_COLOR,
        Polarity::Negative => NEGATIVE_COLOR,
        Polarity::Neutral => NEUTRAL_COLOR,
    }
}
