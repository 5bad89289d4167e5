//! Colormaps and line coloring for field magnitude.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// Viridis sampled at t = 0.0, 0.1, ..., 1.0.
const VIRIDIS: [Rgb; 11] = [
    [68, 1, 84],
    [72, 36, 117],
    [65, 68, 135],
    [53, 95, 141],
    [42, 120, 142],
    [33, 145, 140],
    [34, 168, 132],
    [68, 191, 112],
    [122, 209, 81],
    [189, 223, 38],
    [253, 231, 37],
];

/// Maps `t` in `[0, 1]` to viridis. Values outside are clamped; NaN maps to the low end.
pub fn viridis(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let x = t * (VIRIDIS.len() - 1) as f64;
    let k = (x.floor() as usize).min(VIRIDIS.len() - 2);
    let f = x - k as f64;
    let (a, b) = (VIRIDIS[k], VIRIDIS[k + 1]);
    let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * f).round() as u8;
    [mix(0), mix(1), mix(2)]
}

/// How magnitudes are mapped onto `[0, 1]` before color lookup.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MagnitudeScale {
    Linear,
    /// Natural-log scale; magnitudes below `f64::MIN_POSITIVE` are floored.
    #[default]
    Log,
}

impl MagnitudeScale {
    /// Position of `value` within `[lo, hi]` on this scale, clamped to `[0, 1]`.
    pub fn normalize(self, value: f64, lo: f64, hi: f64) -> f64 {
        let (v, lo, hi) = match self {
            MagnitudeScale::Linear => (value, lo, hi),
            MagnitudeScale::Log => {
                let floor = f64::MIN_POSITIVE;
                (
                    value.max(floor).ln(),
                    lo.max(floor).ln(),
                    hi.max(floor).ln(),
                )
            }
        };
        let span = hi - lo;
        if !span.is_finite() || span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((v - lo) / span).clamp(0.0, 1.0)
    }
}

/// Streamline coloring.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineColoring {
    /// One color for every line.
    Uniform(Rgb),
    /// Viridis over the local field magnitude.
    Magnitude { scale: MagnitudeScale },
}

impl Default for LineColoring {
    fn default() -> Self {
        LineColoring::Magnitude {
            scale: MagnitudeScale::default(),
        }
    }
}

impl LineColoring {
    /// Uniform mid gray.
    pub const GRAY: LineColoring = LineColoring::Uniform([128, 128, 128]);

    /// Color for a local `magnitude` given the field's magnitude range.
    pub fn color(&self, magnitude: f64, range: Option<(f64, f64)>) -> Rgb {
        match *self {
            LineColoring::Uniform(rgb) => rgb,
            LineColoring::Magnitude { scale } => {
                let (lo, hi) = range.unwrap_or((0.0, 0.0));
                viridis(scale.normalize(magnitude, lo, hi))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viridis_hits_anchor_colors() {
        assert_eq!(viridis(0.0), [68, 1, 84]);
        assert_eq!(viridis(0.5), [33, 145, 140]);
        assert_eq!(viridis(1.0), [253, 231, 37]);
    }

    #[test]
    fn viridis_clamps_out_of_range_input() {
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.0), viridis(1.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));
    }

    #[test]
    fn linear_scale_is_proportional() {
        assert_eq!(MagnitudeScale::Linear.normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(MagnitudeScale::Linear.normalize(20.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn log_scale_uses_decades() {
        let t = MagnitudeScale::Log.normalize(10.0, 1.0, 100.0);
        assert!((t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_maps_to_midpoint() {
        assert_eq!(MagnitudeScale::Linear.normalize(3.0, 3.0, 3.0), 0.5);
        assert_eq!(MagnitudeScale::Log.normalize(0.0, 0.0, 0.0), 0.5);
    }

    #[test]
    fn uniform_coloring_ignores_magnitude() {
        let coloring = LineColoring::GRAY;
        assert_eq!(coloring.color(1e9, Some((0.0, 1.0))), [128, 128, 128]);
    }

    #[test]
    fn magnitude_coloring_spans_the_colormap() {
        let coloring = LineColoring::Magnitude {
            scale: MagnitudeScale::Linear,
        };
        assert_eq!(coloring.color(0.0, Some((0.0, 4.0))), viridis(0.0));
        assert_eq!(coloring.color(4.0, Some((0.0, 4.0))), viridis(1.0));
    }
}
