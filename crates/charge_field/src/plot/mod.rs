//! Backend-agnostic plot preparation.
//!
//! [`FieldPlot`] bundles everything a plotting backend needs to draw a field figure:
//! streamlines with per-vertex magnitudes, charge markers, bounds, and the line coloring.
//! Pixel output lives outside this crate.
use tracing::debug;

use crate::charge::Charge;
use crate::error::Result;
use crate::field::sampler::sample;
use crate::field::{AxisRange, VectorField};
use crate::settings::PlotSettings;

pub mod colormap;
pub mod marker;
pub mod mask;
pub mod streamline;

use colormap::{LineColoring, Rgb};
use marker::ChargeMarker;
use streamline::{trace_streamlines, Streamline, StreamlineOptions};

/// Options for [`FieldPlot::build`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotOptions {
    pub streamlines: StreamlineOptions,
    pub coloring: LineColoring,
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_streamlines(mut self, streamlines: StreamlineOptions) -> Self {
        self.streamlines = streamlines;
        self
    }

    pub fn with_coloring(mut self, coloring: LineColoring) -> Self {
        self.coloring = coloring;
        self
    }
}

/// A field figure ready for drawing. Equal aspect ratio is implied by the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPlot {
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub streamlines: Vec<Streamline>,
    /// One marker per charge, in configuration order.
    pub markers: Vec<ChargeMarker>,
    /// Smallest and largest non-zero node magnitude, used to normalize line colors.
    pub magnitude_range: Option<(f64, f64)>,
    pub coloring: LineColoring,
}

impl FieldPlot {
    /// Prepares a plot from an already sampled field.
    pub fn build(field: &VectorField, charges: &[Charge], options: &PlotOptions) -> Result<Self> {
        options.streamlines.validate()?;

        let streamlines = trace_streamlines(field, charges, &options.streamlines);
        let markers = charges.iter().map(ChargeMarker::for_charge).collect();
        let magnitude_range = field.positive_magnitude_range();

        debug!(
            "Prepared field plot: {} streamlines, {} markers.",
            streamlines.len(),
            charges.len()
        );

        Ok(Self {
            x_range: field.grid().x_range(),
            y_range: field.grid().y_range(),
            streamlines,
            markers,
            magnitude_range,
            coloring: options.coloring,
        })
    }

    /// Samples `charges` on the grid described by `settings`, then prepares the plot.
    pub fn from_settings(
        charges: &[Charge],
        settings: &PlotSettings,
        options: &PlotOptions,
    ) -> Result<Self> {
        let grid = settings.grid()?;
        let field = sample(charges, &grid);
        Self::build(&field, charges, options)
    }

    /// Color of a line segment whose start sees `magnitude`.
    pub fn line_color(&self, magnitude: f64) -> Rgb {
        self.coloring.color(magnitude, self.magnitude_range)
    }

    /// Height over width of the data rectangle.
    pub fn aspect_ratio(&self) -> f64 {
        self.y_range.span() / self.x_range.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charge::Polarity;
    use crate::field::sampler::sample_square;
    use crate::plot::colormap::{viridis, MagnitudeScale};
    use crate::presets::Preset;

    #[test]
    fn from_settings_uses_the_symmetric_range() {
        let settings = PlotSettings::new().with_plot_range(5.0);
        let plot =
            FieldPlot::from_settings(&Preset::Dipole.charges(), &settings, &PlotOptions::new())
                .unwrap();
        assert_eq!(plot.x_range, AxisRange::new(-5.0, 5.0));
        assert_eq!(plot.y_range, AxisRange::new(-5.0, 5.0));
        assert_eq!(plot.aspect_ratio(), 1.0);
        assert!(!plot.streamlines.is_empty());
    }

    #[test]
    fn markers_follow_configuration_order() {
        let charges = Preset::Quadrupole.charges();
        let field = sample_square(&charges, 10.0, 20).unwrap();
        let plot = FieldPlot::build(&field, &charges, &PlotOptions::new()).unwrap();
        let polarities: Vec<_> = plot.markers.iter().map(|m| m.polarity).collect();
        assert_eq!(
            polarities,
            vec![
                Polarity::Positive,
                Polarity::Negative,
                Polarity::Positive,
                Polarity::Negative
            ]
        );
    }

    #[test]
    fn empty_configuration_prepares_an_empty_plot() {
        let plot =
            FieldPlot::from_settings(&[], &PlotSettings::default(), &PlotOptions::new()).unwrap();
        assert!(plot.streamlines.is_empty());
        assert!(plot.markers.is_empty());
        assert_eq!(plot.magnitude_range, None);
    }

    #[test]
    fn invalid_settings_are_reported() {
        let settings = PlotSettings::new().with_grid_density(3);
        assert!(FieldPlot::from_settings(&[], &settings, &PlotOptions::new()).is_err());
    }

    #[test]
    fn line_color_uses_the_field_magnitude_range() {
        let charges = [Charge::new(1.0, 0.3, 0.2)];
        let field = sample_square(&charges, 10.0, 25).unwrap();
        let options = PlotOptions::new().with_coloring(LineColoring::Magnitude {
            scale: MagnitudeScale::Linear,
        });
        let plot = FieldPlot::build(&field, &charges, &options).unwrap();
        let expected = field.positive_magnitude_range();
        assert_eq!(plot.magnitude_range, expected);
        let (lo, hi) = plot.magnitude_range.unwrap();
        assert!(lo > 0.0 && hi > lo);
        assert_eq!(plot.line_color(lo), viridis(0.0));
        assert_eq!(plot.line_color(hi), viridis(1.0));
    }

    #[test]
    fn uniform_coloring_is_passed_through() {
        let charges = Preset::SinglePositive.charges();
        let field = sample_square(&charges, 4.0, 12).unwrap();
        let options = PlotOptions::new().with_coloring(LineColoring::GRAY);
        let plot = FieldPlot::build(&field, &charges, &options).unwrap();
        assert_eq!(plot.line_color(123.0), [128, 128, 128]);
    }
}
