#![forbid(unsafe_code)]
//! charge_field: Electrostatic field evaluation and visualization preparation for 2D point charges.
//!
//! Modules:
//! - charge / store / presets: point charges, the host-owned charge store, and stock configurations
//! - field: Coulomb superposition, uniform sampling grids, and sampled vector fields
//! - plot: streamline tracing, charge markers, and colormaps feeding a plotting backend
//! - settings: the validated configuration surface (grid density, plot range)
//!
//! The evaluator and sampler are pure functions over borrowed charge slices; the crate holds
//! no global state.
pub mod charge;
pub mod error;
pub mod field;
pub mod plot;
pub mod presets;
pub mod settings;
pub mod store;

/// Convenient re-exports for common types. Import with `use charge_field::prelude::*;`.
pub mod prelude {
    pub use crate::charge::{Charge, Polarity};
    pub use crate::error::{Error, Result};
    pub use crate::field::evaluator::{evaluate, evaluate_with, SingularityPolicy};
    pub use crate::field::sampler::{sample, sample_source, sample_square, sample_with};
    pub use crate::field::{AxisRange, FieldSource, PointCharges, SamplingGrid, VectorField};
    pub use crate::plot::colormap::{viridis, LineColoring, MagnitudeScale, Rgb};
    pub use crate::plot::marker::ChargeMarker;
    pub use crate::plot::streamline::{trace_streamlines, Streamline, StreamlineOptions};
    pub use crate::plot::{FieldPlot, PlotOptions};
    pub use crate::presets::Preset;
    pub use crate::settings::PlotSettings;
    pub use crate::store::ChargeStore;
}
