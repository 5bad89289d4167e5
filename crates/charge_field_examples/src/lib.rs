#![forbid(unsafe_code)]

mod rendering;
mod session;

pub use rendering::{init_tracing, render_field_plot_to_png, RenderConfig};
pub use session::{Command, Flow, FrameSink, PngSink, Session};
