//! PNG output for prepared field plots.
//!
//! Figures are drawn with plotters into an in-memory RGB buffer and encoded with `image`.
use std::path::Path;

use anyhow::{anyhow, Context};
use charge_field::prelude::*;
use glam::DVec2;
use plotters::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const MARGIN: i32 = 20;
const TITLE_HEIGHT: i32 = 50;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 60;
const TITLE_FONT_SIZE: f64 = 26.0;
const AXIS_FONT_SIZE: f64 = 20.0;
/// Arrowhead length as a fraction of the x span.
const ARROW_FRACTION: f64 = 0.018;

/// Installs a stderr `fmt` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Image and styling options for [`render_field_plot_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels; height follows from the plot's aspect ratio.
    pub width: u32,
    pub background: Rgb,
    pub grid_color: Rgb,
    pub title: String,
    pub line_width: u32,
    pub arrows: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            background: [255, 255, 255],
            grid_color: [190, 190, 190],
            title: "Electric Field Visualization".to_string(),
            line_width: 1,
            arrows: true,
        }
    }
}

impl RenderConfig {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_arrows(mut self, arrows: bool) -> Self {
        self.arrows = arrows;
        self
    }

    /// Image size whose plotting area has the same aspect ratio as the data.
    fn image_size(&self, aspect: f64) -> (u32, u32) {
        let chrome_w = Y_LABEL_AREA + 2 * MARGIN as u32;
        let plot_w = self.width.saturating_sub(chrome_w).max(1);
        let plot_h = (plot_w as f64 * aspect).round().max(1.0) as u32;
        let height = plot_h + X_LABEL_AREA + 2 * MARGIN as u32 + TITLE_HEIGHT as u32;
        (self.width.max(chrome_w + 1), height)
    }

    /// Pixels per typographic point on a 10-inch-wide figure.
    fn px_per_point(&self) -> f64 {
        self.width as f64 / 720.0
    }
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c[0], c[1], c[2])
}

/// Draws streamlines, arrowheads, and charge markers with labeled axes, then writes a PNG.
pub fn render_field_plot_to_png(
    plot: &FieldPlot,
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let out_path = out_path.as_ref();
    let (w, h) = config.image_size(plot.aspect_ratio());
    let mut buffer = vec![0u8; (w as usize) * (h as usize) * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
        root.fill(&rgb(config.background))?;

        let (title_area, body) = root.split_vertically(TITLE_HEIGHT);
        let title_style = ("sans-serif", TITLE_FONT_SIZE);
        if let Err(err) = title_area.titled(&config.title, title_style) {
            warn!("Skipping title, no usable font: {err}.");
        }

        let (x0, x1) = (plot.x_range.min, plot.x_range.max);
        let (y0, y1) = (plot.y_range.min, plot.y_range.max);
        let mut chart = ChartBuilder::on(&body)
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(x0..x1, y0..y1)?;

        let grid = rgb(config.grid_color);
        let labeled = chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("y")
            .axis_desc_style(("sans-serif", AXIS_FONT_SIZE))
            .bold_line_style(grid.mix(0.6).stroke_width(1))
            .light_line_style(grid.mix(0.2).stroke_width(1))
            .draw();
        // Labels need a system font; fall back to a bare grid without one.
        if let Err(err) = labeled {
            warn!("Drawing unlabeled axes, no usable font: {err}.");
            chart
                .configure_mesh()
                .x_labels(0)
                .y_labels(0)
                .bold_line_style(grid.mix(0.6).stroke_width(1))
                .light_line_style(grid.mix(0.2).stroke_width(1))
                .draw()?;
        }

        for line in &plot.streamlines {
            chart.draw_series(line.segments().map(|(a, b, m)| {
                PathElement::new(
                    vec![(a.x, a.y), (b.x, b.y)],
                    rgb(plot.line_color(m)).stroke_width(config.line_width),
                )
            }))?;
        }

        if config.arrows {
            let len = ARROW_FRACTION * plot.x_range.span();
            chart.draw_series(plot.streamlines.iter().filter_map(|line| {
                let (at, dir) = line.arrow()?;
                let m = line.magnitudes[(line.len() - 1) / 2];
                Some(Polygon::new(
                    arrowhead(at, dir, len),
                    rgb(plot.line_color(m)).filled(),
                ))
            }))?;
        }

        let scale = config.px_per_point();
        chart.draw_series(plot.markers.iter().map(|m| {
            let radius = (0.5 * m.size * scale).round().max(1.0) as i32;
            Circle::new((m.position.x, m.position.y), radius, rgb(m.color).filled())
        }))?;

        root.present()?;
    }

    let image = image::RgbImage::from_raw(w, h, buffer)
        .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
    image
        .save(out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!(
        "Wrote {} ({}x{}, {} streamlines, {} charges).",
        out_path.display(),
        w,
        h,
        plot.streamlines.len(),
        plot.markers.len()
    );
    Ok(())
}

/// Triangle centered on `at`, pointing along `dir`.
fn arrowhead(at: DVec2, dir: DVec2, len: f64) -> Vec<(f64, f64)> {
    let perp = dir.perp();
    let tip = at + dir * (0.5 * len);
    let back = at - dir * (0.5 * len);
    let left = back + perp * (0.35 * len);
    let right = back - perp * (0.35 * len);
    vec![(tip.x, tip.y), (left.x, left.y), (right.x, right.y)]
}
