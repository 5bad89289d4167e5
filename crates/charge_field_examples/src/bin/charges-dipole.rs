use charge_field::prelude::*;
use charge_field_examples::{init_tracing, render_field_plot_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let charges = [Charge::new(1.0, -2.0, 0.0), Charge::new(-1.0, 2.0, 0.0)];

    // Plain gray lines on a 20x20 grid.
    let grid = SamplingGrid::square(10.0, 20)?;
    let field = sample(&charges, &grid);
    let options = PlotOptions::new().with_coloring(LineColoring::GRAY);
    let plot = FieldPlot::build(&field, &charges, &options)?;

    render(&plot)?;
    Ok(())
}

fn render(plot: &FieldPlot) -> anyhow::Result<()> {
    let cfg = RenderConfig::new(1000);
    render_field_plot_to_png(plot, &cfg, "charges-dipole.png")?;
    Ok(())
}
