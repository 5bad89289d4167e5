use charge_field::prelude::*;
use charge_field_examples::{init_tracing, render_field_plot_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let charges = [
        Charge::new(2.0, 3.0, 4.0),
        Charge::new(-1.0, -5.0, 2.0),
        Charge::new(1.5, 6.0, -3.0),
        Charge::new(-2.5, -1.0, -5.0),
    ];

    // Denser grid and streamlines to resolve four unequal sources.
    let settings = PlotSettings::new().with_grid_density(40);
    let options =
        PlotOptions::new().with_streamlines(StreamlineOptions::default().with_density(2.0));
    let plot = FieldPlot::from_settings(&charges, &settings, &options)?;

    render(&plot)?;
    Ok(())
}

fn render(plot: &FieldPlot) -> anyhow::Result<()> {
    let cfg = RenderConfig::new(1000).with_title("Complex Arrangement");
    render_field_plot_to_png(plot, &cfg, "charges-complex-arrangement.png")?;
    Ok(())
}
