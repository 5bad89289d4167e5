use charge_field::prelude::*;
use charge_field_examples::{init_tracing, render_field_plot_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let charges = [
        Charge::new(1.0, -2.0, -2.0),
        Charge::new(-1.0, 2.0, -2.0),
        Charge::new(1.0, 2.0, 2.0),
        Charge::new(-1.0, -2.0, 2.0),
    ];

    let settings = PlotSettings::new();
    let plot = FieldPlot::from_settings(&charges, &settings, &PlotOptions::new())?;

    render(&plot)?;
    Ok(())
}

fn render(plot: &FieldPlot) -> anyhow::Result<()> {
    let cfg = RenderConfig::new(1000).with_title("Quadrupole");
    render_field_plot_to_png(plot, &cfg, "charges-quadrupole.png")?;
    Ok(())
}
