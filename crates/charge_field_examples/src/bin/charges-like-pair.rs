use charge_field::prelude::*;
use charge_field_examples::{init_tracing, render_field_plot_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Both positive: the field cancels at the midpoint.
    let charges = [Charge::new(1.0, -2.0, 0.0), Charge::new(1.0, 2.0, 0.0)];

    let settings = PlotSettings::new();
    let plot = FieldPlot::from_settings(&charges, &settings, &PlotOptions::new())?;

    render(&plot)?;
    Ok(())
}

fn render(plot: &FieldPlot) -> anyhow::Result<()> {
    let cfg = RenderConfig::new(1000).with_title("Two Like Charges");
    render_field_plot_to_png(plot, &cfg, "charges-like-pair.png")?;
    Ok(())
}
