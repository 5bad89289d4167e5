use charge_field::prelude::*;
use charge_field_examples::{init_tracing, render_field_plot_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let charges = Preset::Dipole.charges();
    let field = sample_square(&charges, 10.0, 30)?;

    for (scale, suffix) in [
        (MagnitudeScale::Linear, "linear"),
        (MagnitudeScale::Log, "log"),
    ] {
        let options = PlotOptions::new().with_coloring(LineColoring::Magnitude { scale });
        let plot = FieldPlot::build(&field, &charges, &options)?;
        let cfg = RenderConfig::new(800).with_title(format!("Dipole, {suffix} magnitude scale"));
        render_field_plot_to_png(
            &plot,
            &cfg,
            format!("fields-linear-vs-log-scale-{suffix}.png"),
        )?;
    }
    Ok(())
}
