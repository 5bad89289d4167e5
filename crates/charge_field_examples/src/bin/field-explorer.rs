use std::io;

use charge_field_examples::{init_tracing, PngSink, RenderConfig, Session};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let sink = PngSink::new("field-explorer.png", RenderConfig::default());
    let mut session = Session::new(sink);
    session.run(io::stdin().lock(), io::stdout().lock())
}
