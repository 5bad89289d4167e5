//! Line-oriented interactive session: the host that owns the charge store.
//!
//! Every command that changes the store or the plot settings is followed by an explicit
//! recompute-and-redraw through a [`FrameSink`]. An empty store declines to render.
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use charge_field::prelude::*;
use charge_field::settings::{GRID_DENSITY_BOUNDS, PLOT_RANGE_BOUNDS};
use tracing::{info, warn};

use crate::rendering::{render_field_plot_to_png, RenderConfig};

const HELP: &str = "\
commands:
  add <q> <x> <y>   append a charge
  remove <index>    remove the charge at index (see `list`)
  clear             remove every charge
  preset <name>     load a stock configuration: single-positive, single-negative,
                    dipole, like-pair, quadrupole, complex-arrangement
  density <n>       grid points per axis
  range <r>         plot both axes over (-r, r)
  list              show current charges
  render            redraw without changes
  help              show this text
  quit              leave the session";

const GREETING: &str = "Interactive electric field session. Type `help` for commands.";
const NOTHING_TO_DRAW: &str = "no charges to display; add a charge to see the field";

/// Destination for redrawn frames.
pub trait FrameSink {
    fn present(&mut self, plot: &FieldPlot) -> anyhow::Result<()>;
}

/// Overwrites one PNG file on every redraw.
#[derive(Debug, Clone)]
pub struct PngSink {
    pub path: PathBuf,
    pub config: RenderConfig,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>, config: RenderConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }
}

impl FrameSink for PngSink {
    fn present(&mut self, plot: &FieldPlot) -> anyhow::Result<()> {
        render_field_plot_to_png(plot, &self.config, &self.path)
    }
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Charge),
    Remove(usize),
    Clear,
    Preset(Preset),
    Density(usize),
    Range(f64),
    List,
    Render,
    Help,
    Quit,
}

fn arg<T>(args: &[&str], idx: usize, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .get(idx)
        .ok_or_else(|| anyhow!("missing argument <{name}>"))?;
    raw.parse()
        .with_context(|| format!("invalid <{name}>: '{raw}'"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            bail!("empty command");
        };
        let expected = match head.to_ascii_lowercase().as_str() {
            "add" => 3,
            "remove" | "rm" | "preset" | "density" | "range" => 1,
            _ => 0,
        };
        if args.len() > expected {
            bail!("too many arguments for '{head}'");
        }

        let command = match head.to_ascii_lowercase().as_str() {
            "add" => Command::Add(Charge::new(
                arg(args, 0, "q")?,
                arg(args, 1, "x")?,
                arg(args, 2, "y")?,
            )),
            "remove" | "rm" => Command::Remove(arg(args, 0, "index")?),
            "clear" => Command::Clear,
            "preset" => {
                let name = args
                    .first()
                    .ok_or_else(|| anyhow!("missing argument <name>"))?;
                Command::Preset(name.parse()?)
            }
            "density" => Command::Density(arg(args, 0, "n")?),
            "range" => Command::Range(arg(args, 0, "r")?),
            "list" | "ls" => Command::List,
            "render" => Command::Render,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command '{other}' (try `help`)"),
        };
        Ok(command)
    }
}

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Host state: the charge store, plot settings, and where frames go.
pub struct Session<S: FrameSink> {
    store: ChargeStore,
    settings: PlotSettings,
    options: PlotOptions,
    sink: S,
    frames: usize,
}

impl<S: FrameSink> Session<S> {
    /// Starts with the dipole and default settings.
    pub fn new(sink: S) -> Self {
        Self {
            store: ChargeStore::default(),
            settings: PlotSettings::default(),
            options: PlotOptions::default(),
            sink,
            frames: 0,
        }
    }

    pub fn with_store(mut self, store: ChargeStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_settings(mut self, settings: PlotSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &ChargeStore {
        &self.store
    }

    pub fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Frames presented so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Recomputes the field from the current store and presents it.
    ///
    /// Returns `false` without touching the sink when there are no charges.
    pub fn redraw(&mut self) -> anyhow::Result<bool> {
        if self.store.is_empty() {
            warn!("No charges to display; skipping render.");
            return Ok(false);
        }
        let charges = self.store.as_slice();
        let plot = FieldPlot::from_settings(charges, &self.settings, &self.options)?;
        self.sink.present(&plot)?;
        self.frames += 1;
        Ok(true)
    }

    /// Applies one command, writing feedback to `out`.
    pub fn apply(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<Flow> {
        match command {
            Command::Add(charge) => {
                let idx = self.store.push(charge)?;
                let Charge { q, x, y } = charge;
                info!("Added charge #{idx}: q={q}, x={x}, y={y}.");
                writeln!(out, "added #{idx}: q={q} at ({x}, {y})")?;
            }
            Command::Remove(idx) => {
                let Charge { q, x, y } = self.store.remove_at(idx)?;
                info!("Removed charge #{idx}.");
                writeln!(out, "removed #{idx}: q={q} at ({x}, {y})")?;
            }
            Command::Clear => {
                self.store.clear();
                writeln!(out, "cleared all charges")?;
            }
            Command::Preset(preset) => {
                self.store.load_preset(preset);
                info!("Loaded preset '{preset}'.");
                writeln!(out, "loaded {preset} ({} charges)", self.store.len())?;
            }
            Command::Density(n) => {
                let next = self.settings.with_grid_density(n);
                next.validate().with_context(|| {
                    format!(
                        "density must be between {} and {}",
                        GRID_DENSITY_BOUNDS.start(),
                        GRID_DENSITY_BOUNDS.end()
                    )
                })?;
                self.settings = next;
                writeln!(out, "grid density set to {n}")?;
            }
            Command::Range(r) => {
                let next = self.settings.with_plot_range(r);
                next.validate().with_context(|| {
                    format!(
                        "range must be between {} and {}",
                        PLOT_RANGE_BOUNDS.start(),
                        PLOT_RANGE_BOUNDS.end()
                    )
                })?;
                self.settings = next;
                writeln!(out, "plot range set to ({}, {})", -r, r)?;
            }
            Command::List => {
                self.write_charges(out)?;
                return Ok(Flow::Continue);
            }
            Command::Render => {}
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        if self.redraw()? {
            writeln!(out, "redrawn (frame {})", self.frames)?;
        } else {
            writeln!(out, "{NOTHING_TO_DRAW}")?;
        }
        Ok(Flow::Continue)
    }

    /// Reads commands until `quit` or end of input. Command errors are reported and skipped.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
        writeln!(out, "{GREETING}")?;
        match self.redraw() {
            Ok(true) => writeln!(out, "redrawn (frame {})", self.frames)?,
            Ok(false) => writeln!(out, "{NOTHING_TO_DRAW}")?,
            Err(err) => writeln!(out, "error: {err:#}")?,
        }

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let outcome = trimmed
                .parse::<Command>()
                .and_then(|command| self.apply(command, &mut out));
            match outcome {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => writeln!(out, "error: {err:#}")?,
            }
        }
        Ok(())
    }

    fn write_charges(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.store.is_empty() {
            writeln!(out, "no charges added yet")?;
            return Ok(());
        }
        writeln!(out, "{:>3}  {:>8}  {:>8}  {:>8}", "#", "q", "x", "y")?;
        for (idx, c) in self.store.iter().enumerate() {
            writeln!(out, "{idx:>3}  {:>8.2}  {:>8.2}  {:>8.2}", c.q, c.x, c.y)?;
        }
        Ok(())
    }
}
