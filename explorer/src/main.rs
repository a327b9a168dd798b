use anyhow::Context;
use chart::model::ChartModel;
use chart::render::{render, OutputFormat, SeriesSelection};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use workflow::config::{ExplorerConfig, MAX_BLADES, MAX_RESOLUTION};
use workflow::runner::Runner;

mod chart;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Samples blade harmonics and emits chart-ready series")]
struct Args {
    /// Load the slider state from YAML instead of the flags below
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 3)]
    blades: usize,
    /// Global phase shift in radians
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        conflicts_with = "phase_deg"
    )]
    phase: f64,
    /// Global phase shift in degrees
    #[arg(long, allow_negative_numbers = true)]
    phase_deg: Option<f64>,
    /// Samples per rotation
    #[arg(long, default_value_t = 360)]
    resolution: usize,
    /// Center every series on its mean over the rotation
    #[arg(long, default_value_t = false)]
    subtract_mean: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    #[arg(long, value_enum, default_value_t = SeriesSelection::Both)]
    series: SeriesSelection,
    /// Include the harmonic content of each sum series
    #[arg(long, default_value_t = false)]
    spectrum: bool,
    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn explorer_config(&self) -> anyhow::Result<ExplorerConfig> {
        if let Some(path) = &self.config {
            return ExplorerConfig::load(path);
        }
        let phase = self.phase_deg.map(f64::to_radians).unwrap_or(self.phase);
        let config =
            ExplorerConfig::from_args(self.blades, phase, self.resolution, self.subtract_mean);
        config.check_bounds().with_context(|| {
            format!(
                "sliders allow 1..={} blades and 1..={} samples",
                MAX_BLADES, MAX_RESOLUTION
            )
        })?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.explorer_config()?;
    let runner = Runner::new(config);
    let report = runner.execute(args.spectrum)?;
    info!(
        "sampled {} blades over {} points (subtract_mean={})",
        runner.config().blades,
        runner.config().resolution,
        runner.config().subtract_mean
    );

    let model = ChartModel::from_report(&report, &args.series.kinds())?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    render(&model, args.format, &mut out)?;
    out.flush().context("flushing output")?;

    Ok(())
}
