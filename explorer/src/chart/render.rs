use crate::chart::model::{blade_key, ChartModel, SUM_KEY};
use anyhow::Context;
use clap::ValueEnum;
use harmonicscore::labels::format_tooltip_value;
use harmonicscore::SeriesKind;
use log::info;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesSelection {
    Sine,
    Squared,
    Both,
}

impl SeriesSelection {
    pub fn kinds(&self) -> Vec<SeriesKind> {
        match self {
            SeriesSelection::Sine => vec![SeriesKind::Sine],
            SeriesSelection::Squared => vec![SeriesKind::SquaredSine],
            SeriesSelection::Both => vec![SeriesKind::Sine, SeriesKind::SquaredSine],
        }
    }
}

/// Writes a chart model to `out` in the requested format.
pub fn render<W: Write>(
    model: &ChartModel,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, model).context("serialising chart model")?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(model, out)?,
        OutputFormat::Table => write_table(model, out)?,
    }
    info!(
        "rendered {} panel(s) for {} blades x {} samples",
        model.panels.len(),
        model.params.blade_count,
        model.params.resolution
    );
    Ok(())
}

fn header(blades: usize) -> Vec<String> {
    (0..blades).map(blade_key).chain([SUM_KEY.to_string()]).collect()
}

fn write_csv<W: Write>(model: &ChartModel, out: &mut W) -> anyhow::Result<()> {
    let blades = model.params.blade_count;
    let with_kind = model.panels.len() > 1;
    let mut columns = vec!["angle".to_string(), "label".to_string()];
    if with_kind {
        columns.insert(0, "series".to_string());
    }
    columns.extend(header(blades));
    writeln!(out, "{}", columns.join(","))?;

    for panel in &model.panels {
        for (index, (angle, label)) in panel.angles.iter().zip(&panel.labels).enumerate() {
            let mut row = Vec::with_capacity(columns.len());
            if with_kind {
                row.push(kind_name(panel.kind).to_string());
            }
            row.push(angle.to_string());
            row.push(label.clone());
            row.extend(panel.series.iter().map(|series| series.values[index].to_string()));
            writeln!(out, "{}", row.join(","))?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(model: &ChartModel, out: &mut W) -> anyhow::Result<()> {
    let columns = header(model.params.blade_count);
    for panel in &model.panels {
        writeln!(out, "{}", panel.title)?;
        write!(out, "{:>8} {:>5}", "angle", "tick")?;
        for column in &columns {
            write!(out, " {:>9}", column)?;
        }
        writeln!(out)?;

        for (index, label) in panel.labels.iter().enumerate() {
            write!(out, "{:>8} {:>5}", label, panel.ticks[index])?;
            for series in &panel.series {
                write!(out, " {:>9}", series.tooltips[index])?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }

    for summary in &model.summaries {
        writeln!(
            out,
            "{} sum: min {} max {} mean {} rms {}",
            kind_name(summary.kind),
            format_tooltip_value(summary.min_sum),
            format_tooltip_value(summary.max_sum),
            format_tooltip_value(summary.mean_sum),
            format_tooltip_value(summary.rms_sum)
        )?;
    }

    if let Some(spectra) = &model.spectra {
        for (name, magnitudes) in [("sine", &spectra.sine), ("squared_sine", &spectra.squared)] {
            let harmonics: Vec<String> = magnitudes
                .iter()
                .enumerate()
                .filter(|(_, m)| m.abs() >= 1e-9)
                .map(|(k, m)| format!("h{}={}", k, format_tooltip_value(*m)))
                .collect();
            let listing = if harmonics.is_empty() {
                "none".to_string()
            } else {
                harmonics.join(" ")
            };
            writeln!(out, "{} sum harmonics: {}", name, listing)?;
        }
    }
    Ok(())
}

fn kind_name(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Sine => "sine",
        SeriesKind::SquaredSine => "squared_sine",
    }
}
