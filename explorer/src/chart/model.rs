use crate::workflow::runner::{RunReport, SumSpectra};
use anyhow::Context;
use harmonicscore::labels::{format_angle_to_pi, format_tooltip_value};
use harmonicscore::{Dataset, DatasetSummary, HarmonicsResult, SamplerParams, SeriesKind};
use serde::Serialize;

pub const SUM_KEY: &str = "sum";

pub fn blade_key(blade: usize) -> String {
    format!("blade{}", blade)
}

/// One line of a chart, keyed by blade index or `sum`.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub key: String,
    pub values: Vec<f64>,
    pub tooltips: Vec<String>,
}

impl ChartSeries {
    fn new(key: String, values: Vec<f64>) -> Self {
        let tooltips = values.iter().map(|&v| format_tooltip_value(v)).collect();
        Self {
            key,
            values,
            tooltips,
        }
    }
}

/// Everything a line-chart renderer needs to draw one dataset left to right.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPanel {
    pub kind: SeriesKind,
    pub title: String,
    pub angles: Vec<f64>,
    pub labels: Vec<String>,
    /// Axis tick text per sample; empty except at quarter turns.
    pub ticks: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartPanel {
    pub fn from_dataset(dataset: &Dataset) -> HarmonicsResult<Self> {
        let mut series = (0..dataset.blade_count())
            .map(|blade| {
                let values = dataset.blade_series(blade)?;
                Ok(ChartSeries::new(blade_key(blade), values))
            })
            .collect::<HarmonicsResult<Vec<ChartSeries>>>()?;
        series.push(ChartSeries::new(SUM_KEY.to_string(), dataset.sum_series()));

        Ok(Self {
            kind: dataset.kind,
            title: dataset.kind.title().to_string(),
            angles: dataset.angles(),
            labels: dataset.iter().map(|sample| sample.label.clone()).collect(),
            ticks: dataset
                .iter()
                .map(|sample| format_angle_to_pi(sample.angle).to_string())
                .collect(),
            series,
        })
    }

    #[cfg(test)]
    pub fn series(&self, key: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|series| series.key == key)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartModel {
    pub params: SamplerParams,
    pub panels: Vec<ChartPanel>,
    pub summaries: Vec<DatasetSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectra: Option<SumSpectra>,
}

impl ChartModel {
    pub fn from_report(report: &RunReport, kinds: &[SeriesKind]) -> anyhow::Result<Self> {
        let panels = kinds
            .iter()
            .map(|&kind| {
                ChartPanel::from_dataset(report.datasets.get(kind))
                    .with_context(|| format!("building {:?} chart panel", kind))
            })
            .collect::<anyhow::Result<Vec<ChartPanel>>>()?;
        let summaries = report
            .summaries
            .iter()
            .filter(|summary| kinds.contains(&summary.kind))
            .cloned()
            .collect();

        Ok(Self {
            params: report.datasets.params,
            panels,
            summaries,
            spectra: report.spectra.clone(),
        })
    }
}
