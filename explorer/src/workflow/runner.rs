use crate::workflow::config::ExplorerConfig;
use anyhow::Context;
use harmonicscore::{DatasetSummary, HarmonicsDatasets, HarmonicsSampler};
use serde::Serialize;

/// Harmonic amplitudes of each sum series.
#[derive(Debug, Clone, Serialize)]
pub struct SumSpectra {
    pub sine: Vec<f64>,
    pub squared: Vec<f64>,
}

pub struct RunReport {
    pub datasets: HarmonicsDatasets,
    pub summaries: Vec<DatasetSummary>,
    pub spectra: Option<SumSpectra>,
}

#[derive(Clone)]
pub struct Runner {
    config: ExplorerConfig,
    sampler: HarmonicsSampler,
}

impl Runner {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            sampler: HarmonicsSampler::new(),
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn execute(&self, with_spectrum: bool) -> anyhow::Result<RunReport> {
        let params = self.config.to_sampler_params();
        let datasets = self
            .sampler
            .generate(&params)
            .context("sampling blade harmonics")?;

        let summaries = vec![datasets.sine.summary(), datasets.squared.summary()];
        let spectra = with_spectrum.then(|| SumSpectra {
            sine: datasets.sine.sum_spectrum(),
            squared: datasets.squared.sum_spectrum(),
        });

        Ok(RunReport {
            datasets,
            summaries,
            spectra,
        })
    }
}
