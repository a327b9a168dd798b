use crate::math::{SpectrumHelper, StatsHelper};
use crate::prelude::{HarmonicsError, HarmonicsResult, SamplerParams, SeriesKind};
use crate::records::sample::Sample;
use serde::{Deserialize, Serialize};

/// Ordered, angle-ascending sequence of samples for one series kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub kind: SeriesKind,
    pub samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(kind: SeriesKind, samples: Vec<Sample>) -> Self {
        Self { kind, samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn blade_count(&self) -> usize {
        self.samples.first().map(Sample::blade_count).unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn angles(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.angle).collect()
    }

    pub fn sum_series(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.sum).collect()
    }

    /// Values of a single blade across the rotation.
    pub fn blade_series(&self, blade: usize) -> HarmonicsResult<Vec<f64>> {
        if blade >= self.blade_count() {
            return Err(HarmonicsError::InvalidSeries(format!(
                "blade {} out of range for {} blades",
                blade,
                self.blade_count()
            )));
        }
        self.samples
            .iter()
            .map(|sample| sample.value(blade))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| {
                HarmonicsError::InvalidSeries(format!("blade {} missing from some samples", blade))
            })
    }

    pub fn summary(&self) -> DatasetSummary {
        let sums = self.sum_series();
        let (min_sum, max_sum) = StatsHelper::extent(&sums).unwrap_or((0.0, 0.0));
        DatasetSummary {
            kind: self.kind,
            samples: sums.len(),
            min_sum,
            max_sum,
            mean_sum: StatsHelper::mean(&sums),
            rms_sum: StatsHelper::rms(&sums),
        }
    }

    /// Harmonic amplitudes of the sum series over one rotation.
    pub fn sum_spectrum(&self) -> Vec<f64> {
        SpectrumHelper::new(self.len()).magnitudes(&self.sum_series())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Aggregate view of a dataset's sum series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub kind: SeriesKind,
    pub samples: usize,
    pub min_sum: f64,
    pub max_sum: f64,
    pub mean_sum: f64,
    pub rms_sum: f64,
}

/// Both series produced by one sampling run, together with the inputs that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicsDatasets {
    pub params: SamplerParams,
    pub sine: Dataset,
    pub squared: Dataset,
}

impl HarmonicsDatasets {
    pub fn get(&self, kind: SeriesKind) -> &Dataset {
        match kind {
            SeriesKind::Sine => &self.sine,
            SeriesKind::SquaredSine => &self.squared,
        }
    }

    pub fn into_pair(self) -> (Dataset, Dataset) {
        (self.sine, self.squared)
    }
}
