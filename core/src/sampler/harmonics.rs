use crate::prelude::{HarmonicsResult, SamplerParams, SeriesKind};
use crate::records::{Dataset, HarmonicsDatasets, Sample};
use log::debug;
use ndarray::{Array1, Array2, Axis};
use std::f64::consts::TAU;

/// Samples the per-blade sine and squared-sine series over one full rotation.
///
/// The sampler holds no state: every call validates its parameters and rebuilds both datasets
/// from scratch, so it may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonicsSampler;

/// Per-series matrices of raw values, `resolution` rows by `blade_count` columns.
struct RawSeries {
    values: Array2<f64>,
    sums: Array1<f64>,
}

impl RawSeries {
    fn new(values: Array2<f64>) -> Self {
        let sums = values.sum_axis(Axis(1));
        Self { values, sums }
    }

    /// Column means followed by the mean of the sums, or zeros when centering is off.
    fn means(&self, subtract_mean: bool) -> (Array1<f64>, f64) {
        if !subtract_mean {
            return (Array1::zeros(self.values.ncols()), 0.0);
        }
        let blade_means = self
            .values
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(self.values.ncols()));
        let sum_mean = self.sums.mean().unwrap_or(0.0);
        (blade_means, sum_mean)
    }

    fn assemble(&self, kind: SeriesKind, angles: &[f64], subtract_mean: bool) -> Dataset {
        let (blade_means, sum_mean) = self.means(subtract_mean);
        let samples = self
            .values
            .outer_iter()
            .zip(self.sums.iter())
            .zip(angles)
            .map(|((row, &sum), &angle)| {
                let values = row
                    .iter()
                    .zip(blade_means.iter())
                    .map(|(&value, &mean)| value - mean)
                    .collect();
                Sample::new(angle, values, sum - sum_mean)
            })
            .collect();
        Dataset::new(kind, samples)
    }
}

impl HarmonicsSampler {
    pub fn new() -> Self {
        Self
    }

    /// Angle of sample `index` for the given resolution: `2π·index/resolution`.
    pub fn sample_angle(index: usize, resolution: usize) -> f64 {
        TAU * index as f64 / resolution as f64
    }

    /// Phase of blade `blade`: the global shift plus an even share of a full turn.
    pub fn blade_phase(params: &SamplerParams, blade: usize) -> f64 {
        params.phase_shift + TAU * blade as f64 / params.blade_count as f64
    }

    /// Produces the sine and squared-sine datasets for `params`.
    pub fn generate(&self, params: &SamplerParams) -> HarmonicsResult<HarmonicsDatasets> {
        params.validate()?;
        debug!(
            "sampling {} blades, phase {:.4} rad, {} samples, subtract_mean={}",
            params.blade_count, params.phase_shift, params.resolution, params.subtract_mean
        );

        let angles: Vec<f64> = (0..params.resolution)
            .map(|index| Self::sample_angle(index, params.resolution))
            .collect();
        let phases: Vec<f64> = (0..params.blade_count)
            .map(|blade| Self::blade_phase(params, blade))
            .collect();

        let shape = (params.resolution, params.blade_count);
        let sine = Array2::from_shape_fn(shape, |(i, b)| (angles[i] + phases[b]).sin());
        let squared = sine.mapv(|value| value * value);

        let sine = RawSeries::new(sine);
        let squared = RawSeries::new(squared);

        Ok(HarmonicsDatasets {
            params: *params,
            sine: sine.assemble(SeriesKind::Sine, &angles, params.subtract_mean),
            squared: squared.assemble(SeriesKind::SquaredSine, &angles, params.subtract_mean),
        })
    }
}

/// Convenience wrapper taking the four scalar inputs directly.
pub fn generate(
    blade_count: usize,
    phase_shift: f64,
    resolution: usize,
    subtract_mean: bool,
) -> HarmonicsResult<HarmonicsDatasets> {
    HarmonicsSampler::new().generate(&SamplerParams::new(
        blade_count,
        phase_shift,
        resolution,
        subtract_mean,
    ))
}
