use serde::{Deserialize, Serialize};

/// Scalar inputs supplied by the controls on every redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerParams {
    pub blade_count: usize,
    /// Global phase offset in radians.
    pub phase_shift: f64,
    /// Number of samples over one rotation `[0, 2π)`.
    pub resolution: usize,
    pub subtract_mean: bool,
}

impl SamplerParams {
    pub fn new(blade_count: usize, phase_shift: f64, resolution: usize, subtract_mean: bool) -> Self {
        Self {
            blade_count,
            phase_shift,
            resolution,
            subtract_mean,
        }
    }

    /// Rejects parameters the sampler would divide by.
    pub fn validate(&self) -> HarmonicsResult<()> {
        if self.blade_count == 0 {
            return Err(HarmonicsError::InvalidBladeCount(self.blade_count));
        }
        if self.resolution == 0 {
            return Err(HarmonicsError::InvalidResolution(self.resolution));
        }
        Ok(())
    }
}

/// Which of the two parallel series a dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Sine,
    SquaredSine,
}

impl SeriesKind {
    pub fn title(&self) -> &'static str {
        match self {
            SeriesKind::Sine => "sin(θ + ψ_b)",
            SeriesKind::SquaredSine => "sin²(θ + ψ_b)",
        }
    }
}

/// Common error type for the sampling core.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HarmonicsError {
    #[error("invalid blade count {0}: at least one blade is required")]
    InvalidBladeCount(usize),
    #[error("invalid resolution {0}: at least one sample per rotation is required")]
    InvalidResolution(usize),
    #[error("invalid series: {0}")]
    InvalidSeries(String),
}

pub type HarmonicsResult<T> = Result<T, HarmonicsError>;
