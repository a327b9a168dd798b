use anyhow::Context;
use harmonicscore::SamplerParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MAX_BLADES: usize = 8;
pub const MAX_RESOLUTION: usize = 1000;

/// Slider state for one run. Fields missing from a YAML file keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub blades: usize,
    /// Radians.
    pub phase_shift: f64,
    pub resolution: usize,
    pub subtract_mean: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            blades: 3,
            phase_shift: 0.0,
            resolution: 360,
            subtract_mean: false,
        }
    }
}

impl ExplorerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading explorer config {}", path_ref.display()))?;
        let config: ExplorerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing explorer config {}", path_ref.display()))?;
        config
            .check_bounds()
            .with_context(|| format!("validating explorer config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        blades: usize,
        phase_shift: f64,
        resolution: usize,
        subtract_mean: bool,
    ) -> Self {
        Self {
            blades,
            phase_shift,
            resolution,
            subtract_mean,
        }
    }

    /// Applies the same ranges the sliders offer.
    pub fn check_bounds(&self) -> anyhow::Result<()> {
        if !(1..=MAX_BLADES).contains(&self.blades) {
            anyhow::bail!("blades must be within 1..={}, got {}", MAX_BLADES, self.blades);
        }
        if !(1..=MAX_RESOLUTION).contains(&self.resolution) {
            anyhow::bail!(
                "resolution must be within 1..={}, got {}",
                MAX_RESOLUTION,
                self.resolution
            );
        }
        Ok(())
    }

    pub fn to_sampler_params(&self) -> SamplerParams {
        SamplerParams::new(
            self.blades,
            self.phase_shift,
            self.resolution,
            self.subtract_mean,
        )
    }
}
