//! Sampling core for the blade-harmonics explorer.
//!
//! Given a blade count, a phase shift, a resolution and a mean-subtraction flag, the sampler
//! produces two angle-ordered datasets: the per-blade sines with their sum, and the per-blade
//! squared sines with their sum. Chart renderers consume these records together with the text
//! formatters in [`labels`].

pub mod labels;
pub mod math;
pub mod prelude;
pub mod records;
pub mod sampler;

pub use prelude::{HarmonicsError, HarmonicsResult, SamplerParams, SeriesKind};
pub use records::{Dataset, DatasetSummary, HarmonicsDatasets, Sample};
pub use sampler::{generate, HarmonicsSampler};
