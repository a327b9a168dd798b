pub mod dataset;
pub mod sample;

pub use dataset::{Dataset, DatasetSummary, HarmonicsDatasets};
pub use sample::Sample;
