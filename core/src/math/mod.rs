pub mod spectrum;
pub mod stats;

pub use spectrum::SpectrumHelper;
pub use stats::StatsHelper;
