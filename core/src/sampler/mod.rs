pub mod harmonics;

pub use harmonics::{generate, HarmonicsSampler};
