use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::sync::Arc;

/// Wraps the `rustfft` planner to read back which rotation harmonics a series contains.
pub struct SpectrumHelper {
    fft: Option<Arc<dyn Fft<f64>>>,
    len: usize,
}

impl SpectrumHelper {
    pub fn new(len: usize) -> Self {
        let fft = (len > 0).then(|| FftPlanner::<f64>::new().plan_fft_forward(len));
        Self { fft, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Amplitudes of harmonics `0..=len/2` of one rotation. Harmonic 0 is the mean of the series;
    /// harmonic `k > 0` is the amplitude of the `cos(kθ + φ)` component. Input shorter than the
    /// planned length is zero-padded; longer input is truncated.
    pub fn magnitudes(&self, series: &[f64]) -> Vec<f64> {
        let Some(fft) = self.fft.as_ref() else {
            return Vec::new();
        };

        let mut buffer: Vec<Complex64> = series
            .iter()
            .take(self.len)
            .map(|&value| Complex64::new(value, 0.0))
            .collect();
        buffer.resize(self.len, Complex64::zero());
        fft.process(&mut buffer);

        let n = self.len as f64;
        buffer
            .iter()
            .take(self.len / 2 + 1)
            .enumerate()
            .map(|(k, bin)| {
                let scale = if k == 0 || 2 * k == self.len { 1.0 } else { 2.0 };
                bin.norm() * scale / n
            })
            .collect()
    }
}
