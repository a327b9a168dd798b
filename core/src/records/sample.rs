use crate::labels::sample_label;
use serde::{Deserialize, Serialize};

/// One point of a series: the rotation angle, its label, one value per blade and their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub angle: f64,
    pub label: String,
    /// Indexed by blade number.
    pub values: Vec<f64>,
    pub sum: f64,
}

impl Sample {
    pub fn new(angle: f64, values: Vec<f64>, sum: f64) -> Self {
        Self {
            angle,
            label: sample_label(angle),
            values,
            sum,
        }
    }

    pub fn blade_count(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, blade: usize) -> Option<f64> {
        self.values.get(blade).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn sample_carries_formatted_label() {
        let sample = Sample::new(PI, vec![0.0, 0.0], 0.0);
        assert_eq!(sample.label, "1.00π");
        assert_eq!(sample.blade_count(), 2);
        assert_eq!(sample.value(1), Some(0.0));
        assert_eq!(sample.value(2), None);
    }

    #[test]
    fn sample_serializes_values_as_array() {
        let sample = Sample::new(0.0, vec![0.25, 0.75], 1.0);
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["label"], "0.00π");
        assert_eq!(json["values"][1], 0.75);
        assert_eq!(json["sum"], 1.0);
    }
}
