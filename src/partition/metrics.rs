use crate::partition::Partition;

/// Mean and population standard deviation of the districts' optimization
/// values, taken once at the start of a trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl GlobalStats {
    /// Compute mean and population (divisor `n`) standard deviation.
    /// A spread within rounding error of the mean is reported as zero.
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() { return Self { mean: 0.0, std_dev: 0.0 } }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        let std_dev = if std_dev <= f64::EPSILON * mean.abs().max(1.0) { 0.0 } else { std_dev };
        Self { mean, std_dev }
    }

    /// Absolute standardized deviation of `value` from the mean.
    /// With zero spread every district sits at the mean and scores 0.
    #[inline]
    pub fn z(&self, value: f64) -> f64 {
        if self.std_dev > 0.0 { (value - self.mean).abs() / self.std_dev } else { 0.0 }
    }

    /// Distance of `value` from the mean.
    #[inline]
    pub fn deviation(&self, value: f64) -> f64 {
        (value - self.mean).abs()
    }
}

impl Partition {
    /// Sum over districts of the absolute standardized deviation from the mean.
    pub(crate) fn cumulative_z(&self, global: &GlobalStats) -> f64 {
        (0..self.num_districts())
            .map(|district| global.z(self.optimization_value(district)))
            .sum()
    }
}
