//! Search configuration.
//!
//! Every tunable of the trial loop and the search controller lives here so a
//! run can be described by one serializable value. The defaults reproduce the
//! reference schedule: 100 trials, 20% caps, exploration ceiling starting at
//! `floor(0.75 * trial + 50)` and cooling by 5 per round, plateau check over
//! the last 4 rounds from round 12, hard stop after round 40.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of independent trials.
    pub trials: usize,

    /// Multiplier applied to the original maximum walking distance and the
    /// original student count to obtain each district's frozen caps.
    pub cap_factor: f64,

    /// Exploration ceiling at trial 0.
    pub ceiling_base: f64,

    /// Ceiling increase per trial index.
    pub ceiling_slope: f64,

    /// Ceiling decrease after every round.
    pub cooling_step: i64,

    /// Draws are taken only while the ceiling is at least this value; a draw
    /// strictly above it selects a random neighbor instead of the best one.
    pub exploration_threshold: i64,

    /// First round index at which the plateau check runs.
    pub min_rounds: usize,

    /// Round index beyond which a trial always stops.
    pub max_round_index: usize,

    /// Number of trailing z-values averaged by the plateau check.
    pub plateau_window: usize,

    /// Decimal digits the plateau difference is rounded to.
    pub plateau_decimals: i32,

    /// Base seed for the per-trial random streams. `None` draws one at start.
    pub seed: Option<u64>,

    /// Run trials on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            cap_factor: 1.20,
            ceiling_base: 50.0,
            ceiling_slope: 0.75,
            cooling_step: 5,
            exploration_threshold: 50,
            min_rounds: 12,
            max_round_index: 40,
            plateau_window: 4,
            plateau_decimals: 5,
            seed: None,
            parallel: true,
        }
    }
}

impl SearchConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_cap_factor(mut self, cap_factor: f64) -> Self {
        self.cap_factor = cap_factor;
        self
    }

    /// Starting exploration ceiling for the given trial index.
    pub fn initial_ceiling(&self, trial: usize) -> i64 {
        (self.ceiling_slope * trial as f64 + self.ceiling_base).floor() as i64
    }

    /// Check that the configuration describes a runnable search.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(SearchError::invalid_input("trials must be at least 1"));
        }
        if !(self.cap_factor.is_finite() && self.cap_factor > 0.0) {
            return Err(SearchError::invalid_input(format!("cap_factor must be positive, got {}", self.cap_factor)));
        }
        if self.plateau_window == 0 || self.plateau_window > self.min_rounds + 1 {
            return Err(SearchError::invalid_input(format!(
                "plateau_window must be in [1, {}], got {}", self.min_rounds + 1, self.plateau_window
            )));
        }
        if self.exploration_threshold < 0 {
            return Err(SearchError::invalid_input(format!(
                "exploration_threshold must not be negative, got {}", self.exploration_threshold
            )));
        }
        if self.cooling_step < 0 {
            return Err(SearchError::invalid_input("cooling_step must not be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ceiling_schedule() {
        let config = SearchConfig::default();
        assert_eq!(config.initial_ceiling(0), 50);
        assert_eq!(config.initial_ceiling(1), 50);
        assert_eq!(config.initial_ceiling(2), 51);
        assert_eq!(config.initial_ceiling(99), 124);
    }

    #[test]
    fn default_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_trials() {
        assert!(SearchConfig::default().with_trials(0).validate().is_err());
    }

    #[test]
    fn rejects_negative_exploration_threshold() {
        let config = SearchConfig { exploration_threshold: -100, ..SearchConfig::default() };
        assert!(matches!(config.validate(), Err(SearchError::InvalidInput(_))));

        let config = SearchConfig { exploration_threshold: 0, ..SearchConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{ "trials": 7, "seed": 3 }"#).unwrap();
        assert_eq!(config.trials, 7);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_round_index, 40);
    }
}
