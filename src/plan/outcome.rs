use serde::Serialize;

use crate::{error::TrialFailure, partition::TrialReport, plan::Plan};

/// Cumulative z-value curve of one trial.
///
/// `curve` starts with the value of the input plan and then holds one value
/// per executed round, so `curve.len() == rounds + 1` (at most 42 entries with
/// the default round limit).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialCurve {
    pub trial: usize,
    pub rounds: usize,
    pub final_z: f64,
    /// Baseline value, then the value after every executed round.
    pub curve: Vec<f64>,
}

impl From<TrialReport> for TrialCurve {
    fn from(report: TrialReport) -> Self {
        Self { trial: report.trial, rounds: report.rounds(), final_z: report.final_z, curve: report.curve }
    }
}

/// Result of a multi-trial search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Plan of the trial with the lowest final cumulative z-value.
    pub best: Plan,
    pub best_trial: usize,
    pub best_curve: Vec<f64>,
    pub best_z: f64,
    /// Curves of every successful trial, in trial order.
    pub curves: Vec<TrialCurve>,
    pub failures: Vec<TrialFailure>,
    /// Base seed the per-trial random streams were derived from.
    pub seed: u64,
}

impl SearchOutcome {
    /// Number of trials that ran to completion.
    #[inline] pub fn completed(&self) -> usize { self.curves.len() }
}
