use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;

use crate::{
    config::SearchConfig,
    error::{Result, SearchError, TrialFailure},
    partition::{Partition, algorithm::TrialReport},
};

/// The winning trial of a search plus diagnostics for every trial.
#[derive(Clone, Debug)]
pub(crate) struct SearchResult {
    pub(crate) best: Partition,
    pub(crate) best_trial: usize,
    pub(crate) reports: Vec<TrialReport>,  // Successful trials, in trial order
    pub(crate) failures: Vec<TrialFailure>,
    pub(crate) seed: u64,
}

impl SearchResult {
    /// Report of the winning trial.
    pub(crate) fn best_report(&self) -> Option<&TrialReport> {
        self.reports.iter().find(|report| report.trial == self.best_trial)
    }
}

impl Partition {
    /// Run `config.trials` independent trials from this partition and keep the
    /// one with the lowest final cumulative z-value (ties go to the lowest
    /// trial index).
    ///
    /// Trial `t` draws from `StdRng::seed_from_u64(seed + t)`, so a fixed seed
    /// reproduces the search exactly whether trials run in parallel or not.
    /// A failing trial is recorded and skipped; the search fails only if every
    /// trial does.
    pub(crate) fn search(&self, config: &SearchConfig) -> Result<SearchResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| {
            let seed: u64 = rand::random();
            log::info!("[search] no seed configured, using {seed}");
            seed
        });

        log::info!(
            "[search] running {} trials over {} districts ({})",
            config.trials, self.num_districts(), if config.parallel { "parallel" } else { "serial" },
        );

        let run_trial = |trial: usize| {
            let mut partition = self.clone();
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
            let outcome = partition.run_trial(trial, config, &mut rng);
            (trial, outcome.map(|report| (partition, report)))
        };

        let outcomes: Vec<_> =
            if config.parallel { (0..config.trials).into_par_iter().map(run_trial).collect() }
            else { (0..config.trials).map(run_trial).collect() };

        let mut best: Option<(Partition, usize, f64)> = None;
        let mut reports = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();

        for (trial, outcome) in outcomes {
            match outcome {
                Ok((partition, report)) => {
                    if best.as_ref().is_none_or(|&(_, _, z)| report.final_z < z) {
                        best = Some((partition, trial, report.final_z));
                    }
                    reports.push(report);
                }
                Err(error) => {
                    log::warn!("[search] trial {trial} failed: {error}");
                    failures.push(TrialFailure { trial, error });
                }
            }
        }

        let Some((best, best_trial, best_z)) = best else {
            return Err(SearchError::AllTrialsFailed(failures))
        };

        log::info!(
            "[search] best trial {best_trial} with cumulative z-value {best_z:.5} ({} of {} trials failed)",
            failures.len(), config.trials,
        );

        Ok(SearchResult { best, best_trial, reports, failures, seed })
    }
}
