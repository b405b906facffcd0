use rand::Rng;

use crate::{
    config::SearchConfig,
    error::Result,
    partition::{GlobalStats, Partition},
};

/// Record of one completed trial.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TrialReport {
    pub(crate) trial: usize,
    /// Cumulative z-value before every executed round, then the final value.
    pub(crate) curve: Vec<f64>,
    pub(crate) final_z: f64,
}

impl TrialReport {
    /// Number of rounds the trial executed.
    #[inline] pub(crate) fn rounds(&self) -> usize { self.curve.len().saturating_sub(1) }
}

struct TrialState {
    global: GlobalStats,  // Fixed for the whole trial
    ceiling: i64,
    round: usize,
    curve: Vec<f64>,
}

impl TrialState {
    /// Mean of the trailing window of the curve minus its last entry,
    /// rounded to the configured number of decimals, is zero.
    fn has_plateaued(&self, config: &SearchConfig) -> bool {
        let Some(&current) = self.curve.last() else { return false };
        let window = &self.curve[self.curve.len().saturating_sub(config.plateau_window)..];
        let check = window.iter().sum::<f64>() / window.len() as f64 - current;
        (check * 10f64.powi(config.plateau_decimals)).round() == 0.0
    }

    fn should_stop(&self, config: &SearchConfig) -> bool {
        self.round >= config.min_rounds
            && (self.has_plateaued(config) || self.round > config.max_round_index)
    }
}

impl Partition {
    /// Run one trial of the rebalancing search in place.
    ///
    /// Every round visits the districts in ascending order and lets each one
    /// acquire at most one neighboring block. Whether a district explores
    /// (random feasible neighbor) or exploits (best improvement) is decided by
    /// a draw against an exploration ceiling that starts higher for later
    /// trials and cools after every round.
    pub(crate) fn run_trial<R: Rng + ?Sized>(&mut self, trial: usize, config: &SearchConfig, rng: &mut R) -> Result<TrialReport> {
        let mut state = TrialState {
            global: GlobalStats::of(&self.optimization_values()),
            ceiling: config.initial_ceiling(trial),
            round: 0,
            curve: Vec::with_capacity(config.max_round_index + 2),
        };

        loop {
            let z = self.cumulative_z(&state.global);
            state.curve.push(z);
            if state.should_stop(config) { break }

            state.round += 1;
            log::debug!("[trial] trial {trial} round {}: cumulative z-value {z:.5}", state.round);

            self.run_round(config, &state, rng)?;
            state.ceiling -= config.cooling_step;
        }

        let final_z = state.curve.last().copied().unwrap_or_default();
        log::info!("[trial] trial {trial} stopped after {} rounds with cumulative z-value {final_z:.5}", state.round);

        Ok(TrialReport { trial, curve: state.curve, final_z })
    }

    fn run_round<R: Rng + ?Sized>(&mut self, config: &SearchConfig, state: &TrialState, rng: &mut R) -> Result<()> {
        for district in 0..self.num_districts() {
            let trigger =
                if state.ceiling >= config.exploration_threshold { rng.random_range(0..=state.ceiling) }
                else { 0 };

            let pool = self.neighbors(district);
            let choice =
                if trigger > config.exploration_threshold { self.random_candidate(district, &pool, rng)? }
                else { self.best_candidate(district, &pool, &state.global)? };

            if let Some(block) = choice {
                log::trace!("[trial] district {district} takes block {block} from district {}", self.owner(block));
                self.transfer_block(block, district)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        SearchError,
        partition::testing::{GridBlock, grid_map},
    };

    fn worked_example() -> Partition {
        let map = grid_map(&[
            GridBlock::new(0, 0, 0).population(90, 10).students(10).school_building().distance(0, 1.0),
            GridBlock::new(1, 0, 1).population(10, 30).distance(0, 1.1).distance(1, 1.0),
            GridBlock::new(2, 0, 1).population(40, 20).school_building().distance(1, 1.0),
        ]);
        Partition::new(map, 1.2).unwrap()
    }

    /// 4x4 grid split into four 2x2 quadrants with uneven minority shares.
    /// Each district has room for one more block.
    fn quadrants() -> Partition {
        let cells = (0..4).flat_map(|y| (0..4).map(move |x| (x, y)))
            .map(|(x, y)| {
                let school = (x / 2 + 2 * (y / 2)) as u32;
                let minority = [5, 15, 25, 40][school as usize] + (x + y) as u32;
                let mut block = GridBlock::new(x, y, school).population(50 - minority / 2, minority);
                if x % 2 == 0 && y % 2 == 0 { block = block.school_building().students(3) }
                (0..4).fold(block, |block, s| {
                    let (cx, cy) = ((s % 2) * 2, (s / 2) * 2);
                    block.distance(s as u32, ((x - cx).abs() + (y - cy).abs()) as f64 * 100.0 + 50.0)
                })
            })
            .collect::<Vec<_>>();
        Partition::new(grid_map(&cells), 1.2).unwrap()
    }

    #[test]
    fn greedy_trial_on_the_worked_example() {
        // Trial 0 starts at ceiling 50: draws never exceed the threshold.
        let mut partition = worked_example();
        let mut rng = StdRng::seed_from_u64(0);
        let report = partition.run_trial(0, &SearchConfig::default(), &mut rng).unwrap();

        assert_eq!(partition.owner(1), 0);
        assert!((report.curve[0] - 2.0).abs() < 1e-12);
        assert!(report.curve[1] < report.curve[0]);

        // Nothing moves after the first round, so the earliest check stops it.
        assert_eq!(report.rounds(), 12);
        assert_eq!(report.curve.len(), 13);
        assert_eq!(report.final_z, report.curve[12]);
    }

    #[test]
    fn termination_waits_for_min_rounds() {
        let config = SearchConfig { min_rounds: 0, plateau_window: 1, ..SearchConfig::default() };
        let mut partition = worked_example();
        let report = partition.run_trial(0, &config, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(report.rounds(), 0);
        assert_eq!(partition.owner(1), 1);
    }

    fn state(round: usize, curve: Vec<f64>) -> TrialState {
        TrialState { global: GlobalStats::of(&[0.1, 0.5]), ceiling: 0, round, curve }
    }

    #[test]
    fn stops_on_a_plateau_after_min_rounds() {
        let config = SearchConfig::default();
        let flat = vec![2.0, 1.5, 1.25, 1.25, 1.25, 1.25];
        assert!(!state(11, flat.clone()).should_stop(&config));
        assert!(state(12, flat).should_stop(&config));
    }

    #[test]
    fn stops_past_the_round_limit_without_a_plateau() {
        let config = SearchConfig::default();
        let moving = |n: usize| (0..n).map(|i| 3.0 - i as f64 * 0.01).collect::<Vec<_>>();
        assert!(!state(12, moving(13)).should_stop(&config));
        assert!(!state(40, moving(41)).should_stop(&config));
        assert!(state(41, moving(42)).should_stop(&config));
    }

    #[test]
    fn rounds_are_bounded() {
        let config = SearchConfig::default();
        for trial in [0, 50, 99] {
            let mut partition = quadrants();
            let report = partition.run_trial(trial, &config, &mut StdRng::seed_from_u64(trial as u64)).unwrap();
            assert!(report.rounds() >= config.min_rounds);
            assert!(report.rounds() <= config.max_round_index + 1);
        }
    }

    #[test]
    fn same_seed_same_trial() {
        let config = SearchConfig::default();
        let run = || {
            let mut partition = quadrants();
            let report = partition.run_trial(80, &config, &mut StdRng::seed_from_u64(42)).unwrap();
            (report, partition.assignments().to_vec())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn caps_hold_after_a_trial() {
        let mut partition = quadrants();
        partition.run_trial(99, &SearchConfig::default(), &mut StdRng::seed_from_u64(7)).unwrap();

        for district in 0..partition.num_districts() {
            let caps = *partition.caps(district);
            assert!(partition.stats(district).students as f64 <= caps.student_limit);
            for &block in partition.members(district) {
                assert!(partition.map().require_distance(district, block).unwrap() <= caps.max_distance);
            }
        }
    }

    #[test]
    fn missing_distance_fails_the_trial() {
        // Block 1 borders district 0 but has no distance to school 0.
        let map = grid_map(&[
            GridBlock::new(0, 0, 0).population(90, 10).students(10).school_building().distance(0, 1.0),
            GridBlock::new(1, 0, 1).population(10, 30).distance(1, 1.0),
            GridBlock::new(2, 0, 1).population(40, 20).school_building().distance(1, 1.0),
        ]);
        let mut partition = Partition::new(map, 1.2).unwrap();
        let result = partition.run_trial(0, &SearchConfig::default(), &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(SearchError::MissingDistanceEntry { .. })));
    }
}
