use rand::{Rng, seq::IndexedRandom};

use crate::{
    error::Result,
    partition::{GlobalStats, Partition},
};

/// Optimization values of the two districts involved in moving one block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MoveScore {
    pub(crate) block: usize,
    pub(crate) donor_before: f64,
    pub(crate) donor_after: f64,
    pub(crate) own_before: f64,
    pub(crate) own_after: f64,
}

impl MoveScore {
    /// The donor may lose the block if its own deviation from the mean does not
    /// grow, or if the gap between the donor's and the acquirer's deviations
    /// narrows.
    pub(crate) fn acceptable(&self, global: &GlobalStats) -> bool {
        let mean = global.mean;
        let donor_no_worse = global.deviation(self.donor_after) <= global.deviation(self.donor_before);
        let gap_before = ((self.donor_before - mean) - (self.own_before - mean)).abs();
        let gap_after = ((self.donor_after - mean) - (self.own_after - mean)).abs();
        donor_no_worse || gap_before > gap_after
    }

    /// The acquirer's distance from the mean after the move.
    #[inline]
    pub(crate) fn resulting_deviation(&self, global: &GlobalStats) -> f64 {
        global.deviation(self.own_after)
    }
}

impl Partition {
    /// Score moving `block` from its current owner into `district`.
    pub(crate) fn score_move(&self, district: usize, block: usize) -> MoveScore {
        let candidate = self.map().block_at(block);
        let donor = self.stats(self.owner(block));
        let own = self.stats(district);

        MoveScore {
            block,
            donor_before: donor.optimization_value,
            donor_after: donor.value_without(candidate.majority, candidate.minority),
            own_before: own.optimization_value,
            own_after: own.value_with(candidate.majority, candidate.minority),
        }
    }

    /// Best-improvement selection: among feasible, acceptable candidates in
    /// `pool`, the one that brings `district` closest to the mean, provided it
    /// strictly improves on the district's current deviation. Ties keep the
    /// earliest candidate in `pool`.
    pub(crate) fn best_candidate(&self, district: usize, pool: &[usize], global: &GlobalStats) -> Result<Option<usize>> {
        let current = global.deviation(self.optimization_value(district));

        let best = self.feasible_candidates(district, pool)?.into_iter()
            .map(|block| self.score_move(district, block))
            .filter(|score| score.acceptable(global))
            .map(|score| (score.block, score.resulting_deviation(global)))
            .filter(|&(_, deviation)| deviation < current)
            .fold(None, |best: Option<(usize, f64)>, (block, deviation)| match best {
                Some((_, best_deviation)) if best_deviation <= deviation => best,
                _ => Some((block, deviation)),
            });

        Ok(best.map(|(block, _)| block))
    }

    /// Random-exploration selection: a uniformly random feasible candidate.
    pub(crate) fn random_candidate<R: Rng + ?Sized>(&self, district: usize, pool: &[usize], rng: &mut R) -> Result<Option<usize>> {
        Ok(self.feasible_candidates(district, pool)?.choose(rng).copied())
    }
}
