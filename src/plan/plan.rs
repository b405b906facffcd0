use std::sync::Arc;

use geo::MultiPolygon;
use rand::Rng;

use crate::{
    config::SearchConfig,
    error::{Result, SearchError},
    map::{BlockId, Map, SchoolId},
    partition::{DistrictCaps, GlobalStats, Partition},
    plan::{SearchOutcome, TrialCurve},
};

/// A catchment plan, assigning every block to one school district.
#[derive(Clone, Debug)]
pub struct Plan {
    pub(super) partition: Partition,
}

/// A read-only view of one district of a plan.
#[derive(Clone, Debug)]
pub struct DistrictSummary {
    pub school: SchoolId,
    pub blocks: Vec<BlockId>,
    pub geometry: MultiPolygon<f64>,
    pub majority: u64,
    pub minority: u64,
    pub student_count: u64,
    pub optimization_value: f64,
    pub caps: DistrictCaps,
}

impl Plan {
    /// Create the plan given by the map's input assignment. District caps are
    /// `cap_factor` times each district's original walking distance and
    /// student count.
    pub fn new(map: impl Into<Arc<Map>>, cap_factor: f64) -> Result<Self> {
        Ok(Self { partition: Partition::new(map, cap_factor)? })
    }

    /// Create the input plan with the caps described by `config`.
    #[inline]
    pub fn from_config(map: impl Into<Arc<Map>>, config: &SearchConfig) -> Result<Self> {
        Self::new(map, config.cap_factor)
    }

    /// Get a reference to the map.
    #[inline] pub fn map(&self) -> &Map { self.partition.map() }

    /// Get the number of districts in this plan.
    #[inline] pub fn num_districts(&self) -> usize { self.partition.num_districts() }

    /// School currently serving `block`.
    pub fn school_of(&self, block: BlockId) -> Option<SchoolId> {
        let idx = self.map().block_index(block)?;
        Some(self.map().school_at(self.partition.owner(idx)))
    }

    /// Get the block assignments, in ascending block order.
    pub fn assignments(&self) -> Vec<(BlockId, SchoolId)> {
        self.partition.assignments().iter().enumerate()
            .map(|(block, &district)| (self.map().block_at(block).id, self.map().school_at(district)))
            .collect()
    }

    /// Summaries of every district, in ascending school order.
    pub fn districts(&self) -> Vec<DistrictSummary> {
        (0..self.num_districts()).map(|district| self.summary(district)).collect()
    }

    /// Summary of the district served by `school`.
    pub fn district(&self, school: SchoolId) -> Option<DistrictSummary> {
        self.map().district_index(school).map(|district| self.summary(district))
    }

    /// Optimization value (minority share) of every district, in school order.
    #[inline] pub fn optimization_values(&self) -> Vec<f64> { self.partition.optimization_values() }

    /// Mean and population standard deviation of the optimization values.
    #[inline] pub fn global_stats(&self) -> GlobalStats { GlobalStats::of(&self.optimization_values()) }

    /// Sum over districts of `|value - mean| / std_dev`.
    #[inline] pub fn cumulative_z(&self, global: &GlobalStats) -> f64 { self.partition.cumulative_z(global) }

    /// Blocks outside the district of `school` sharing a boundary segment with it.
    pub fn neighbors(&self, school: SchoolId) -> Result<Vec<BlockId>> {
        let district = self.district_of(school)?;
        Ok(self.block_ids(self.partition.neighbors(district)))
    }

    /// Check whether the district of `school` may acquire `block` right now.
    pub fn can_acquire(&self, school: SchoolId, block: BlockId) -> Result<bool> {
        self.partition.can_acquire(self.district_of(school)?, self.block_of(block)?)
    }

    /// Best-improvement choice for the district of `school`, measured against `global`.
    pub fn best_move(&self, school: SchoolId, global: &GlobalStats) -> Result<Option<BlockId>> {
        let district = self.district_of(school)?;
        let pool = self.partition.neighbors(district);
        Ok(self.partition.best_candidate(district, &pool, global)?.map(|block| self.map().block_at(block).id))
    }

    /// Random feasible neighbor of the district of `school`.
    pub fn random_move<R: Rng + ?Sized>(&self, school: SchoolId, rng: &mut R) -> Result<Option<BlockId>> {
        let district = self.district_of(school)?;
        let pool = self.partition.neighbors(district);
        Ok(self.partition.random_candidate(district, &pool, rng)?.map(|block| self.map().block_at(block).id))
    }

    /// Move `block` into the district of `school`, refreshing both districts.
    /// Feasibility is not checked; see `can_acquire`.
    pub fn transfer(&mut self, block: BlockId, school: SchoolId) -> Result<()> {
        let (block, district) = (self.block_of(block)?, self.district_of(school)?);
        if self.partition.owner(block) == district { return Ok(()) }
        self.partition.transfer_block(block, district)
    }

    /// Run a single trial in place and return its curve.
    pub fn run_trial<R: Rng + ?Sized>(&mut self, trial: usize, config: &SearchConfig, rng: &mut R) -> Result<TrialCurve> {
        Ok(self.partition.run_trial(trial, config, rng)?.into())
    }

    /// Run the multi-trial search from this plan and return the best plan found.
    pub fn optimize(&self, config: &SearchConfig) -> Result<SearchOutcome> {
        let result = self.partition.search(config)?;
        let best_curve = result.best_report()
            .map(|report| report.curve.clone())
            .unwrap_or_default();
        let best_z = best_curve.last().copied().unwrap_or_default();

        Ok(SearchOutcome {
            best: Plan { partition: result.best },
            best_trial: result.best_trial,
            best_curve,
            best_z,
            curves: result.reports.into_iter().map(TrialCurve::from).collect(),
            failures: result.failures,
            seed: result.seed,
        })
    }

    fn summary(&self, district: usize) -> DistrictSummary {
        let stats = self.partition.stats(district);
        DistrictSummary {
            school: self.map().school_at(district),
            blocks: {
                let mut blocks = self.block_ids(self.partition.members(district).iter().copied());
                blocks.sort_unstable();
                blocks
            },
            geometry: stats.geometry.clone(),
            majority: stats.majority,
            minority: stats.minority,
            student_count: stats.students,
            optimization_value: stats.optimization_value,
            caps: *self.partition.caps(district),
        }
    }

    fn block_ids(&self, blocks: impl IntoIterator<Item = usize>) -> Vec<BlockId> {
        blocks.into_iter().map(|block| self.map().block_at(block).id).collect()
    }

    fn district_of(&self, school: SchoolId) -> Result<usize> {
        self.map().district_index(school)
            .ok_or_else(|| SearchError::invalid_input(format!("unknown school {school}")))
    }

    fn block_of(&self, block: BlockId) -> Result<usize> {
        self.map().block_index(block)
            .ok_or_else(|| SearchError::invalid_input(format!("unknown block {block}")))
    }
}
