use std::sync::Arc;

use crate::{
    error::Result,
    map::Map,
    partition::{DistrictCaps, DistrictStats, PartitionSet, district::minority_share},
};

/// An assignment of every block to one school district, with per-district
/// caps and statistics.
///
/// Cloning a partition copies the ownership index and the per-district
/// statistics; the map and the frozen caps are shared.
#[derive(Clone, Debug)]
pub(crate) struct Partition {
    map: Arc<Map>,
    pub(super) parts: PartitionSet,  // Sets of blocks per district, plus the detached set
    caps: Arc<[DistrictCaps]>,       // Computed once from the input snapshot
    stats: Vec<DistrictStats>,       // Recomputed after every membership change
}

impl Partition {
    /// Build the initial partition from the map's input assignment.
    ///
    /// Fails with `MissingDistanceEntry` if an original member has no distance
    /// to its own school.
    pub(crate) fn new(map: impl Into<Arc<Map>>, cap_factor: f64) -> Result<Self> {
        let map: Arc<Map> = map.into();
        let num_districts = map.num_districts();
        let parts = PartitionSet::new(num_districts + 1, map.initial_assignments());

        let caps = (0..num_districts)
            .map(|district| {
                let max_distance = parts.get(district).iter()
                    .map(|&block| map.require_distance(district, block))
                    .try_fold(0.0_f64, |max, distance| distance.map(|d| max.max(d)))?;
                let students = parts.get(district).iter()
                    .map(|&block| map.block_at(block).students as u64)
                    .sum::<u64>();

                Ok(DistrictCaps {
                    max_distance: max_distance * cap_factor,
                    student_limit: students as f64 * cap_factor,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut partition = Self {
            map,
            parts,
            caps: Arc::from(caps),
            stats: Vec::with_capacity(num_districts),
        };
        for district in 0..num_districts {
            let stats = partition.compute_stats(district)?;
            partition.stats.push(stats);
        }

        Ok(partition)
    }

    /// Get the number of districts.
    #[inline] pub(crate) fn num_districts(&self) -> usize { self.stats.len() }

    /// Get a reference to the underlying map.
    #[inline] pub(crate) fn map(&self) -> &Map { &self.map }

    /// Index of the set holding blocks that are between districts.
    #[inline] fn detached_set(&self) -> usize { self.parts.num_sets() - 1 }

    /// Get the district that currently owns `block`.
    #[inline] pub(crate) fn owner(&self, block: usize) -> usize { self.parts.find(block) }

    /// Get the blocks currently in `district`.
    #[inline] pub(crate) fn members(&self, district: usize) -> &[usize] { self.parts.get(district) }

    /// Blocks removed from a district and not yet added to another.
    #[inline] pub(crate) fn detached(&self) -> &[usize] { self.parts.get(self.detached_set()) }

    /// Get a complete vector of district assignments for each block.
    #[inline] pub(crate) fn assignments(&self) -> &[usize] { self.parts.assignments() }

    #[inline] pub(crate) fn caps(&self, district: usize) -> &DistrictCaps { &self.caps[district] }

    #[inline] pub(crate) fn stats(&self, district: usize) -> &DistrictStats { &self.stats[district] }

    #[inline]
    pub(crate) fn optimization_value(&self, district: usize) -> f64 {
        self.stats[district].optimization_value
    }

    /// Current optimization value of every district, in district order.
    pub(crate) fn optimization_values(&self) -> Vec<f64> {
        self.stats.iter().map(|stats| stats.optimization_value).collect()
    }

    /// Remove `block` from `district`. Statistics are stale until `refresh_stats`.
    pub(crate) fn remove_block(&mut self, district: usize, block: usize) {
        assert!(self.owner(block) == district, "block {block} is not in district {district}");
        self.parts.move_to(block, self.detached_set());
    }

    /// Add `block` to `district`, taking it from whichever set holds it.
    /// Statistics are stale until `refresh_stats`.
    pub(crate) fn add_block(&mut self, district: usize, block: usize) {
        assert!(district < self.num_districts(), "district {district} out of range");
        self.parts.move_to(block, district);
    }

    /// Recompute geometry, population and student statistics of `district`.
    pub(crate) fn refresh_stats(&mut self, district: usize) -> Result<()> {
        self.stats[district] = self.compute_stats(district)?;
        Ok(())
    }

    /// Transfer `block` from its current owner to `district`, refreshing both.
    pub(crate) fn transfer_block(&mut self, block: usize, district: usize) -> Result<()> {
        let donor = self.owner(block);
        self.remove_block(donor, block);
        self.refresh_stats(donor)?;
        self.add_block(district, block);
        debug_assert!(self.detached().is_empty(), "blocks left between districts");
        self.refresh_stats(district)
    }

    fn compute_stats(&self, district: usize) -> Result<DistrictStats> {
        let members = self.parts.get(district);
        let (majority, minority, students) = members.iter()
            .map(|&block| self.map.block_at(block))
            .fold((0u64, 0u64, 0u64), |(maj, min, stu), block| {
                (maj + block.majority as u64, min + block.minority as u64, stu + block.students as u64)
            });

        Ok(DistrictStats {
            geometry: self.map.geoms().union_of(members.iter().copied())?,
            majority,
            minority,
            students,
            optimization_value: minority_share(minority, majority),
        })
    }
}
