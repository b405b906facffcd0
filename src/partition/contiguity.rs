use crate::{
    geom::{Topology, shares_edge},
    partition::Partition,
};

impl Partition {
    /// Blocks outside `district` that share a boundary segment of positive
    /// length with the district's current geometry, in ascending block order.
    ///
    /// The candidate pool is every block in the map; an R-tree bounding-box
    /// query narrows it before the exact boundary test.
    pub(crate) fn neighbors(&self, district: usize) -> Vec<usize> {
        let geometry = &self.stats(district).geometry;
        self.map().geoms().candidates_near(geometry).into_iter()
            .filter(|&block| self.owner(block) != district)
            .filter(|&block| shares_edge(geometry, self.map().geometry_at(block)))
            .collect()
    }

    /// Check whether removing `block` from `district` would change the
    /// topological class of the district's geometry (for example split one
    /// connected region into two, or empty the district).
    ///
    /// A union the geometry engine cannot classify counts as breaking.
    pub(crate) fn would_break_contiguity(&self, district: usize, block: usize) -> bool {
        debug_assert!(self.owner(block) == district, "block {block} is not in district {district}");

        let before = Topology::of(&self.stats(district).geometry);
        let remaining = self.members(district).iter().copied().filter(|&u| u != block);

        match self.map().geoms().union_of(remaining) {
            Ok(after) => Topology::of(&after) != before,
            Err(err) => {
                log::trace!("[contiguity] rejecting block {block}: {err}");
                true
            }
        }
    }
}
