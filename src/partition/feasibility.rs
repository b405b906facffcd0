use crate::{error::Result, partition::Partition};

impl Partition {
    /// Check if `block` lies beyond `district`'s frozen walking-distance cap.
    pub(crate) fn is_too_far(&self, district: usize, block: usize) -> Result<bool> {
        Ok(self.map().require_distance(district, block)? > self.caps(district).max_distance)
    }

    /// Check whether `district` may acquire `block`. Rules are evaluated in
    /// order and stop at the first failure:
    ///
    /// 1. the block does not host a school;
    /// 2. the acquirer stays within its student limit;
    /// 3. the block is within the acquirer's walking-distance cap;
    /// 4. losing the block does not break the current owner's contiguity.
    pub(crate) fn can_acquire(&self, district: usize, block: usize) -> Result<bool> {
        let candidate = self.map().block_at(block);
        if candidate.contains_school { return Ok(false) }

        let students = self.stats(district).students + candidate.students as u64;
        if students as f64 > self.caps(district).student_limit { return Ok(false) }

        if self.is_too_far(district, block)? { return Ok(false) }

        Ok(!self.would_break_contiguity(self.owner(block), block))
    }

    /// Filter `pool` down to the blocks `district` may acquire, keeping order.
    pub(crate) fn feasible_candidates(&self, district: usize, pool: &[usize]) -> Result<Vec<usize>> {
        let mut feasible = Vec::with_capacity(pool.len());
        for &block in pool {
            if self.can_acquire(district, block)? { feasible.push(block) }
        }
        Ok(feasible)
    }
}
