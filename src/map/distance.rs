use ahash::AHashMap;

use crate::map::{BlockId, SchoolId};

/// Walking distances from blocks to schools.
///
/// Only pairs that can ever be evaluated need an entry: every block to its
/// own school, and every block that may be offered to a neighboring school.
#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    entries: AHashMap<(SchoolId, BlockId), f64>,
}

impl DistanceTable {
    pub fn new() -> Self { Self::default() }

    /// Record the walking distance from `block` to `school`, replacing any previous value.
    pub fn insert(&mut self, school: SchoolId, block: BlockId, distance: f64) {
        self.entries.insert((school, block), distance);
    }

    #[inline]
    pub fn get(&self, school: SchoolId, block: BlockId) -> Option<f64> {
        self.entries.get(&(school, block)).copied()
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (SchoolId, BlockId, f64)> + '_ {
        self.entries.iter().map(|(&(school, block), &distance)| (school, block, distance))
    }
}

impl FromIterator<(SchoolId, BlockId, f64)> for DistanceTable {
    fn from_iter<I: IntoIterator<Item = (SchoolId, BlockId, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (school, block, distance) in iter {
            table.insert(school, block, distance);
        }
        table
    }
}
