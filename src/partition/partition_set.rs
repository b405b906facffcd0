/// PartitionSet maintains a total assignment of elements to sets, with O(1) move/find.
#[derive(Debug, Clone)]
pub(crate) struct PartitionSet {
    sets: Vec<Vec<usize>>,  // sets[s] = elements currently in set s
    index: Vec<usize>,      // index[e] = s when e is in sets[s]
    position: Vec<usize>,   // position[e] = i when sets[s][i] is e
}

impl PartitionSet {
    /// Create a PartitionSet with `num_sets` sets from a complete slice of assignments.
    pub(crate) fn new(num_sets: usize, assignments: &[usize]) -> Self {
        assert!(num_sets > 0, "must have at least one set");

        let mut sets = vec![Vec::new(); num_sets];
        let mut position = vec![0; assignments.len()];
        for (elem, &set) in assignments.iter().enumerate() {
            assert!(set < num_sets, "set out of range");
            position[elem] = sets[set].len();
            sets[set].push(elem);
        }

        Self { sets, index: assignments.to_vec(), position }
    }

    /// Number of sets.
    #[inline] pub(crate) fn num_sets(&self) -> usize { self.sets.len() }

    /// Return the set that `elem` is currently in.
    #[inline]
    pub(crate) fn find(&self, elem: usize) -> usize {
        debug_assert!(elem < self.index.len(), "element out of range");
        self.index[elem]
    }

    /// Returns a reference to the elements currently in `set`.
    #[inline]
    pub(crate) fn get(&self, set: usize) -> &[usize] {
        debug_assert!(set < self.sets.len(), "set out of range");
        &self.sets[set]
    }

    /// Get a complete vector of assignments for each element.
    #[inline] pub(crate) fn assignments(&self) -> &[usize] { &self.index }

    /// Move `elem` to `set`. Panics in debug if out of range.
    pub(crate) fn move_to(&mut self, elem: usize, set: usize) {
        debug_assert!(elem < self.index.len(), "element out of range");
        debug_assert!(set < self.sets.len(), "set out of range");

        let (prev, pos) = (self.index[elem], self.position[elem]);
        if prev == set { return }

        // Remove from previous set by swapping with last element.
        let last = self.sets[prev].len() - 1;
        self.sets[prev].swap(pos, last);
        self.sets[prev].pop();
        if pos < last {
            let moved = self.sets[prev][pos];
            self.position[moved] = pos;
        }

        // Add to new set.
        self.index[elem] = set;
        self.position[elem] = self.sets[set].len();
        self.sets[set].push(elem);
    }
}
