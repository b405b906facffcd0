use geo::MultiPolygon;

/// District caps computed once, from the district's members in the input
/// snapshot, and never recomputed as the district changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistrictCaps {
    /// `cap_factor` times the longest walking distance among the original members.
    pub max_distance: f64,
    /// `cap_factor` times the original student count.
    pub student_limit: f64,
}

/// District statistics recomputed from the current members after every
/// membership change.
#[derive(Clone, Debug)]
pub struct DistrictStats {
    /// Union of the member block geometries.
    pub geometry: MultiPolygon<f64>,
    pub majority: u64,
    pub minority: u64,
    pub students: u64,
    /// Minority-language share of the district population.
    pub optimization_value: f64,
}

impl DistrictStats {
    /// Share the district would have after losing a block with the given counts.
    #[inline]
    pub(crate) fn value_without(&self, majority: u32, minority: u32) -> f64 {
        minority_share(self.minority - minority as u64, self.majority - majority as u64)
    }

    /// Share the district would have after gaining a block with the given counts.
    #[inline]
    pub(crate) fn value_with(&self, majority: u32, minority: u32) -> f64 {
        minority_share(self.minority + minority as u64, self.majority + majority as u64)
    }
}

/// Minority share of a population; an empty population counts as 0.
#[inline]
pub(crate) fn minority_share(minority: u64, majority: u64) -> f64 {
    let total = minority + majority;
    if total == 0 { 0.0 } else { minority as f64 / total as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_of_mixed_population() {
        assert_eq!(minority_share(10, 90), 0.1);
        assert_eq!(minority_share(40, 100), 40.0 / 140.0);
    }

    #[test]
    fn empty_population_has_zero_share() {
        assert_eq!(minority_share(0, 0), 0.0);
    }

    #[test]
    fn hypothetical_moves() {
        let stats = DistrictStats {
            geometry: MultiPolygon(vec![]),
            majority: 50,
            minority: 50,
            students: 0,
            optimization_value: 0.5,
        };
        assert_eq!(stats.value_without(10, 30), 20.0 / 60.0);
        assert_eq!(stats.value_with(90, 10), 60.0 / 200.0);
        assert_eq!(stats.value_without(50, 50), 0.0);
    }
}
