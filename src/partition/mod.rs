mod algorithm;
mod contiguity;
mod district;
mod feasibility;
mod metrics;
mod partition_set;
mod partition;
mod selection;
#[cfg(test)]
pub(crate) mod testing;

pub(crate) use algorithm::TrialReport;
pub use district::DistrictCaps;
pub(crate) use district::DistrictStats;
pub use metrics::GlobalStats;
pub(self) use partition_set::PartitionSet;
pub(crate) use partition::Partition;
