#![doc = "Catchment public API"]
//! Rebalances school catchment areas toward an even minority-language share.
//!
//! A [`Map`] holds the fixed input snapshot (blocks, schools and walking
//! distances). A [`Plan`] assigns every block to a school district, and
//! [`Plan::optimize`] runs the multi-trial local search described by a
//! [`SearchConfig`].
mod config;
mod error;
mod geom;
mod io;
mod map;
mod partition;
mod plan;

#[doc(inline)]
pub use config::SearchConfig;

#[doc(inline)]
pub use error::{Result, SearchError, TrialFailure};

#[doc(inline)]
pub use map::{Block, BlockId, DistanceTable, Map, SchoolId};

#[doc(inline)]
pub use partition::{DistrictCaps, GlobalStats};

#[doc(inline)]
pub use plan::{DistrictSummary, Plan, SearchOutcome, TrialCurve};
