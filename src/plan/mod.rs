mod io;
mod outcome;
mod plan;

pub use outcome::{SearchOutcome, TrialCurve};
pub use plan::{DistrictSummary, Plan};
