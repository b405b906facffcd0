mod search;
mod trial;

pub(crate) use trial::TrialReport;
