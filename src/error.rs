use thiserror::Error as ThisError;

use crate::map::{BlockId, SchoolId};

/// Errors raised by the catchment optimizer.
///
/// Feasibility and contiguity rejections are not errors; they are part of the
/// normal search and never surface here.
#[derive(Clone, Debug, ThisError, PartialEq)]
pub enum SearchError {
    /// A feasibility check needed a walking distance the table does not have.
    #[error("no walking distance from block {block} to school {school}")]
    MissingDistanceEntry { school: SchoolId, block: BlockId },

    /// The geometry engine could not classify a union of block geometries.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// The input snapshot is structurally unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Every trial of a search failed; the per-trial errors are attached.
    #[error("all {} trials failed (first: {})", .0.len(), .0.first().map(|f| f.error.to_string()).unwrap_or_default())]
    AllTrialsFailed(Vec<TrialFailure>),
}

impl SearchError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry(message.into())
    }
}

/// A trial that aborted, along with the reason.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialFailure {
    pub trial: usize,
    pub error: SearchError,
}

pub type Result<T> = std::result::Result<T, SearchError>;
