//! Per-day planner output.

use serde::{Deserialize, Serialize};

use super::station::StopCandidate;

/// Stopover candidates for one calendar day of travel.
///
/// Serializes as a bare JSON array of candidates, so a whole trip is an
/// array of arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayPlan {
    candidates: Vec<StopCandidate>,
}

impl DayPlan {
    pub fn new(candidates: Vec<StopCandidate>) -> Self {
        Self { candidates }
    }

    /// Candidates in output order; the day's terminal station comes first.
    pub fn candidates(&self) -> &[StopCandidate] {
        &self.candidates
    }

    /// The station the day's travel ends at.
    pub fn terminal(&self) -> Option<&StopCandidate> {
        self.candidates.first()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
