//! Candidate records.

use crate::CandidateId;
use serde::{Deserialize, Serialize};

/// A candidate on the ballot.
///
/// Created once when the roster is seeded; read-only afterward. Display
/// names are unique across the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Store-assigned identifier.
    pub id: CandidateId,

    /// Unique display name.
    pub name: String,

    /// Category/branch label shown alongside the name.
    pub branch: String,

    /// Reference to the candidate's photo (URL or asset key).
    pub photo_url: String,
}

/// Seed data for one candidate, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSeed {
    /// Unique display name.
    pub name: String,

    /// Category/branch label.
    pub branch: String,

    /// Reference to the candidate's photo.
    pub photo_url: String,
}

impl CandidateSeed {
    /// Create seed data for one candidate.
    pub fn new(
        name: impl Into<String>,
        branch: impl Into<String>,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            branch: branch.into(),
            photo_url: photo_url.into(),
        }
    }

    /// Attach a store-assigned id, producing the full record.
    pub fn with_id(&self, id: CandidateId) -> Candidate {
        Candidate {
            id,
            name: self.name.clone(),
            branch: self.branch.clone(),
            photo_url: self.photo_url.clone(),
        }
    }
}
