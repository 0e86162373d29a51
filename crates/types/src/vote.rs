//! Vote records.

use crate::{CandidateId, VoterKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded vote.
///
/// Binds exactly one voter to exactly one candidate. At most one vote
/// exists per voter key; the storage layer enforces this as a hard
/// constraint. Once recorded, a vote is never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// The voter who cast this vote.
    pub voter: VoterKey,

    /// The chosen candidate.
    pub candidate: CandidateId,

    /// When the vote was recorded.
    pub cast_at: DateTime<Utc>,
}

/// A voter's recorded choice, joined with the candidate's display name.
///
/// Returned for confirmation views so callers do not re-derive the join
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    /// Display name of the chosen candidate.
    pub candidate_name: String,

    /// When the vote was recorded.
    pub cast_at: DateTime<Utc>,
}
