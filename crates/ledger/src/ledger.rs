//! The vote ledger.

use crate::Error;
use ballotline_store::{ElectionStore, VoteInsert};
use ballotline_types::{CandidateId, Vote, VoteReceipt, VoterKey};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Terminal outcome of a cast attempt.
///
/// Both variants are success from the system's point of view; callers
/// branch on them to pick a view, not to report a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastOutcome {
    /// The vote was recorded; carries the new vote.
    Recorded(Vote),

    /// A vote by this voter already existed; carries the original,
    /// unchanged vote.
    AlreadyVoted(Vote),
}

impl CastOutcome {
    /// Whether this attempt recorded a new vote.
    pub fn is_recorded(&self) -> bool {
        matches!(self, CastOutcome::Recorded(_))
    }

    /// The vote this outcome refers to: the new vote if recorded, the
    /// pre-existing one otherwise.
    pub fn vote(&self) -> &Vote {
        match self {
            CastOutcome::Recorded(vote) | CastOutcome::AlreadyVoted(vote) => vote,
        }
    }
}

/// The append-only record of votes.
///
/// The one-vote-per-voter rule is NOT checked here; it is enforced by
/// the store's uniqueness constraint, and the insert attempt itself is
/// the atomic decision point. Under concurrent casts for the same voter
/// exactly one caller observes [`CastOutcome::Recorded`].
pub struct VoteLedger {
    store: Arc<dyn ElectionStore>,
}

impl VoteLedger {
    /// Create a ledger over the given store.
    pub fn new(store: Arc<dyn ElectionStore>) -> Self {
        Self { store }
    }

    /// Whether `voter` has already cast a vote. Pure lookup.
    pub fn has_voted(&self, voter: &VoterKey) -> Result<bool, Error> {
        Ok(self.store.vote_by(voter)?.is_some())
    }

    /// Attempt to record a vote by `voter` for `selection`.
    ///
    /// A missing selection fails with [`Error::EmptySelection`] before
    /// touching storage; an unknown candidate fails with
    /// [`Error::UnknownCandidate`] and records nothing. A duplicate
    /// cast is the [`CastOutcome::AlreadyVoted`] outcome, not an error.
    /// Never retried internally.
    pub fn cast_vote(
        &self,
        voter: &VoterKey,
        selection: Option<CandidateId>,
    ) -> Result<CastOutcome, Error> {
        let candidate = selection.ok_or(Error::EmptySelection)?;
        let vote = Vote {
            voter: voter.clone(),
            candidate,
            cast_at: Utc::now(),
        };

        match self.store.insert_vote(&vote)? {
            VoteInsert::Inserted => {
                info!(voter = %vote.voter, %candidate, "Vote recorded");
                Ok(CastOutcome::Recorded(vote))
            }
            VoteInsert::Duplicate(existing) => {
                debug!(voter = %existing.voter, "Repeat cast attempt");
                Ok(CastOutcome::AlreadyVoted(existing))
            }
            VoteInsert::UnknownCandidate => {
                warn!(voter = %vote.voter, %candidate, "Cast for unknown candidate rejected");
                Err(Error::UnknownCandidate(candidate))
            }
        }
    }

    /// The recorded choice of `voter` (candidate display name plus
    /// cast timestamp), or `None` if no vote exists.
    pub fn vote_of(&self, voter: &VoterKey) -> Result<Option<VoteReceipt>, Error> {
        Ok(self.store.receipt_for(voter)?)
    }
}
