//! The `ElectionStore` trait and its outcome types.

use crate::StoreError;
use ballotline_types::{Candidate, CandidateId, CandidateSeed, Vote, VoteReceipt, VoterKey};
use std::collections::BTreeMap;

/// Outcome of an atomic vote insert.
///
/// `Duplicate` and `UnknownCandidate` are normal outcomes, not store
/// faults: the caller translates them into its own vocabulary. A store
/// fault (unreachable, corrupt) surfaces as [`StoreError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteInsert {
    /// The vote was recorded.
    Inserted,

    /// A vote by this voter already exists. Carries the original vote,
    /// which is left unchanged.
    Duplicate(Vote),

    /// The referenced candidate does not exist; nothing was recorded.
    UnknownCandidate,
}

/// Outcome of seeding the candidate roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The roster was empty; this many candidates were inserted.
    Seeded(usize),

    /// The roster already held candidates; nothing was written.
    AlreadySeeded,
}

/// A consistent point-in-time view of the election state.
///
/// Read in a single store transaction (or under a single lock), so the
/// counts always agree with the candidate set and the total.
#[derive(Debug, Clone)]
pub struct TallySnapshot {
    /// All candidates, sorted by display name.
    pub candidates: Vec<Candidate>,

    /// Vote counts per candidate. A missing entry means zero votes.
    pub counts: BTreeMap<CandidateId, u64>,

    /// Total number of vote records.
    pub total: u64,
}

/// Storage operations for the election state.
///
/// Implementations must be safe to share across request-handling
/// workers: reads may run concurrently with writes and must never
/// observe a partially written vote. `insert_vote` must be atomic per
/// voter key. No method retries internally; a constraint hit returns
/// immediately.
pub trait ElectionStore: Send + Sync {
    /// Populate the candidate roster if, and only if, it is empty.
    ///
    /// Idempotent and race-safe: the emptiness check and the inserts
    /// happen under one writer, so two concurrent first-time seeds
    /// cannot double-insert. Ids are assigned from 1 in seed order.
    fn seed_candidates(&self, seed: &[CandidateSeed]) -> Result<SeedOutcome, StoreError>;

    /// All candidates, sorted by display name.
    fn candidates(&self) -> Result<Vec<Candidate>, StoreError>;

    /// Atomically insert a vote, enforcing both integrity rules:
    /// the voter-key uniqueness constraint and the candidate reference.
    fn insert_vote(&self, vote: &Vote) -> Result<VoteInsert, StoreError>;

    /// The vote cast by `voter`, if any.
    fn vote_by(&self, voter: &VoterKey) -> Result<Option<Vote>, StoreError>;

    /// The vote cast by `voter`, joined with the candidate's display
    /// name for confirmation rendering.
    fn receipt_for(&self, voter: &VoterKey) -> Result<Option<VoteReceipt>, StoreError>;

    /// Number of vote records at the instant of the call.
    fn vote_count(&self) -> Result<u64, StoreError>;

    /// Candidates plus per-candidate vote counts, read consistently.
    fn tally_snapshot(&self) -> Result<TallySnapshot, StoreError>;
}
