//! In-memory store backend.
//!
//! Backs the election state with lock-guarded maps. The vote-map entry
//! insert under the write lock is the uniqueness constraint: whichever
//! writer takes the lock first fills the entry, and every later writer
//! finds it occupied.

use crate::{ElectionStore, SeedOutcome, StoreError, TallySnapshot, VoteInsert};
use ballotline_types::{Candidate, CandidateId, CandidateSeed, Vote, VoteReceipt, VoterKey};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Inner {
    candidates: BTreeMap<CandidateId, Candidate>,
    votes: HashMap<VoterKey, Vote>,
}

/// An election store held entirely in memory.
///
/// State does not survive the process; use [`crate::RedbStore`] for
/// durable deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
    }
}

impl ElectionStore for MemoryStore {
    fn seed_candidates(&self, seed: &[CandidateSeed]) -> Result<SeedOutcome, StoreError> {
        let mut inner = self.write()?;
        if !inner.candidates.is_empty() {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let mut names = HashSet::new();
        for entry in seed {
            if !names.insert(entry.name.as_str()) {
                return Err(StoreError::DuplicateSeedName(entry.name.clone()));
            }
        }

        for (i, entry) in seed.iter().enumerate() {
            let id = CandidateId(i as u64 + 1);
            inner.candidates.insert(id, entry.with_id(id));
        }
        Ok(SeedOutcome::Seeded(seed.len()))
    }

    fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let inner = self.read()?;
        let mut all: Vec<Candidate> = inner.candidates.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    fn insert_vote(&self, vote: &Vote) -> Result<VoteInsert, StoreError> {
        let mut inner = self.write()?;
        if !inner.candidates.contains_key(&vote.candidate) {
            return Ok(VoteInsert::UnknownCandidate);
        }

        // The entry is the constraint: occupied means the voter already
        // cast, and the original vote stays untouched.
        match inner.votes.entry(vote.voter.clone()) {
            Entry::Occupied(existing) => Ok(VoteInsert::Duplicate(existing.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(vote.clone());
                Ok(VoteInsert::Inserted)
            }
        }
    }

    fn vote_by(&self, voter: &VoterKey) -> Result<Option<Vote>, StoreError> {
        Ok(self.read()?.votes.get(voter).cloned())
    }

    fn receipt_for(&self, voter: &VoterKey) -> Result<Option<VoteReceipt>, StoreError> {
        let inner = self.read()?;
        let vote = match inner.votes.get(voter) {
            Some(vote) => vote,
            None => return Ok(None),
        };
        let candidate = inner.candidates.get(&vote.candidate).ok_or_else(|| {
            StoreError::corrupt(voter.as_str(), "vote references a missing candidate")
        })?;
        Ok(Some(VoteReceipt {
            candidate_name: candidate.name.clone(),
            cast_at: vote.cast_at,
        }))
    }

    fn vote_count(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.votes.len() as u64)
    }

    fn tally_snapshot(&self) -> Result<TallySnapshot, StoreError> {
        let inner = self.read()?;

        let mut candidates: Vec<Candidate> = inner.candidates.values().cloned().collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));

        let mut counts: BTreeMap<CandidateId, u64> = BTreeMap::new();
        for vote in inner.votes.values() {
            *counts.entry(vote.candidate).or_insert(0) += 1;
        }

        Ok(TallySnapshot {
            candidates,
            counts,
            total: inner.votes.len() as u64,
        })
    }
}
