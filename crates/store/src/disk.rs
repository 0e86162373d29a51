//! File-backed store on redb.
//!
//! Two tables: `candidates` keyed by candidate id, `votes` keyed by the
//! voter key. Keying votes by voter IS the uniqueness constraint: an
//! insert that finds a previous value is a duplicate cast, and the
//! transaction is aborted so the original row survives. The candidate
//! reference is checked inside the same write transaction, which redb
//! serializes against all other writers.

use crate::{ElectionStore, SeedOutcome, StoreError, TallySnapshot, VoteInsert};
use ballotline_types::{Candidate, CandidateId, CandidateSeed, Vote, VoteReceipt, VoterKey};
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

const CANDIDATES: TableDefinition<u64, &[u8]> = TableDefinition::new("candidates");
const VOTES: TableDefinition<&str, &[u8]> = TableDefinition::new("votes");

/// A durable election store backed by a redb database file.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open the store at `path`, creating the file (and its parent
    /// directory) on first use.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| StoreError::Unavailable(err.to_string()))?;
            }
        }

        let db = Database::create(path)?;

        // Create both tables up front so reads never observe a missing
        // table on a fresh file.
        let txn = db.begin_write()?;
        {
            txn.open_table(CANDIDATES)?;
            txn.open_table(VOTES)?;
        }
        txn.commit()?;

        info!(path = %path.display(), "Opened vote store");
        Ok(Self { db })
    }
}

fn encode_candidate(candidate: &Candidate) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(candidate)
        .map_err(|err| StoreError::Unavailable(format!("encode candidate: {err}")))
}

fn decode_candidate(id: u64, bytes: &[u8]) -> Result<Candidate, StoreError> {
    serde_json::from_slice(bytes).map_err(|err| StoreError::corrupt(format!("candidate/{id}"), err))
}

fn encode_vote(vote: &Vote) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(vote).map_err(|err| StoreError::Unavailable(format!("encode vote: {err}")))
}

fn decode_vote(voter: &str, bytes: &[u8]) -> Result<Vote, StoreError> {
    serde_json::from_slice(bytes).map_err(|err| StoreError::corrupt(format!("vote/{voter}"), err))
}

impl ElectionStore for RedbStore {
    fn seed_candidates(&self, seed: &[CandidateSeed]) -> Result<SeedOutcome, StoreError> {
        let mut names = HashSet::new();
        for entry in seed {
            if !names.insert(entry.name.as_str()) {
                return Err(StoreError::DuplicateSeedName(entry.name.clone()));
            }
        }

        // One write transaction makes the emptiness check and the
        // inserts a single atomic unit; concurrent first-time seeds
        // serialize here and the loser sees a non-empty table.
        let txn = self.db.begin_write()?;
        let outcome = {
            let mut table = txn.open_table(CANDIDATES)?;
            if !table.is_empty()? {
                SeedOutcome::AlreadySeeded
            } else {
                for (i, entry) in seed.iter().enumerate() {
                    let id = CandidateId(i as u64 + 1);
                    let encoded = encode_candidate(&entry.with_id(id))?;
                    table.insert(id.0, encoded.as_slice())?;
                }
                SeedOutcome::Seeded(seed.len())
            }
        };

        match outcome {
            SeedOutcome::Seeded(_) => txn.commit()?,
            SeedOutcome::AlreadySeeded => txn.abort()?,
        }
        Ok(outcome)
    }

    fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(CANDIDATES)?;

        let mut all = Vec::new();
        for row in table.iter()? {
            let (key, value) = row?;
            all.push(decode_candidate(key.value(), value.value())?);
        }
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    fn insert_vote(&self, vote: &Vote) -> Result<VoteInsert, StoreError> {
        let txn = self.db.begin_write()?;
        let outcome = {
            let candidates = txn.open_table(CANDIDATES)?;
            if candidates.get(vote.candidate.0)?.is_none() {
                VoteInsert::UnknownCandidate
            } else {
                let mut votes = txn.open_table(VOTES)?;
                let encoded = encode_vote(vote)?;
                let inserted = votes.insert(vote.voter.as_str(), encoded.as_slice())?;
                match inserted {
                    Some(previous) => {
                        VoteInsert::Duplicate(decode_vote(vote.voter.as_str(), previous.value())?)
                    }
                    None => VoteInsert::Inserted,
                }
            }
        };

        match &outcome {
            VoteInsert::Inserted => txn.commit()?,
            // The insert overwrote the stored row inside this
            // transaction; aborting discards that write and keeps the
            // original vote.
            _ => txn.abort()?,
        }
        Ok(outcome)
    }

    fn vote_by(&self, voter: &VoterKey) -> Result<Option<Vote>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(VOTES)?;
        match table.get(voter.as_str())? {
            Some(value) => Ok(Some(decode_vote(voter.as_str(), value.value())?)),
            None => Ok(None),
        }
    }

    fn receipt_for(&self, voter: &VoterKey) -> Result<Option<VoteReceipt>, StoreError> {
        let txn = self.db.begin_read()?;
        let votes = txn.open_table(VOTES)?;
        let vote = match votes.get(voter.as_str())? {
            Some(value) => decode_vote(voter.as_str(), value.value())?,
            None => return Ok(None),
        };

        let candidates = txn.open_table(CANDIDATES)?;
        let candidate = match candidates.get(vote.candidate.0)? {
            Some(value) => decode_candidate(vote.candidate.0, value.value())?,
            None => {
                return Err(StoreError::corrupt(
                    voter.as_str(),
                    "vote references a missing candidate",
                ))
            }
        };

        Ok(Some(VoteReceipt {
            candidate_name: candidate.name,
            cast_at: vote.cast_at,
        }))
    }

    fn vote_count(&self) -> Result<u64, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(VOTES)?;
        Ok(table.len()?)
    }

    fn tally_snapshot(&self) -> Result<TallySnapshot, StoreError> {
        // A single read transaction keeps candidates, counts, and the
        // total consistent with each other.
        let txn = self.db.begin_read()?;

        let candidate_table = txn.open_table(CANDIDATES)?;
        let mut candidates = Vec::new();
        for row in candidate_table.iter()? {
            let (key, value) = row?;
            candidates.push(decode_candidate(key.value(), value.value())?);
        }
        candidates.sort_by(|a, b| a.name.cmp(&b.name));

        let vote_table = txn.open_table(VOTES)?;
        let mut counts: BTreeMap<CandidateId, u64> = BTreeMap::new();
        for row in vote_table.iter()? {
            let (key, value) = row?;
            let vote = decode_vote(key.value(), value.value())?;
            *counts.entry(vote.candidate).or_insert(0) += 1;
        }

        Ok(TallySnapshot {
            candidates,
            counts,
            total: vote_table.len()?,
        })
    }
}
