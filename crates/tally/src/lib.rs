//! Tally engine.
//!
//! Derives aggregate per-candidate counts from the vote store on
//! demand; holds no state of its own. Candidates are the driving set:
//! every candidate appears in the results exactly once, with a zero
//! count if nobody voted for them.

use ballotline_store::{ElectionStore, StoreError, TallySnapshot};
use ballotline_types::Candidate;
use std::sync::Arc;
use tracing::debug;

/// One results row: a candidate and how many votes they hold.
///
/// Carries the full candidate record so results views can render the
/// branch and photo without another lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyRow {
    /// The candidate.
    pub candidate: Candidate,

    /// Number of votes recorded for this candidate.
    pub votes: u64,
}

/// Computes election results from the store.
pub struct TallyEngine {
    store: Arc<dyn ElectionStore>,
}

impl TallyEngine {
    /// Create a tally engine over the given store.
    pub fn new(store: Arc<dyn ElectionStore>) -> Self {
        Self { store }
    }

    /// One row per candidate, ordered by vote count descending, ties
    /// broken by candidate name ascending.
    ///
    /// Computed from a single consistent snapshot: the counts always
    /// sum to the number of vote records at that instant.
    pub fn results(&self) -> Result<Vec<TallyRow>, StoreError> {
        let TallySnapshot {
            candidates,
            counts,
            total,
        } = self.store.tally_snapshot()?;

        let mut rows: Vec<TallyRow> = candidates
            .into_iter()
            .map(|candidate| {
                let votes = counts.get(&candidate.id).copied().unwrap_or(0);
                TallyRow { candidate, votes }
            })
            .collect();
        rows.sort_by(|a, b| {
            b.votes
                .cmp(&a.votes)
                .then_with(|| a.candidate.name.cmp(&b.candidate.name))
        });

        debug!(candidates = rows.len(), total, "Computed tally");
        Ok(rows)
    }

    /// Number of vote records at the instant of the call.
    ///
    /// Consistent within a single call; two calls racing a concurrent
    /// cast may disagree by design.
    pub fn total_votes(&self) -> Result<u64, StoreError> {
        self.store.vote_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballotline_store::{MemoryStore, VoteInsert};
    use ballotline_test_helpers::{id_of, seed_roster};
    use ballotline_types::{CandidateId, Vote, VoterKey};
    use chrono::Utc;

    fn seeded() -> Arc<MemoryStore> {
        let store = MemoryStore::new();
        store.seed_candidates(&seed_roster()).unwrap();
        Arc::new(store)
    }

    fn cast(store: &MemoryStore, voter: &str, candidate: CandidateId) {
        let vote = Vote {
            voter: VoterKey::new(voter),
            candidate,
            cast_at: Utc::now(),
        };
        assert_eq!(store.insert_vote(&vote).unwrap(), VoteInsert::Inserted);
    }

    #[test]
    fn test_empty_ledger_yields_zero_rows_sorted_by_name() {
        let store = seeded();
        let engine = TallyEngine::new(store);

        let rows = engine.results().unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.votes == 0));

        // All counts tie at zero, so ordering falls back to name.
        let names: Vec<&str> = rows.iter().map(|r| r.candidate.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        assert_eq!(engine.total_votes().unwrap(), 0);
    }

    #[test]
    fn test_results_order_by_count_then_name() {
        let store = seeded();
        let rahul = id_of(store.as_ref(), "Rahul Sharma");
        let priya = id_of(store.as_ref(), "Priya Patel");
        let arjun = id_of(store.as_ref(), "Arjun Singh");

        cast(&store, "S1", rahul);
        cast(&store, "S2", rahul);
        cast(&store, "S3", priya);
        cast(&store, "S4", arjun);

        let engine = TallyEngine::new(store);
        let rows = engine.results().unwrap();

        assert_eq!(rows[0].candidate.name, "Rahul Sharma");
        assert_eq!(rows[0].votes, 2);
        // Arjun and Priya tie at one vote; name breaks the tie.
        assert_eq!(rows[1].candidate.name, "Arjun Singh");
        assert_eq!(rows[2].candidate.name, "Priya Patel");
        // Zero-vote candidates still appear, name-ordered.
        assert_eq!(rows[3].votes, 0);
        assert_eq!(rows[4].votes, 0);
    }

    #[test]
    fn test_results_are_a_permutation_of_the_roster() {
        let store = seeded();
        let rahul = id_of(store.as_ref(), "Rahul Sharma");
        cast(&store, "S1", rahul);

        let candidates = store.candidates().unwrap();
        let engine = TallyEngine::new(store);
        let rows = engine.results().unwrap();

        assert_eq!(rows.len(), candidates.len());
        let mut seen: Vec<CandidateId> = rows.iter().map(|r| r.candidate.id).collect();
        seen.sort();
        let mut expected: Vec<CandidateId> = candidates.iter().map(|c| c.id).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let store = seeded();
        let rahul = id_of(store.as_ref(), "Rahul Sharma");
        let priya = id_of(store.as_ref(), "Priya Patel");

        cast(&store, "S1", rahul);
        cast(&store, "S2", priya);
        cast(&store, "S3", priya);

        let engine = TallyEngine::new(store);
        let rows = engine.results().unwrap();
        let sum: u64 = rows.iter().map(|r| r.votes).sum();
        assert_eq!(sum, engine.total_votes().unwrap());
        assert_eq!(sum, 3);
    }
}
