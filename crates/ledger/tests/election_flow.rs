//! End-to-end election flows, run against both store backends.

use ballotline_ledger::{CandidateRoster, CastOutcome, Error, VoteLedger};
use ballotline_store::{ElectionStore, MemoryStore, RedbStore, SeedOutcome};
use ballotline_tally::TallyEngine;
use ballotline_test_helpers::{id_of, seed_roster};
use ballotline_types::{CandidateId, VoterKey};
use rand::Rng;
use std::sync::{Arc, Barrier};
use std::thread;

/// Run a scenario against a fresh in-memory store and a fresh redb
/// store.
fn each_backend(scenario: impl Fn(Arc<dyn ElectionStore>)) {
    scenario(Arc::new(MemoryStore::new()));

    let dir = tempfile::TempDir::new().expect("tempdir");
    let store = RedbStore::open(dir.path().join("votes.redb")).expect("open redb store");
    scenario(Arc::new(store));
}

#[test]
fn first_vote_then_repeat_cast() {
    each_backend(|store| {
        let roster = CandidateRoster::new(store.clone());
        roster.seed_if_empty(&seed_roster()).unwrap();
        let rahul = id_of(store.as_ref(), "Rahul Sharma");
        let priya = id_of(store.as_ref(), "Priya Patel");

        let ledger = VoteLedger::new(store.clone());
        let tally = TallyEngine::new(store);

        let s1 = VoterKey::new("S1");
        assert!(!ledger.has_voted(&s1).unwrap());

        // First cast is recorded.
        let outcome = ledger.cast_vote(&s1, Some(rahul)).unwrap();
        assert!(outcome.is_recorded());
        assert!(ledger.has_voted(&s1).unwrap());

        let rows = tally.results().unwrap();
        assert_eq!(rows[0].candidate.name, "Rahul Sharma");
        assert_eq!(rows[0].votes, 1);
        assert!(rows[1..].iter().all(|row| row.votes == 0));
        assert_eq!(tally.total_votes().unwrap(), 1);

        // A second cast for a different candidate is AlreadyVoted and
        // changes nothing.
        match ledger.cast_vote(&s1, Some(priya)).unwrap() {
            CastOutcome::AlreadyVoted(existing) => assert_eq!(existing.candidate, rahul),
            other => panic!("expected AlreadyVoted, got {other:?}"),
        }

        let receipt = ledger.vote_of(&s1).unwrap().unwrap();
        assert_eq!(receipt.candidate_name, "Rahul Sharma");
        assert_eq!(receipt.cast_at, outcome.vote().cast_at);
        assert_eq!(tally.total_votes().unwrap(), 1);
    });
}

#[test]
fn unknown_candidate_never_creates_a_vote() {
    each_backend(|store| {
        let roster = CandidateRoster::new(store.clone());
        roster.seed_if_empty(&seed_roster()).unwrap();

        let ledger = VoteLedger::new(store.clone());
        let tally = TallyEngine::new(store);

        let s1 = VoterKey::new("S1");
        let outcome = ledger.cast_vote(&s1, Some(CandidateId(99)));
        assert!(matches!(outcome, Err(Error::UnknownCandidate(id)) if id == CandidateId(99)));

        assert!(!ledger.has_voted(&s1).unwrap());
        assert!(ledger.vote_of(&s1).unwrap().is_none());
        assert_eq!(tally.total_votes().unwrap(), 0);
    });
}

#[test]
fn seeding_twice_equals_seeding_once() {
    each_backend(|store| {
        let roster = CandidateRoster::new(store);

        assert_eq!(
            roster.seed_if_empty(&seed_roster()).unwrap(),
            SeedOutcome::Seeded(5)
        );
        let first = roster.list().unwrap();

        assert_eq!(
            roster.seed_if_empty(&seed_roster()).unwrap(),
            SeedOutcome::AlreadySeeded
        );
        assert_eq!(roster.list().unwrap(), first);
        assert_eq!(first.len(), 5);
    });
}

#[test]
fn hundred_concurrent_casts_record_exactly_one_vote() {
    each_backend(|store| {
        let roster = CandidateRoster::new(store.clone());
        roster.seed_if_empty(&seed_roster()).unwrap();
        let candidates = roster.list().unwrap();

        let ledger = Arc::new(VoteLedger::new(store.clone()));
        let tally = TallyEngine::new(store);
        let before = tally.total_votes().unwrap();

        let workers = 100;
        let barrier = Arc::new(Barrier::new(workers));
        let mut handles = Vec::with_capacity(workers);
        for i in 0..workers {
            let ledger = Arc::clone(&ledger);
            let barrier = Arc::clone(&barrier);
            let candidate = candidates[i % candidates.len()].id;
            handles.push(thread::spawn(move || {
                barrier.wait();
                ledger.cast_vote(&VoterKey::new("S2"), Some(candidate))
            }));
        }

        let outcomes: Vec<CastOutcome> = handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked").unwrap())
            .collect();

        let recorded: Vec<&CastOutcome> =
            outcomes.iter().filter(|o| o.is_recorded()).collect();
        assert_eq!(recorded.len(), 1, "exactly one cast must win");

        // Every loser observed the winner's vote, unchanged.
        let winner = recorded[0].vote();
        assert!(outcomes.iter().all(|o| o.vote() == winner));

        assert_eq!(tally.total_votes().unwrap(), before + 1);
    });
}

#[test]
fn concurrent_distinct_voters_all_record() {
    each_backend(|store| {
        let roster = CandidateRoster::new(store.clone());
        roster.seed_if_empty(&seed_roster()).unwrap();
        let candidates = roster.list().unwrap();

        let ledger = Arc::new(VoteLedger::new(store.clone()));
        let tally = TallyEngine::new(store);

        let workers = 32;
        let barrier = Arc::new(Barrier::new(workers));
        let mut rng = rand::thread_rng();
        let mut handles = Vec::with_capacity(workers);
        for i in 0..workers {
            let ledger = Arc::clone(&ledger);
            let barrier = Arc::clone(&barrier);
            let candidate = candidates[rng.gen_range(0..candidates.len())].id;
            handles.push(thread::spawn(move || {
                barrier.wait();
                ledger.cast_vote(&VoterKey::new(format!("V{i}")), Some(candidate))
            }));
        }

        let recorded = handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked").unwrap())
            .filter(|outcome| outcome.is_recorded())
            .count();
        assert_eq!(recorded, workers);

        // The tally agrees with what the casters observed.
        assert_eq!(tally.total_votes().unwrap(), workers as u64);
        let rows = tally.results().unwrap();
        assert_eq!(rows.len(), candidates.len());
        let sum: u64 = rows.iter().map(|row| row.votes).sum();
        assert_eq!(sum, workers as u64);
    });
}
