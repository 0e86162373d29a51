//! The candidate roster.

use crate::Error;
use ballotline_store::{ElectionStore, SeedOutcome};
use ballotline_types::{Candidate, CandidateSeed};
use std::sync::Arc;
use tracing::{debug, info};

/// The fixed list of candidates, read-only after seeding.
///
/// There are no update or delete operations; the roster is
/// append-only-at-bootstrap.
pub struct CandidateRoster {
    store: Arc<dyn ElectionStore>,
}

impl CandidateRoster {
    /// Create a roster over the given store.
    pub fn new(store: Arc<dyn ElectionStore>) -> Self {
        Self { store }
    }

    /// All candidates, sorted by display name.
    pub fn list(&self) -> Result<Vec<Candidate>, Error> {
        Ok(self.store.candidates()?)
    }

    /// Populate the roster if, and only if, it is currently empty.
    ///
    /// Idempotent across repeated startups: a roster that already holds
    /// candidates is left untouched, and that counts as success.
    pub fn seed_if_empty(&self, seed: &[CandidateSeed]) -> Result<SeedOutcome, Error> {
        let outcome = self.store.seed_candidates(seed)?;
        match outcome {
            SeedOutcome::Seeded(count) => info!(count, "Candidate roster seeded"),
            SeedOutcome::AlreadySeeded => debug!("Candidate roster already seeded"),
        }
        Ok(outcome)
    }
}
