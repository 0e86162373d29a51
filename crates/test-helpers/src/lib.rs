//! Test helpers: the reference seed roster and store constructors.
//!
//! Dev-dependency only. Panics on store faults, which is what a test
//! wants.

use ballotline_store::{ElectionStore, MemoryStore};
use ballotline_types::{CandidateId, CandidateSeed};
use std::sync::Arc;

/// The five-candidate reference roster used across the test suites.
pub fn seed_roster() -> Vec<CandidateSeed> {
    vec![
        CandidateSeed::new(
            "Rahul Sharma",
            "Computer Science",
            "https://randomuser.me/api/portraits/men/32.jpg",
        ),
        CandidateSeed::new(
            "Priya Patel",
            "Electrical Engineering",
            "https://randomuser.me/api/portraits/women/44.jpg",
        ),
        CandidateSeed::new(
            "Arjun Singh",
            "Mechanical Engineering",
            "https://randomuser.me/api/portraits/men/54.jpg",
        ),
        CandidateSeed::new(
            "Sneha Reddy",
            "Information Technology",
            "https://randomuser.me/api/portraits/women/68.jpg",
        ),
        CandidateSeed::new(
            "Vikram Kumar",
            "Civil Engineering",
            "https://randomuser.me/api/portraits/men/22.jpg",
        ),
    ]
}

/// A fresh in-memory store pre-seeded with [`seed_roster`].
pub fn seeded_memory_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store
        .seed_candidates(&seed_roster())
        .expect("seed in-memory store");
    Arc::new(store)
}

/// Look up a candidate id by display name.
///
/// # Panics
///
/// Panics if the store fails or no candidate carries that name.
pub fn id_of(store: &dyn ElectionStore, name: &str) -> CandidateId {
    store
        .candidates()
        .expect("list candidates")
        .into_iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no candidate named `{name}`"))
        .id
}
