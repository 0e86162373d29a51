//! Storage layer for the Ballotline vote ledger.
//!
//! This crate owns the persisted election state: the candidate roster
//! and the vote table. The one-vote-per-voter rule lives HERE, as a
//! uniqueness constraint on the vote table's key, not as a
//! check-then-insert in application code. [`ElectionStore::insert_vote`]
//! is the atomic decision point: under concurrent casts for the same
//! voter, exactly one caller gets [`VoteInsert::Inserted`] and every
//! other caller gets [`VoteInsert::Duplicate`] with the original vote.
//!
//! Two backends implement the trait:
//!
//! - [`MemoryStore`] - lock-guarded maps, for tests and embedding.
//! - [`RedbStore`] - a redb database file, for durable deployments.
//!   One write transaction per mutation; write transactions are the
//!   serialization point.

mod config;
mod disk;
mod error;
mod memory;
mod store;

pub use config::StoreConfig;
pub use disk::RedbStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::ElectionStore;
pub use store::SeedOutcome;
pub use store::TallySnapshot;
pub use store::VoteInsert;
