//! The candidate roster and the vote ledger.
//!
//! [`CandidateRoster`] seeds and lists the fixed candidate set;
//! [`VoteLedger`] records at most one vote per voter on top of an
//! [`ballotline_store::ElectionStore`]. Both take the voter identity as
//! an explicit argument on every call; there is no ambient session
//! state, and no authorization policy lives here. The external auth
//! collaborator decides who may call what.
//!
//! # Example
//!
//! ```ignore
//! use ballotline_ledger::{CandidateRoster, VoteLedger};
//! use ballotline_store::StoreConfig;
//!
//! let store = StoreConfig::at_path("database/app.redb").open()?;
//! let roster = CandidateRoster::new(store.clone());
//! roster.seed_if_empty(&seed)?;
//!
//! let ledger = VoteLedger::new(store);
//! match ledger.cast_vote(&voter, selection)? {
//!     CastOutcome::Recorded(vote) => { /* confirmation view */ }
//!     CastOutcome::AlreadyVoted(_) => { /* "you already voted" view */ }
//! }
//! ```

mod error;
mod ledger;
mod roster;

pub use ballotline_store::SeedOutcome;
pub use error::Error;
pub use ledger::CastOutcome;
pub use ledger::VoteLedger;
pub use roster::CandidateRoster;
