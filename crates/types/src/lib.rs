//! Core types for the Ballotline vote ledger.
//!
//! This crate holds the domain records shared by the storage layer, the
//! ledger, and the tally engine: voter and candidate identifiers, the
//! candidate record, and the vote record. It has no storage or policy
//! logic of its own.

mod candidate;
mod identifiers;
mod vote;

pub use candidate::Candidate;
pub use candidate::CandidateSeed;
pub use identifiers::CandidateId;
pub use identifiers::VoterKey;
pub use vote::Vote;
pub use vote::VoteReceipt;
