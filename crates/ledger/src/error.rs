//! Error types for ledger operations.

use ballotline_store::StoreError;
use ballotline_types::CandidateId;
use thiserror::Error;

/// Errors from roster and ledger operations.
///
/// "Already voted" is deliberately NOT here: it is a legitimate
/// terminal outcome ([`crate::CastOutcome::AlreadyVoted`]), so callers
/// can route it to a confirmation view instead of an error view.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller submitted no candidate selection. Recoverable by
    /// re-prompting.
    #[error("no candidate selected")]
    EmptySelection,

    /// The selected candidate does not exist, indicating a stale or tampered
    /// request. Nothing was recorded.
    #[error("unknown candidate id {0}")]
    UnknownCandidate(CandidateId),

    /// The underlying store failed. Retryable by the caller; never
    /// retried here.
    #[error(transparent)]
    Store(#[from] StoreError),
}
