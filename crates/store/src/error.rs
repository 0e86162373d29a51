//! Error types for the storage layer.

use thiserror::Error;

/// Errors from the storage layer.
///
/// Constraint hits (duplicate voter, unknown candidate) are NOT errors;
/// they are [`crate::VoteInsert`] outcomes. These variants cover genuine
/// faults: the store being unreachable, a record failing to decode, or
/// seed data violating the roster's name uniqueness.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store is unreachable or failed mid-operation.
    /// Retryable from the caller's point of view.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A stored record failed to decode.
    #[error("corrupt record `{key}`: {reason}")]
    Corrupt { key: String, reason: String },

    /// Candidate display names are unique; the seed list repeats one.
    #[error("candidate name `{0}` appears more than once in the seed")]
    DuplicateSeedName(String),
}

impl StoreError {
    pub(crate) fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<redb::DatabaseError> for StoreError {
    fn from(err: redb::DatabaseError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(err: redb::TransactionError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(err: redb::TableError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(err: redb::StorageError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(err: redb::CommitError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
