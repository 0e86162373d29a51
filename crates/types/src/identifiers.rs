//! Domain-specific identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier for an eligible voter.
///
/// Supplied by the external authentication collaborator (typically a
/// registration identifier). The ledger never inspects its contents;
/// it only needs equality and ordering to key the vote table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterKey(pub String);

impl VoterKey {
    /// Create a voter key from anything string-like.
    pub fn new(key: impl Into<String>) -> Self {
        VoterKey(key.into())
    }

    /// Get the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VoterKey {
    fn from(key: &str) -> Self {
        VoterKey(key.to_owned())
    }
}

/// Candidate identifier.
///
/// Assigned by the store at seed time, starting from 1 in seed order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CandidateId(pub u64);

impl CandidateId {
    /// Get the raw value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CandidateId {
    type Err = std::num::ParseIntError;

    /// Parse a candidate id from its decimal form, as submitted by the
    /// rendering collaborator (e.g. a form field).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(CandidateId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voter_key_display_roundtrip() {
        let key = VoterKey::new("S1");
        assert_eq!(key.as_str(), "S1");
        assert_eq!(key.to_string(), "S1");
        assert_eq!(VoterKey::from("S1"), key);
    }

    #[test]
    fn test_candidate_id_from_str() {
        assert_eq!("7".parse::<CandidateId>().unwrap(), CandidateId(7));
        assert_eq!(" 7 ".parse::<CandidateId>().unwrap(), CandidateId(7));
        assert!("".parse::<CandidateId>().is_err());
        assert!("seven".parse::<CandidateId>().is_err());
    }

    #[test]
    fn test_candidate_id_ordering() {
        assert!(CandidateId(1) < CandidateId(2));
        assert_eq!(CandidateId(3).get(), 3);
    }
}
