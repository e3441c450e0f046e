//! Candidate identification.
//!
//! Every character the game can guess has a `CandidateId`. The engine never
//! interprets these ids; names and images live in an external lookup.
//!
//! ## Usage
//!
//! ```
//! use question_tree::core::{candidate_set, CandidateId};
//!
//! let universe = candidate_set([1, 2, 3]);
//!
//! assert!(universe.contains(&CandidateId(2)));
//! assert_eq!(universe.len(), 3);
//! ```

use im::OrdSet;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a guessable candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub u32);

impl CandidateId {
    /// Create a new candidate ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CandidateId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Candidate({})", self.0)
    }
}

/// Ordered set of candidates.
///
/// Persistent, so cloning a universe for a new session is O(1).
pub type CandidateSet = OrdSet<CandidateId>;

/// Build a candidate set from raw ids.
pub fn candidate_set(ids: impl IntoIterator<Item = u32>) -> CandidateSet {
    ids.into_iter().map(CandidateId).collect()
}

/// `remaining ∩ ids`, evaluated against `remaining`.
///
/// Ids in `ids` that are not in `remaining` are ignored.
#[must_use]
pub fn intersect(remaining: &CandidateSet, ids: &CandidateSet) -> CandidateSet {
    remaining.iter().copied().filter(|id| ids.contains(id)).collect()
}

/// The only member of `set`, if it has exactly one.
#[must_use]
pub fn sole(set: &CandidateSet) -> Option<CandidateId> {
    let mut ids = set.iter();
    match (ids.next(), ids.next()) {
        (Some(&only), None) => Some(only),
        _ => None,
    }
}

/// `remaining − ids`.
#[must_use]
pub fn subtract(remaining: &CandidateSet, ids: &CandidateSet) -> CandidateSet {
    remaining.iter().copied().filter(|id| !ids.contains(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_id() {
        let id = CandidateId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(CandidateId::from(7), id);
        assert_eq!(format!("{}", id), "Candidate(7)");
    }

    #[test]
    fn test_intersect_ignores_foreign_ids() {
        let remaining = candidate_set([1, 2, 3]);
        let ids = candidate_set([2, 3, 40]);

        assert_eq!(intersect(&remaining, &ids), candidate_set([2, 3]));
    }

    #[test]
    fn test_subtract() {
        let remaining = candidate_set([1, 2, 3, 4]);

        assert_eq!(subtract(&remaining, &candidate_set([3, 4, 9])), candidate_set([1, 2]));
        assert_eq!(subtract(&remaining, &CandidateSet::new()), remaining);
    }

    #[test]
    fn test_sole() {
        assert_eq!(sole(&candidate_set([4])), Some(CandidateId(4)));
        assert_eq!(sole(&candidate_set([4, 5])), None);
        assert_eq!(sole(&CandidateSet::new()), None);
    }

    #[test]
    fn test_serialization() {
        let set = candidate_set([5, 1, 3]);
        let json = serde_json::to_string(&set).unwrap();
        let deserialized: CandidateSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, deserialized);
    }
}
