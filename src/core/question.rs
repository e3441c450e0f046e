//! Questions and the split score used to rank them.

use serde::{Deserialize, Serialize};

use super::candidate::{intersect, CandidateSet};

/// Question identifier, as declared by the question bank.
///
/// Duplicates are tolerated; the builder tracks questions by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// Create a new question ID.
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

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Question({})", self.0)
    }
}

/// A yes/no question and the candidates each answer points to.
///
/// `yes_ids` and `no_ids` need not be disjoint or cover the universe.
/// A candidate in neither set is not discriminated by this question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Identifier from the question bank.
    pub id: QuestionId,

    /// Text shown to the player.
    pub text: String,

    /// Candidates for which the answer is "yes".
    pub yes_ids: CandidateSet,

    /// Candidates for which the answer is "no".
    pub no_ids: CandidateSet,
}

impl QuestionSpec {
    /// Create a new question.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        yes_ids: CandidateSet,
        no_ids: CandidateSet,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            yes_ids,
            no_ids,
        }
    }

    /// Candidates in `remaining` that answer "yes".
    #[must_use]
    pub fn pos_hit(&self, remaining: &CandidateSet) -> CandidateSet {
        intersect(remaining, &self.yes_ids)
    }

    /// Candidates in `remaining` that answer "no".
    #[must_use]
    pub fn neg_hit(&self, remaining: &CandidateSet) -> CandidateSet {
        intersect(remaining, &self.no_ids)
    }

    /// Imbalance of the split this question makes on `remaining`.
    ///
    /// `| |pos_hit| - |neg_hit| |`, lower is better. A question that covers
    /// none of `remaining` scores 0.
    #[must_use]
    pub fn split_score(&self, remaining: &CandidateSet) -> usize {
        self.pos_hit(remaining)
            .len()
            .abs_diff(self.neg_hit(remaining).len())
    }

    /// Whether asking this question can shrink `remaining`.
    ///
    /// True when at least one branch is a non-empty strict subset of
    /// `remaining`.
    #[must_use]
    pub fn narrows(&self, remaining: &CandidateSet) -> bool {
        let n = remaining.len();
        let pos = self.pos_hit(remaining).len();
        let neg = self.neg_hit(remaining).len();
        (pos > 0 && pos < n) || (neg > 0 && neg < n)
    }
}
