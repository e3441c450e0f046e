//! Decision tree nodes and leaf outcomes.
//!
//! Nodes live in a `DecisionTree` arena and refer to their children by
//! `NodeId` index. There are no parent links; play only walks downward.

use serde::{Deserialize, Serialize};

use crate::core::{CandidateId, QuestionSpec};

/// Index into the `DecisionTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// How a game ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Exactly one candidate is left.
    Identified(CandidateId),

    /// Questions ran out with two or more candidates left.
    Exhausted,

    /// Questions remain but none of them narrows the candidates.
    Undistinguishable,

    /// Every candidate has been ruled out.
    NoMatch,
}

impl Outcome {
    /// The identified candidate, if any.
    #[must_use]
    pub fn candidate(self) -> Option<CandidateId> {
        match self {
            Outcome::Identified(id) => Some(id),
            _ => None,
        }
    }

    /// Check if this outcome names a candidate.
    #[must_use]
    pub fn is_identified(self) -> bool {
        matches!(self, Outcome::Identified(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Identified(id) => write!(f, "identified {}", id),
            Outcome::Exhausted => write!(f, "no more questions, unable to identify"),
            Outcome::Undistinguishable => write!(f, "unable to further differentiate"),
            Outcome::NoMatch => write!(f, "no candidate matches"),
        }
    }
}

/// A node in the decision tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Ask `question`, then follow `yes` or `no`.
    ///
    /// `question` keeps the full id sets from the bank, not the sets
    /// intersected during building.
    Internal {
        question: QuestionSpec,
        yes: NodeId,
        no: NodeId,
    },

    /// End of the game.
    Leaf(Outcome),
}

impl TreeNode {
    /// The question asked here, if this is an internal node.
    #[must_use]
    pub fn question(&self) -> Option<&QuestionSpec> {
        match self {
            TreeNode::Internal { question, .. } => Some(question),
            TreeNode::Leaf(_) => None,
        }
    }

    /// The outcome, if this is a leaf.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            TreeNode::Internal { .. } => None,
            TreeNode::Leaf(outcome) => Some(*outcome),
        }
    }

    /// Child reached by `answer`, if this is an internal node.
    #[must_use]
    pub fn child(&self, answer: bool) -> Option<NodeId> {
        match self {
            TreeNode::Internal { yes, no, .. } => Some(if answer { *yes } else { *no }),
            TreeNode::Leaf(_) => None,
        }
    }

    /// Check if this is a leaf.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{candidate_set, QuestionId};

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "NodeId(5)");
    }

    #[test]
    fn test_outcome_candidate() {
        assert_eq!(Outcome::Identified(CandidateId(3)).candidate(), Some(CandidateId(3)));
        assert!(Outcome::Identified(CandidateId(3)).is_identified());
        assert_eq!(Outcome::Exhausted.candidate(), None);
        assert!(!Outcome::NoMatch.is_identified());
    }

    #[test]
    fn test_internal_node_accessors() {
        let node = TreeNode::Internal {
            question: QuestionSpec::new(
                QuestionId::new(1),
                "Does it fly?",
                candidate_set([1]),
                candidate_set([2]),
            ),
            yes: NodeId::new(1),
            no: NodeId::new(2),
        };

        assert!(!node.is_leaf());
        assert_eq!(node.question().unwrap().text, "Does it fly?");
        assert_eq!(node.outcome(), None);
        assert_eq!(node.child(true), Some(NodeId::new(1)));
        assert_eq!(node.child(false), Some(NodeId::new(2)));
    }

    #[test]
    fn test_leaf_accessors() {
        let node = TreeNode::Leaf(Outcome::Exhausted);

        assert!(node.is_leaf());
        assert!(node.question().is_none());
        assert_eq!(node.outcome(), Some(Outcome::Exhausted));
        assert_eq!(node.child(true), None);
    }

    #[test]
    fn test_serialization() {
        let node = TreeNode::Leaf(Outcome::Identified(CandidateId(9)));
        let json = serde_json::to_string(&node).unwrap();
        let deserialized: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, deserialized);
    }
}
