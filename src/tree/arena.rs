//! Arena-based decision tree.
//!
//! Uses a flat `Vec<TreeNode>` with index-based references. The tree is
//! immutable once built, so it can be shared between sessions behind an
//! `Arc` without locking.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, Outcome, TreeNode};
use crate::error::{Error, Result};

/// Arena-based decision tree.
///
/// Deserializing through any serde format checks the node links, so a
/// loaded tree is always safe to walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTree")]
pub struct DecisionTree {
    /// All nodes in the tree. Children are allocated before their parent.
    nodes: Vec<TreeNode>,

    /// The root node ID.
    root: NodeId,
}

impl DecisionTree {
    /// Empty arena for the builder to fill.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: NodeId::new(0),
        }
    }

    /// Allocate a new node, returning its ID.
    pub(crate) fn alloc(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0 as usize]
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &TreeNode {
        self.get(self.root)
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Follow a sequence of answers from the root.
    ///
    /// Returns `None` if the path runs past a leaf.
    #[must_use]
    pub fn walk(&self, answers: &[bool]) -> Option<NodeId> {
        answers
            .iter()
            .try_fold(self.root, |node, &answer| self.get(node).child(answer))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            node_count: self.nodes.len(),
            ..TreeStats::default()
        };
        if self.nodes.is_empty() {
            return stats;
        }

        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            stats.max_depth = stats.max_depth.max(depth);
            match self.get(id) {
                TreeNode::Internal { yes, no, .. } => {
                    stats.internal_count += 1;
                    stack.push((*yes, depth + 1));
                    stack.push((*no, depth + 1));
                }
                TreeNode::Leaf(Outcome::Identified(_)) => stats.identified += 1,
                TreeNode::Leaf(Outcome::Exhausted) => stats.exhausted += 1,
                TreeNode::Leaf(Outcome::Undistinguishable) => stats.undistinguishable += 1,
                TreeNode::Leaf(Outcome::NoMatch) => stats.no_match += 1,
            }
        }

        stats
    }

    /// Encode the tree as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`DecisionTree::to_bytes`].
    ///
    /// Rejects snapshots whose links break the arena layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Every child must sit at a lower index than its parent, which also
    /// rules out cycles.
    fn check_links(&self) -> Result<()> {
        let links_ok = self.iter().all(|(id, node)| match node {
            TreeNode::Internal { yes, no, .. } => yes.0 < id.0 && no.0 < id.0,
            TreeNode::Leaf(_) => true,
        });

        if (self.root.0 as usize) < self.nodes.len() && links_ok {
            Ok(())
        } else {
            Err(Box::new(bincode::ErrorKind::Custom(format!(
                "node links out of order (arena has {} nodes)",
                self.nodes.len()
            )))
            .into())
        }
    }
}

/// Unchecked wire form of [`DecisionTree`].
#[derive(Deserialize)]
struct RawTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
}

impl TryFrom<RawTree> for DecisionTree {
    type Error = Error;

    fn try_from(raw: RawTree) -> Result<Self> {
        let tree = Self {
            nodes: raw.nodes,
            root: raw.root,
        };
        tree.check_links()?;
        Ok(tree)
    }
}

/// Statistics about a decision tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Number of question nodes.
    pub internal_count: usize,

    /// Questions on the longest root-to-leaf path.
    pub max_depth: usize,

    /// Leaves naming a single candidate.
    pub identified: usize,

    /// Leaves where the questions ran out.
    pub exhausted: usize,

    /// Leaves where no question could narrow the set.
    pub undistinguishable: usize,

    /// Leaves with no candidate left.
    pub no_match: usize,
}

impl TreeStats {
    /// Total number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.identified + self.exhausted + self.undistinguishable + self.no_match
    }
}
