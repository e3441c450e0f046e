//! Greedy decision tree construction.
//!
//! At every node the builder picks the question whose yes/no split of the
//! remaining candidates is most balanced, then recurses into both halves
//! with that question removed from the pool.
//!
//! ## Selection rule
//!
//! Each question is scored `| |remaining ∩ yes| - |remaining ∩ no| |` and the
//! lowest score wins. Ties go to the question that comes first in the input
//! list. A question that covers none of the remaining candidates scores 0
//! and can win; [`BuilderOptions::strict_splits`] excludes such questions.
//!
//! ```
//! use question_tree::core::{candidate_set, QuestionId, QuestionSpec};
//! use question_tree::tree::build;
//!
//! let questions = vec![QuestionSpec::new(
//!     QuestionId::new(1),
//!     "Is it a cat?",
//!     candidate_set([1]),
//!     candidate_set([2]),
//! )];
//! let tree = build(&candidate_set([1, 2]), &questions);
//!
//! assert_eq!(tree.stats().identified, 2);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::arena::DecisionTree;
use super::node::{NodeId, Outcome, TreeNode};
use crate::core::{sole, CandidateSet, GameConfig, QuestionSpec};

/// Options that change which questions the builder may pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderOptions {
    /// Only consider questions that can shrink the candidate set.
    ///
    /// When no question qualifies the node becomes
    /// [`Outcome::Undistinguishable`].
    pub strict_splits: bool,
}

impl From<&GameConfig> for BuilderOptions {
    fn from(config: &GameConfig) -> Self {
        Self {
            strict_splits: config.strict_splits,
        }
    }
}

/// Builds a [`DecisionTree`] from a question bank.
#[derive(Clone, Debug)]
pub struct TreeBuilder<'a> {
    questions: &'a [QuestionSpec],
    options: BuilderOptions,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder over `questions` with default options.
    pub fn new(questions: &'a [QuestionSpec]) -> Self {
        Self {
            questions,
            options: BuilderOptions::default(),
        }
    }

    /// Replace the builder options.
    #[must_use]
    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    /// Only consider questions that can shrink the candidate set.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.options.strict_splits = true;
        self
    }

    /// Build the tree for `universe`.
    ///
    /// Never fails: every input resolves to a tree, ids outside `universe`
    /// are ignored.
    #[must_use]
    pub fn build(&self, universe: &CandidateSet) -> DecisionTree {
        let mut tree = DecisionTree::with_capacity(2 * self.questions.len() + 1);
        let pool: Vec<usize> = (0..self.questions.len()).collect();

        let root = self.build_node(&mut tree, universe.clone(), &pool);
        tree.set_root(root);

        let stats = tree.stats();
        info!(
            candidates = universe.len(),
            questions = self.questions.len(),
            nodes = stats.node_count,
            depth = stats.max_depth,
            identified = stats.identified,
            "built decision tree"
        );
        tree
    }

    /// `pool` holds indices into `self.questions`, in input order.
    fn build_node(&self, tree: &mut DecisionTree, remaining: CandidateSet, pool: &[usize]) -> NodeId {
        if let Some(only) = sole(&remaining) {
            return leaf(tree, Outcome::Identified(only));
        }
        if remaining.is_empty() {
            return leaf(tree, Outcome::NoMatch);
        }
        if pool.is_empty() {
            return leaf(tree, Outcome::Exhausted);
        }

        let Some(slot) = self.select(&remaining, pool) else {
            return leaf(tree, Outcome::Undistinguishable);
        };

        let question = &self.questions[pool[slot]];
        let pos_hit = question.pos_hit(&remaining);
        let neg_hit = question.neg_hit(&remaining);
        debug!(
            question = %question.id,
            remaining = remaining.len(),
            yes = pos_hit.len(),
            no = neg_hit.len(),
            "selected question"
        );

        let rest: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != slot)
            .map(|(_, &q)| q)
            .collect();

        let yes = self.build_node(tree, pos_hit, &rest);
        let no = self.build_node(tree, neg_hit, &rest);

        tree.alloc(TreeNode::Internal {
            question: question.clone(),
            yes,
            no,
        })
    }

    /// Position in `pool` of the best question, first one on ties.
    fn select(&self, remaining: &CandidateSet, pool: &[usize]) -> Option<usize> {
        pool.iter()
            .enumerate()
            .map(|(slot, &q)| (slot, &self.questions[q]))
            .filter(|(_, question)| !self.options.strict_splits || question.narrows(remaining))
            .min_by_key(|(_, question)| question.split_score(remaining))
            .map(|(slot, _)| slot)
    }
}

fn leaf(tree: &mut DecisionTree, outcome: Outcome) -> NodeId {
    trace!(%outcome, "leaf");
    tree.alloc(TreeNode::Leaf(outcome))
}

/// Build a tree with default options.
#[must_use]
pub fn build(universe: &CandidateSet, questions: &[QuestionSpec]) -> DecisionTree {
    TreeBuilder::new(questions).build(universe)
}
