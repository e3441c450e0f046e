//! A single guessing session over a shared decision tree.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{sole, subtract, CandidateId, CandidateSet, QuestionId, QuestionSpec};
use crate::error::{Error, Result};
use crate::tree::{DecisionTree, NodeId, Outcome, TreeNode};

/// One answered question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Question that was asked.
    pub question: QuestionId,

    /// `true` for "yes".
    pub answer: bool,
}

/// Cursor into a [`DecisionTree`] plus the candidates still consistent with
/// the answers given.
///
/// The tree is shared and never modified; each engine owns its cursor and
/// candidate set. Cloning an engine forks the session.
///
/// ## State machine
///
/// - Cursor on an internal node: a question is pending, answers are accepted.
/// - Cursor on a leaf: the game is over, [`GameEngine::current_outcome`]
///   reports how, and further answers are rejected.
#[derive(Clone, Debug)]
pub struct GameEngine {
    tree: Arc<DecisionTree>,

    /// Candidate set at the start of every round.
    universe: CandidateSet,

    cursor: NodeId,

    /// Only ever shrinks within a round.
    remaining: CandidateSet,

    history: SmallVec<[AnswerRecord; 16]>,
}

impl GameEngine {
    /// Start a session at the root of `tree` with every candidate in play.
    #[must_use]
    pub fn new(tree: Arc<DecisionTree>, universe: CandidateSet) -> Self {
        let cursor = tree.root();
        Self {
            tree,
            remaining: universe.clone(),
            universe,
            cursor,
            history: SmallVec::new(),
        }
    }

    // === Reads ===

    /// Text of the pending question, `None` once the game is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        self.current_question_spec().map(|q| q.text.as_str())
    }

    /// The pending question, `None` once the game is over.
    #[must_use]
    pub fn current_question_spec(&self) -> Option<&QuestionSpec> {
        self.tree.get(self.cursor).question()
    }

    /// How the game ended, `None` while a question is pending.
    #[must_use]
    pub fn current_outcome(&self) -> Option<Outcome> {
        self.tree.get(self.cursor).outcome()
    }

    /// The pending question, or `InvalidState` if the game is over.
    pub fn require_question(&self) -> Result<&QuestionSpec> {
        self.current_question_spec().ok_or(Error::InvalidState {
            operation: "read the current question",
            reason: "the game is over",
        })
    }

    /// The outcome, or `InvalidState` if a question is still pending.
    pub fn require_outcome(&self) -> Result<Outcome> {
        self.current_outcome().ok_or(Error::InvalidState {
            operation: "read the outcome",
            reason: "a question is still pending",
        })
    }

    /// Check if the cursor is on a leaf.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.tree.get(self.cursor).is_leaf()
    }

    /// Candidates consistent with every answer so far.
    #[must_use]
    pub fn remaining(&self) -> &CandidateSet {
        &self.remaining
    }

    /// The single remaining candidate, if exactly one is left.
    #[must_use]
    pub fn sole_candidate(&self) -> Option<CandidateId> {
        sole(&self.remaining)
    }

    /// Candidate set this session starts each round with.
    #[must_use]
    pub fn universe(&self) -> &CandidateSet {
        &self.universe
    }

    /// Current node.
    #[must_use]
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// The shared tree.
    #[must_use]
    pub fn tree(&self) -> &Arc<DecisionTree> {
        &self.tree
    }

    /// Answers given this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    // === Transitions ===

    /// Answer the pending question and move to the matching child.
    ///
    /// "Yes" drops every candidate in the question's `no_ids`; "no" drops
    /// every candidate in its `yes_ids`. Fails with `InvalidState` once the
    /// game is over, leaving the engine unchanged.
    pub fn submit_answer(&mut self, answer: bool) -> Result<()> {
        let TreeNode::Internal { question, yes, no } = self.tree.get(self.cursor) else {
            warn!(cursor = %self.cursor, "answer submitted after the game ended");
            return Err(Error::InvalidState {
                operation: "submit an answer",
                reason: "the game is over",
            });
        };

        let (excluded, next) = if answer {
            (&question.no_ids, *yes)
        } else {
            (&question.yes_ids, *no)
        };
        self.remaining = subtract(&self.remaining, excluded);
        self.history.push(AnswerRecord {
            question: question.id,
            answer,
        });
        debug!(
            question = %question.id,
            answer,
            remaining = self.remaining.len(),
            "answer applied"
        );

        self.cursor = next;
        Ok(())
    }

    /// Start a new round on the same tree.
    pub fn reset(&mut self) {
        self.cursor = self.tree.root();
        self.remaining = self.universe.clone();
        self.history.clear();
    }
}
