//! Scripted play against a known secret candidate.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CandidateId, CandidateSet, GameRng, QuestionSpec};
use crate::engine::GameEngine;
use crate::error::Result;
use crate::tree::Outcome;

/// Answers questions truthfully for a secret candidate.
///
/// A secret listed under both answers says "yes". A secret listed under
/// neither answers with a coin flip, which is what an unprepared player
/// would do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Oracle {
    secret: CandidateId,
}

impl Oracle {
    /// Create an oracle thinking of `secret`.
    #[must_use]
    pub fn new(secret: CandidateId) -> Self {
        Self { secret }
    }

    /// The candidate being guessed.
    #[must_use]
    pub fn secret(&self) -> CandidateId {
        self.secret
    }

    /// Answer `question`.
    pub fn answer(&self, question: &QuestionSpec, rng: &mut GameRng) -> bool {
        if question.yes_ids.contains(&self.secret) {
            true
        } else if question.no_ids.contains(&self.secret) {
            false
        } else {
            rng.gen_bool(0.5)
        }
    }
}

/// Result of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOut {
    /// Candidate the oracle was thinking of.
    pub secret: CandidateId,

    /// Leaf the game ended on.
    pub outcome: Outcome,

    /// Questions answered before the leaf.
    pub questions_asked: usize,

    /// Candidates still in play at the end.
    pub remaining: CandidateSet,
}

impl PlayOut {
    /// Check if the game named the secret.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.outcome == Outcome::Identified(self.secret)
    }
}

/// Play `engine` to the end with an oracle for `secret`.
///
/// Starts from wherever the engine currently is.
pub fn simulate(engine: &mut GameEngine, secret: CandidateId, rng: &mut GameRng) -> Result<PlayOut> {
    let oracle = Oracle::new(secret);
    let start = engine.history().len();

    while let Some(question) = engine.current_question_spec() {
        let answer = oracle.answer(question, rng);
        trace!(%secret, question = %question.id, answer, "oracle answer");
        engine.submit_answer(answer)?;
    }

    Ok(PlayOut {
        secret,
        outcome: engine.require_outcome()?,
        questions_asked: engine.history().len() - start,
        remaining: engine.remaining().clone(),
    })
}
