//! Whole-tree evaluation.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::info;

use super::oracle::{simulate, PlayOut};
use crate::core::{CandidateId, CandidateSet, GameRng};
use crate::engine::GameEngine;
use crate::error::Result;
use crate::tree::{DecisionTree, Outcome};

/// How well a tree identifies every candidate in its universe.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EvaluationReport {
    /// Games played, one per candidate.
    pub games: usize,

    /// Games that named the secret.
    pub correct: usize,

    /// Games that named somebody else.
    pub misidentified: usize,

    /// Games ending in [`Outcome::Exhausted`].
    pub exhausted: usize,

    /// Games ending in [`Outcome::Undistinguishable`].
    pub undistinguishable: usize,

    /// Games ending in [`Outcome::NoMatch`].
    pub no_match: usize,

    /// Questions asked across all games.
    pub total_questions: usize,

    /// Longest game.
    pub max_questions: usize,

    /// Result per secret.
    pub results: FxHashMap<CandidateId, PlayOut>,
}

impl EvaluationReport {
    fn record(&mut self, play: PlayOut) {
        self.games += 1;
        self.total_questions += play.questions_asked;
        self.max_questions = self.max_questions.max(play.questions_asked);

        match play.outcome {
            Outcome::Identified(_) if play.is_correct() => self.correct += 1,
            Outcome::Identified(_) => self.misidentified += 1,
            Outcome::Exhausted => self.exhausted += 1,
            Outcome::Undistinguishable => self.undistinguishable += 1,
            Outcome::NoMatch => self.no_match += 1,
        }

        self.results.insert(play.secret, play);
    }

    /// Fraction of games that named the secret.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.correct as f64 / self.games as f64
        }
    }

    /// Average questions per game.
    #[must_use]
    pub fn mean_questions(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_questions as f64 / self.games as f64
        }
    }
}

/// Play one game per candidate in `universe` and tally the outcomes.
///
/// Each game gets its own fork of the seeded RNG, so results do not depend
/// on how many coin flips earlier games needed.
pub fn evaluate(tree: Arc<DecisionTree>, universe: &CandidateSet, seed: u64) -> Result<EvaluationReport> {
    let mut rng = GameRng::new(seed);
    let mut report = EvaluationReport::default();

    for &secret in universe.iter() {
        let mut engine = GameEngine::new(Arc::clone(&tree), universe.clone());
        let mut game_rng = rng.fork();
        report.record(simulate(&mut engine, secret, &mut game_rng)?);
    }

    info!(
        games = report.games,
        correct = report.correct,
        mean_questions = report.mean_questions(),
        "evaluated decision tree"
    );
    Ok(report)
}
