//! Game sessions.
//!
//! A [`GameEngine`] walks a built [`DecisionTree`](crate::tree::DecisionTree)
//! one answer at a time while narrowing its own candidate set.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use question_tree::core::{candidate_set, CandidateId, QuestionId, QuestionSpec};
//! use question_tree::engine::GameEngine;
//! use question_tree::tree::{build, Outcome};
//!
//! let universe = candidate_set([1, 2]);
//! let questions = vec![QuestionSpec::new(
//!     QuestionId::new(1),
//!     "Does it bark?",
//!     candidate_set([1]),
//!     candidate_set([2]),
//! )];
//! let tree = Arc::new(build(&universe, &questions));
//!
//! let mut game = GameEngine::new(tree, universe);
//! assert_eq!(game.current_question(), Some("Does it bark?"));
//!
//! game.submit_answer(true).unwrap();
//! assert_eq!(game.current_outcome(), Some(Outcome::Identified(CandidateId(1))));
//! ```

mod game;

pub use game::{AnswerRecord, GameEngine};
