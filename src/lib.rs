//! # question-tree
//!
//! Guess a character from a fixed set by asking yes/no questions.
//!
//! ## Design
//!
//! 1. **Build once**: a greedy builder turns the question bank into an
//!    immutable binary decision tree, choosing at each node the question
//!    that splits the remaining candidates most evenly.
//!
//! 2. **Play many**: each session is a `GameEngine` holding a cursor into the
//!    shared tree and its own shrinking candidate set.
//!
//! 3. **Files at the edge**: the core takes plain `QuestionSpec`s and a
//!    candidate set. CSV parsing and character lookup live in `data`.
//!
//! ## Modules
//!
//! - `core`: Candidate and question ids, question specs, configuration, RNG
//! - `tree`: Decision tree arena and the greedy builder
//! - `engine`: Game sessions over a built tree
//! - `simulate`: Scripted play-outs for measuring a tree
//! - `data`: Question bank and characters file formats
//! - `setup`: Config-driven wiring of the above
//! - `logging`: Tracing subscriber for binaries

pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod logging;
pub mod setup;
pub mod simulate;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{
    candidate_set, CandidateId, CandidateSet, GameConfig, GameRng, QuestionId, QuestionSpec,
};

pub use crate::tree::{build, BuilderOptions, DecisionTree, NodeId, Outcome, TreeBuilder, TreeNode, TreeStats};

pub use crate::engine::{AnswerRecord, GameEngine};

pub use crate::simulate::{evaluate, simulate, EvaluationReport, Oracle, PlayOut};

pub use crate::data::{Character, CharacterFile};

pub use crate::setup::GameSetup;

pub use crate::error::{Error, Result};
