//! Core types: candidate ids, questions, configuration, RNG.
//!
//! Nothing here knows about trees or sessions; the builder and the engine
//! are layered on top.

pub mod candidate;
pub mod question;
pub mod config;
pub mod rng;

pub use candidate::{candidate_set, intersect, sole, subtract, CandidateId, CandidateSet};
pub use question::{QuestionId, QuestionSpec};
pub use config::GameConfig;
pub use rng::GameRng;
