//! File formats around the core: the question bank and the characters file.
//!
//! The tree and the engine never touch files; they take the
//! `Vec<QuestionSpec>` and `CandidateSet` produced here.

mod characters;
mod id_set;
mod questions;

pub use characters::{find_character, read_universe, Character, CharacterFile};
pub use id_set::parse_id_set;
pub use questions::{load_questions, read_questions};
