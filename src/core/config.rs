//! Game configuration.
//!
//! `GameConfig` names the data files and the knobs that shape the tree.
//! It can be built in code with the `with_*` methods or loaded from TOML:
//!
//! ```toml
//! questions_path = "data/questions.csv"
//! characters_path = "data/characters.csv"
//! universe = [1, 2, 3, 4]
//! strict_splits = false
//! no_match_character = 0
//! seed = 42
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::candidate::{CandidateId, CandidateSet};
use crate::error::{Error, Result};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Question bank CSV.
    pub questions_path: PathBuf,

    /// Characters CSV, used for by-id lookup of the answer.
    pub characters_path: PathBuf,

    /// Fixed universe. `None` means "every id in the characters file".
    pub universe: Option<CandidateSet>,

    /// Skip questions that cannot shrink the candidate set.
    ///
    /// Off by default, which keeps the plain balance score.
    pub strict_splits: bool,

    /// Character shown when no candidate matches the answers.
    pub no_match_character: Option<CandidateId>,

    /// Seed for simulated play-outs.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from("questions.csv"),
            characters_path: PathBuf::from("characters.csv"),
            universe: None,
            strict_splits: false,
            no_match_character: None,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default file names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the question bank path.
    #[must_use]
    pub fn with_questions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.questions_path = path.into();
        self
    }

    /// Set the characters file path.
    #[must_use]
    pub fn with_characters_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.characters_path = path.into();
        self
    }

    /// Fix the universe instead of deriving it from the characters file.
    #[must_use]
    pub fn with_universe(mut self, universe: CandidateSet) -> Self {
        self.universe = Some(universe);
        self
    }

    /// Only use questions that can shrink the candidate set.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict_splits = true;
        self
    }

    /// Set the placeholder character for the no-match outcome.
    #[must_use]
    pub fn with_no_match_character(mut self, id: CandidateId) -> Self {
        self.no_match_character = Some(id);
        self
    }

    /// Set the simulation seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
