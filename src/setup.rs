//! Wiring a configuration into a ready-to-play tree.

use std::sync::Arc;

use tracing::info;

use crate::core::{CandidateId, CandidateSet, GameConfig};
use crate::data::{load_questions, Character, CharacterFile};
use crate::engine::GameEngine;
use crate::error::Result;
use crate::tree::{BuilderOptions, DecisionTree, Outcome, TreeBuilder};

/// Everything a session needs, built once from a [`GameConfig`].
#[derive(Clone, Debug)]
pub struct GameSetup {
    tree: Arc<DecisionTree>,
    universe: CandidateSet,
    characters: CharacterFile,
    no_match_character: Option<CandidateId>,
}

impl GameSetup {
    /// Read the question bank, settle the universe and build the tree.
    ///
    /// Without an explicit universe, every id in the characters file is used.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let questions = load_questions(&config.questions_path)?;
        let characters = CharacterFile::new(&config.characters_path);
        let universe = match &config.universe {
            Some(universe) => universe.clone(),
            None => characters.universe()?,
        };

        let tree = TreeBuilder::new(&questions)
            .with_options(BuilderOptions::from(config))
            .build(&universe);
        info!(
            questions = questions.len(),
            candidates = universe.len(),
            "game ready"
        );

        Ok(Self {
            tree: Arc::new(tree),
            universe,
            characters,
            no_match_character: config.no_match_character,
        })
    }

    /// The shared tree.
    #[must_use]
    pub fn tree(&self) -> &Arc<DecisionTree> {
        &self.tree
    }

    /// Candidates every game starts with.
    #[must_use]
    pub fn universe(&self) -> &CandidateSet {
        &self.universe
    }

    /// Start a new session.
    #[must_use]
    pub fn new_game(&self) -> GameEngine {
        GameEngine::new(Arc::clone(&self.tree), self.universe.clone())
    }

    /// Look up the character to show for `outcome`.
    pub fn character_for(&self, outcome: Outcome) -> Result<Option<Character>> {
        self.characters.resolve(outcome, self.no_match_character)
    }
}
