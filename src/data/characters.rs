//! Character file lookup.
//!
//! The characters file maps candidate ids to display data:
//!
//! ```text
//! id,name,image
//! 1,Ada Lovelace,images/ada.png
//! ```
//!
//! Records are looked up on demand; nothing is cached between calls.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{CandidateId, CandidateSet};
use crate::error::{Error, Result};
use crate::tree::Outcome;

/// Display data for a candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Candidate this record describes.
    pub id: CandidateId,

    /// Display name.
    pub name: String,

    /// Path to the portrait.
    pub image_path: String,
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source)
}

fn rows<R: Read>(csv: &mut csv::Reader<R>) -> impl Iterator<Item = Result<Character>> + '_ {
    csv.records().map(|record| -> Result<Character> {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        record.deserialize(None).map_err(|e| Error::InvalidRecord {
            line,
            message: e.to_string(),
        })
    })
}

/// Scan CSV text for the character with `id`.
pub fn find_character<R: Read>(source: R, id: CandidateId) -> Result<Character> {
    let mut csv = reader(source);
    for row in rows(&mut csv) {
        let character = row?;
        if character.id == id {
            return Ok(character);
        }
    }
    Err(Error::CharacterNotFound { id })
}

/// Collect every id in CSV text.
pub fn read_universe<R: Read>(source: R) -> Result<CandidateSet> {
    let mut csv = reader(source);
    rows(&mut csv).map(|row| row.map(|c| c.id)).collect()
}

/// Characters file on disk, read on every lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterFile {
    path: PathBuf,
}

impl CharacterFile {
    /// Refer to the characters file at `path`. The file is not opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File> {
        File::open(&self.path).map_err(|source| Error::Io {
            operation: format!("open characters file {}", self.path.display()),
            source,
        })
    }

    /// Find the character with `id`.
    pub fn lookup(&self, id: CandidateId) -> Result<Character> {
        find_character(self.open()?, id)
    }

    /// Every id in the file, for use as the universe.
    pub fn universe(&self) -> Result<CandidateSet> {
        read_universe(self.open()?)
    }

    /// Character to show for a finished game.
    ///
    /// `Identified` resolves its candidate; `NoMatch` resolves `no_match`
    /// when one is configured. Other outcomes have no character.
    pub fn resolve(&self, outcome: Outcome, no_match: Option<CandidateId>) -> Result<Option<Character>> {
        let id = match outcome {
            Outcome::Identified(id) => Some(id),
            Outcome::NoMatch => no_match,
            Outcome::Exhausted | Outcome::Undistinguishable => None,
        };
        id.map(|id| self.lookup(id)).transpose()
    }
}
