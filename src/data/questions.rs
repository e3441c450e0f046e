//! Question bank reader.
//!
//! Expected layout, with a header row:
//!
//! ```text
//! id,text,positive,negative
//! 1,"Is your character human?",{1.2.5},{3.4}
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::id_set::parse_id_set;
use crate::core::{QuestionId, QuestionSpec};
use crate::error::{Error, Result};

/// One record, read by position so header names do not matter.
#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: u32,
    text: String,
    positive: String,
    negative: String,
}

/// Read questions from CSV text, keeping file order.
pub fn read_questions<R: Read>(reader: R) -> Result<Vec<QuestionSpec>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut questions = Vec::new();
    for record in csv.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let row: QuestionRow = record.deserialize(None).map_err(|e| Error::InvalidRecord {
            line,
            message: e.to_string(),
        })?;

        questions.push(QuestionSpec::new(
            QuestionId::new(row.id),
            row.text,
            parse_id_set(&row.positive)?,
            parse_id_set(&row.negative)?,
        ));
    }

    debug!(count = questions.len(), "read question bank");
    Ok(questions)
}

/// Read the question bank at `path`.
pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<QuestionSpec>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open question bank {}", path.display()),
        source,
    })?;
    read_questions(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::candidate_set;

    #[test]
    fn test_read_questions() {
        let text = "\
id,question,positive,negative
1,\"Is your character human?\",{1.2.5},{3.4}
2,Does your character fly?,{3},{}
";
        let questions = read_questions(text.as_bytes()).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, QuestionId::new(1));
        assert_eq!(questions[0].text, "Is your character human?");
        assert_eq!(questions[0].yes_ids, candidate_set([1, 2, 5]));
        assert_eq!(questions[0].no_ids, candidate_set([3, 4]));
        assert_eq!(questions[1].text, "Does your character fly?");
        assert!(questions[1].no_ids.is_empty());
    }

    #[test]
    fn test_header_only() {
        let questions = read_questions("id,text,positive,negative\n".as_bytes()).unwrap();
        assert!(questions.is_empty());
    }

    #[test]
    fn test_bad_id_reports_line() {
        let text = "id,text,positive,negative\n1,ok,{1},{2}\nx,bad,{1},{2}\n";
        let err = read_questions(text.as_bytes()).unwrap_err();

        assert!(matches!(err, Error::InvalidRecord { line: 3, .. }), "{:?}", err);
    }

    #[test]
    fn test_bad_set() {
        let text = "id,text,positive,negative\n1,ok,{1;2},{}\n";
        let err = read_questions(text.as_bytes()).unwrap_err();

        assert!(matches!(err, Error::InvalidIdSet { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_questions("/no/such/questions.csv").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
