//! The `{a.b.c}` id-set notation used by the question bank.
//!
//! Ids are separated by periods so the set can sit inside a comma-separated
//! record without quoting. `{}` is the empty set.

use crate::core::{CandidateId, CandidateSet};
use crate::error::{Error, Result};

/// Parse `{a.b.c}` into a candidate set.
///
/// ```
/// use question_tree::core::candidate_set;
/// use question_tree::data::parse_id_set;
///
/// assert_eq!(parse_id_set("{3.1.2}").unwrap(), candidate_set([1, 2, 3]));
/// assert!(parse_id_set("{}").unwrap().is_empty());
/// ```
pub fn parse_id_set(value: &str) -> Result<CandidateSet> {
    let invalid = |reason: String| Error::InvalidIdSet {
        value: value.to_string(),
        reason,
    };

    let inner = value
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| invalid("expected braces around the ids".to_string()))?;

    if inner.trim().is_empty() {
        return Ok(CandidateSet::new());
    }

    inner
        .split('.')
        .map(|item| {
            let item = item.trim();
            item.parse::<u32>()
                .map(CandidateId)
                .map_err(|e| invalid(format!("'{}' is not an id: {}", item, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::candidate_set;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_id_set("{1.2.3}").unwrap(), candidate_set([1, 2, 3]));
        assert_eq!(parse_id_set("{32}").unwrap(), candidate_set([32]));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_id_set("{}").unwrap().is_empty());
        assert!(parse_id_set(" { } ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_duplicates() {
        assert_eq!(parse_id_set(" {4. 5 .4} ").unwrap(), candidate_set([4, 5]));
    }

    #[test]
    fn test_parse_missing_braces() {
        let err = parse_id_set("1.2.3").unwrap_err();
        assert!(matches!(err, Error::InvalidIdSet { .. }));
    }

    #[test]
    fn test_parse_bad_item() {
        assert!(matches!(parse_id_set("{1..2}"), Err(Error::InvalidIdSet { .. })));
        assert!(matches!(parse_id_set("{1,2}"), Err(Error::InvalidIdSet { .. })));
        assert!(matches!(parse_id_set("{-4}"), Err(Error::InvalidIdSet { .. })));
    }
}
