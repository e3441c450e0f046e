//! Simulated play for measuring a built tree.
//!
//! An [`Oracle`] answers for a secret candidate; [`simulate`] plays one
//! session to its leaf and [`evaluate`] does so for every candidate.

mod oracle;
mod report;

pub use oracle::{simulate, Oracle, PlayOut};
pub use report::{evaluate, EvaluationReport};
