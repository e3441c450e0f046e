//! Decision tree construction and storage.
//!
//! ## Overview
//!
//! - [`TreeBuilder`] turns a universe of candidates and a question bank into
//!   a [`DecisionTree`], once, at startup.
//! - [`DecisionTree`] is an immutable arena of [`TreeNode`]s. Internal nodes
//!   ask a question; leaves carry an [`Outcome`].
//!
//! Building is deterministic: the same inputs always give the same tree.

pub mod arena;
pub mod builder;
pub mod node;

pub use arena::{DecisionTree, TreeStats};
pub use builder::{build, BuilderOptions, TreeBuilder};
pub use node::{NodeId, Outcome, TreeNode};
