//! Composable pattern matching over typed syntax trees.
//!
//! Callers describe a structural/semantic shape — "a lambda whose single
//! parameter declares symbol `S`, with a one-statement body" — as a tree
//! of immutable matcher values, then evaluate it against concrete nodes,
//! node sequences, or whole subtrees.
//!
//! The syntax tree and the symbol resolver are external: hosts supply
//! them through the [`tree::Tree`] and [`resolve::Resolve`] traits, and
//! the algebra never depends on a concrete parser's node types.
//!
//! Two callback disciplines share one set of matchers: the boolean model
//! (built via [`pattern::build`], side-effecting callbacks) and the fold
//! model (built via [`pattern::fold`], callbacks thread an accumulator).
//! [`walk::Finder`] applies a matcher lazily across ancestor, child,
//! descendant, and annotation relations.

pub mod error;
pub mod pattern;
pub mod resolve;
pub mod tree;
pub mod walk;

#[cfg(test)]
pub mod testutil;

pub use error::{Error, Result};
pub use pattern::{
    BoxPattern, ExplicitTypePattern, KindPattern, LambdaPattern, NullPattern,
    ParameterListPattern, Pattern, SingleStatementPattern, Slot, SymbolPattern, TokenListPattern,
};
pub use resolve::{MatchCx, Resolve, bind};
pub use tree::{LambdaParameters, NodeClass, NodeKind, Span, Tree};
pub use walk::{Finder, Matches};
