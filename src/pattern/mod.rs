//! The matcher algebra: the pattern contract and its concrete variants.
//!
//! A pattern is an immutable description of a tree shape. Constructing one
//! never touches a tree; evaluation happens only through [`Pattern::test`]
//! and [`Pattern::run`]. The same variants serve two callback disciplines:
//! the boolean model (`A = ()`, side-effecting callbacks) and the fold
//! model (any `A`, callbacks thread the accumulator). All structural and
//! arity logic is written once against the accumulator-threading form; the
//! boolean surface wraps its callbacks over `A = ()`.

pub mod build;
pub mod fold;
mod leaf;
mod list;
mod structural;

pub use leaf::{ExplicitTypePattern, KindPattern, NullPattern, SymbolPattern};
pub use list::{ParameterListPattern, TokenListPattern};
pub use structural::{LambdaPattern, SingleStatementPattern};

use crate::error::Result;
use crate::resolve::MatchCx;
use crate::tree::Tree;

/// A child position under test: either a present node or an absent
/// optional slot.
#[derive(Debug)]
pub enum Slot<'a, N> {
    Node(&'a N),
    Absent,
}

impl<N> Clone for Slot<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Slot<'_, N> {}

impl<'a, N> Slot<'a, N> {
    pub fn node(self) -> Option<&'a N> {
        match self {
            Slot::Node(node) => Some(node),
            Slot::Absent => None,
        }
    }
}

/// Callback fired with a matched node, threading the accumulator.
pub type NodeCallback<T, A> = Box<dyn Fn(A, &<T as Tree>::Node) -> A + Send + Sync>;

/// Callback fired with a matched node and its resolved symbol.
pub type SymbolCallback<T, A> =
    Box<dyn Fn(A, &<T as Tree>::Node, &<T as Tree>::Symbol) -> A + Send + Sync>;

/// A boxed pattern, shareable across threads, for composing sub-patterns.
pub type BoxPattern<T, A = ()> = Box<dyn Pattern<T, A> + Send + Sync>;

/// The two-method matcher contract.
///
/// `test` and `run` are deliberately decoupled: callers may test without
/// running callbacks, and a successful test does not imply callbacks were
/// or must be run. Running callbacks against a slot that did not pass
/// `test` is a caller error; the result is unspecified (but memory-safe
/// and panic-free).
pub trait Pattern<T: Tree, A = ()> {
    /// Structural test. Never runs callbacks. Every shape, arity, kind, or
    /// symbol mismatch is `Ok(false)`; `Err` is reserved for caller
    /// contract violations.
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool>;

    /// Thread the accumulator through this pattern's callbacks, in the
    /// same order `test` probes sub-patterns. Assumes `test` succeeded on
    /// the same slot.
    fn run(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A;

    /// Test, then run on success. `Ok(None)` is a plain mismatch.
    fn apply(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> Result<Option<A>> {
        if self.test(cx, slot)? {
            Ok(Some(self.run(cx, slot, acc)))
        } else {
            Ok(None)
        }
    }
}

impl<T: Tree, A, P: Pattern<T, A> + ?Sized> Pattern<T, A> for Box<P> {
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        (**self).test(cx, slot)
    }

    fn run(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A {
        (**self).run(cx, slot, acc)
    }
}
