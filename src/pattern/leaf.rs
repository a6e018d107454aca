//! Leaf matchers: kind wildcard, null sentinel, explicit-type check,
//! symbol equality.

use crate::error::Result;
use crate::pattern::{NodeCallback, Pattern, Slot, SymbolCallback};
use crate::resolve::MatchCx;
use crate::tree::{NodeClass, Tree};

/// Wildcard-by-class: matches any present node whose kind is assignable
/// to the declared class.
pub struct KindPattern<T: Tree, A = ()> {
    class: NodeClass,
    callback: Option<NodeCallback<T, A>>,
}

impl<T: Tree, A> KindPattern<T, A> {
    pub fn new(class: NodeClass) -> Self {
        Self {
            class,
            callback: None,
        }
    }

    pub fn class(&self) -> NodeClass {
        self.class
    }

    /// Thread the accumulator through `f` when this pattern matches.
    pub fn on_match(mut self, f: impl Fn(A, &T::Node) -> A + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(f));
        self
    }
}

impl<T: Tree> KindPattern<T, ()> {
    /// Boolean-model callback: a side effect with the matched node.
    pub fn then(self, f: impl Fn(&T::Node) + Send + Sync + 'static) -> Self {
        self.on_match(move |(), node| f(node))
    }
}

impl<T: Tree, A> Pattern<T, A> for KindPattern<T, A> {
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        let Some(node) = slot.node() else {
            return Ok(false);
        };
        Ok(cx.tree.kind(node).is(self.class))
    }

    fn run(&self, _cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A {
        match (slot.node(), &self.callback) {
            (Some(node), Some(cb)) => cb(acc, node),
            _ => acc,
        }
    }
}

/// Matches only an absent slot: asserts "this optional position is empty".
/// Carries no callback — an absent slot has no value to hand over.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPattern;

impl NullPattern {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Tree, A> Pattern<T, A> for NullPattern {
    fn test(&self, _cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        Ok(slot.node().is_none())
    }

    fn run(&self, _cx: MatchCx<'_, T>, _slot: Slot<'_, T::Node>, acc: A) -> A {
        acc
    }
}

/// A type node written out explicitly — not the language's inference
/// placeholder. Fails for inferred types and for non-type nodes.
pub struct ExplicitTypePattern<T: Tree, A = ()> {
    callback: Option<NodeCallback<T, A>>,
}

impl<T: Tree, A> ExplicitTypePattern<T, A> {
    pub fn new() -> Self {
        Self { callback: None }
    }

    pub fn on_match(mut self, f: impl Fn(A, &T::Node) -> A + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(f));
        self
    }
}

impl<T: Tree> ExplicitTypePattern<T, ()> {
    pub fn then(self, f: impl Fn(&T::Node) + Send + Sync + 'static) -> Self {
        self.on_match(move |(), node| f(node))
    }
}

impl<T: Tree, A> Default for ExplicitTypePattern<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tree, A> Pattern<T, A> for ExplicitTypePattern<T, A> {
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        let Some(node) = slot.node() else {
            return Ok(false);
        };
        Ok(cx.tree.kind(node).is(NodeClass::Type) && !cx.tree.is_inferred_type(node))
    }

    fn run(&self, _cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A {
        match (slot.node(), &self.callback) {
            (Some(node), Some(cb)) => cb(acc, node),
            _ => acc,
        }
    }
}

/// Matches a node that resolves to a symbol, optionally one specific
/// symbol. Requires a resolver; a node that resolves to nothing is a
/// match failure, a missing resolver is a usage error.
pub struct SymbolPattern<T: Tree, A = ()> {
    expected: Option<T::Symbol>,
    callback: Option<SymbolCallback<T, A>>,
}

impl<T: Tree, A> SymbolPattern<T, A> {
    /// Any successfully resolved symbol matches.
    pub fn any() -> Self {
        Self {
            expected: None,
            callback: None,
        }
    }

    /// Only a node resolving to exactly `symbol` matches.
    pub fn exactly(symbol: T::Symbol) -> Self {
        Self {
            expected: Some(symbol),
            callback: None,
        }
    }

    /// Fold callback: receives the node and its resolved symbol.
    pub fn on_match(
        mut self,
        f: impl Fn(A, &T::Node, &T::Symbol) -> A + Send + Sync + 'static,
    ) -> Self {
        self.callback = Some(Box::new(f));
        self
    }
}

impl<T: Tree> SymbolPattern<T, ()> {
    /// Boolean-model callback: sees the syntactic node only.
    pub fn then(self, f: impl Fn(&T::Node) + Send + Sync + 'static) -> Self {
        self.on_match(move |(), node, _symbol| f(node))
    }
}

impl<T: Tree, A> Pattern<T, A> for SymbolPattern<T, A> {
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        let Some(node) = slot.node() else {
            return Ok(false);
        };
        let Some(symbol) = cx.bind_node(node)? else {
            return Ok(false);
        };
        Ok(match &self.expected {
            Some(want) => *want == symbol,
            None => true,
        })
    }

    fn run(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A {
        let Some(node) = slot.node() else {
            return acc;
        };
        let Some(cb) = &self.callback else {
            return acc;
        };
        // `test` succeeded, so a resolver is present and the node
        // resolves; anything else is a broken caller contract and the
        // callback is skipped.
        match cx.bind_node(node) {
            Ok(Some(symbol)) => cb(acc, node, &symbol),
            _ => acc,
        }
    }
}
