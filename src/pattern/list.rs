//! Fixed-arity positional matchers over node sequences and token text.
//!
//! Both matchers are index-aligned: length inequality fails before any
//! element is looked at, and element `i` is only ever compared against
//! sub-pattern `i`.

use crate::error::Result;
use crate::pattern::{BoxPattern, NodeCallback, Pattern, Slot};
use crate::resolve::MatchCx;
use crate::tree::Tree;

/// An ordered, fixed-arity sequence of sub-patterns matched element-wise
/// against a parameter or argument list.
pub struct ParameterListPattern<T: Tree, A = ()> {
    elements: Vec<BoxPattern<T, A>>,
}

impl<T: Tree, A> ParameterListPattern<T, A> {
    /// The empty pattern matches the empty list.
    pub fn new(elements: Vec<BoxPattern<T, A>>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index-aligned test against an external element sequence. A length
    /// mismatch fails immediately, with no per-element evaluation; the
    /// element walk short-circuits on the first failing index.
    pub fn test_elements(&self, cx: MatchCx<'_, T>, elements: &[T::Node]) -> Result<bool> {
        if elements.len() != self.elements.len() {
            return Ok(false);
        }
        for (pattern, element) in self.elements.iter().zip(elements) {
            if !pattern.test(cx, Slot::Node(element))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Re-walk the aligned indices, threading the accumulator through each
    /// sub-pattern in ascending index order. Assumes `test_elements`
    /// succeeded on the same sequence.
    pub fn run_elements(&self, cx: MatchCx<'_, T>, elements: &[T::Node], mut acc: A) -> A {
        for (pattern, element) in self.elements.iter().zip(elements) {
            acc = pattern.run(cx, Slot::Node(element), acc);
        }
        acc
    }
}

impl<T: Tree, A> Pattern<T, A> for ParameterListPattern<T, A> {
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        let Some(node) = slot.node() else {
            return Ok(false);
        };
        match cx.tree.list_elements(node) {
            Some(elements) => self.test_elements(cx, &elements),
            None => Ok(false),
        }
    }

    fn run(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A {
        let Some(node) = slot.node() else {
            return acc;
        };
        match cx.tree.list_elements(node) {
            Some(elements) => self.run_elements(cx, &elements, acc),
            None => acc,
        }
    }
}

/// An ordered, fixed-arity sequence of literal token texts matched
/// position-wise against a token list.
pub struct TokenListPattern<T: Tree, A = ()> {
    texts: Vec<String>,
    callback: Option<NodeCallback<T, A>>,
}

impl<T: Tree, A> TokenListPattern<T, A> {
    pub fn new<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Self {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            callback: None,
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Position-wise literal comparison. Length inequality fails without
    /// reading any token text.
    pub fn test_tokens(&self, cx: MatchCx<'_, T>, tokens: &[T::Token]) -> bool {
        tokens.len() == self.texts.len()
            && self
                .texts
                .iter()
                .zip(tokens)
                .all(|(want, token)| cx.tree.token_text(token) == want)
    }

    /// Callback fired with the matched token-list node.
    pub fn on_match(mut self, f: impl Fn(A, &T::Node) -> A + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(f));
        self
    }
}

impl<T: Tree> TokenListPattern<T, ()> {
    pub fn then(self, f: impl Fn(&T::Node) + Send + Sync + 'static) -> Self {
        self.on_match(move |(), node| f(node))
    }
}

impl<T: Tree, A> Pattern<T, A> for TokenListPattern<T, A> {
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        let Some(node) = slot.node() else {
            return Ok(false);
        };
        match cx.tree.tokens(node) {
            Some(tokens) => Ok(self.test_tokens(cx, &tokens)),
            None => Ok(false),
        }
    }

    fn run(&self, _cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A {
        match (slot.node(), &self.callback) {
            (Some(node), Some(cb)) => cb(acc, node),
            _ => acc,
        }
    }
}
