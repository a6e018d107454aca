//! Structural matchers: single-statement unwrap and the lambda matcher.

use crate::error::Result;
use crate::pattern::{BoxPattern, NodeCallback, ParameterListPattern, Pattern, Slot};
use crate::resolve::MatchCx;
use crate::tree::{LambdaParameters, NodeClass, Tree};

/// Matches "the one statement here, whether or not a block wraps it".
///
/// A block holding exactly one statement unwraps onto that statement (and
/// keeps unwrapping through nested one-statement blocks); a block holding
/// zero or several statements fails. A plain statement matches directly,
/// optionally against an inner sub-pattern. Anything else fails.
pub struct SingleStatementPattern<T: Tree, A = ()> {
    inner: Option<BoxPattern<T, A>>,
    callback: Option<NodeCallback<T, A>>,
}

impl<T: Tree, A> SingleStatementPattern<T, A> {
    pub fn new() -> Self {
        Self {
            inner: None,
            callback: None,
        }
    }

    /// Sub-pattern the unwrapped statement must also satisfy.
    pub fn statement(mut self, inner: impl Pattern<T, A> + Send + Sync + 'static) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    /// Callback fired with the unwrapped statement.
    pub fn on_match(mut self, f: impl Fn(A, &T::Node) -> A + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(f));
        self
    }
}

impl<T: Tree> SingleStatementPattern<T, ()> {
    pub fn then(self, f: impl Fn(&T::Node) + Send + Sync + 'static) -> Self {
        self.on_match(move |(), node| f(node))
    }
}

impl<T: Tree, A> Default for SingleStatementPattern<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tree, A> Pattern<T, A> for SingleStatementPattern<T, A> {
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        let Some(node) = slot.node() else {
            return Ok(false);
        };
        if let Some(statements) = cx.tree.block_statements(node) {
            // Exactly one statement unwraps; empty and multi-statement
            // blocks fail outright.
            if let [only] = statements.as_slice() {
                return self.test(cx, Slot::Node(only));
            }
            return Ok(false);
        }
        if !cx.tree.kind(node).is(NodeClass::Statement) {
            return Ok(false);
        }
        match &self.inner {
            Some(inner) => inner.test(cx, Slot::Node(node)),
            None => Ok(true),
        }
    }

    fn run(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A {
        let Some(node) = slot.node() else {
            return acc;
        };
        if let Some(statements) = cx.tree.block_statements(node) {
            if let [only] = statements.as_slice() {
                return self.run(cx, Slot::Node(only), acc);
            }
            return acc;
        }
        let mut acc = acc;
        if let Some(inner) = &self.inner {
            acc = inner.run(cx, Slot::Node(node), acc);
        }
        if let Some(cb) = &self.callback {
            acc = cb(acc, node);
        }
        acc
    }
}

/// Matches a lambda expression, optionally constraining its body and its
/// parameter list.
///
/// Lambda surface syntax has two shapes — a parenthesized parameter list
/// and a single bare parameter. A bare parameter is presented to the
/// parameter-list sub-pattern as a one-element sequence, so one pattern
/// matches both shapes. The callback always receives the original lambda
/// node, never the normalized form.
pub struct LambdaPattern<T: Tree, A = ()> {
    body: Option<BoxPattern<T, A>>,
    parameters: Option<ParameterListPattern<T, A>>,
    callback: Option<NodeCallback<T, A>>,
}

impl<T: Tree, A> LambdaPattern<T, A> {
    pub fn new() -> Self {
        Self {
            body: None,
            parameters: None,
            callback: None,
        }
    }

    /// Sub-pattern for the lambda body. A lambda without a body presents
    /// `Slot::Absent` to it.
    pub fn body(mut self, body: impl Pattern<T, A> + Send + Sync + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    /// Positional pattern for the (normalized) parameter sequence.
    pub fn parameters(mut self, parameters: ParameterListPattern<T, A>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Callback fired with the original lambda node.
    pub fn on_match(mut self, f: impl Fn(A, &T::Node) -> A + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(f));
        self
    }
}

impl<T: Tree> LambdaPattern<T, ()> {
    pub fn then(self, f: impl Fn(&T::Node) + Send + Sync + 'static) -> Self {
        self.on_match(move |(), node| f(node))
    }
}

impl<T: Tree, A> Default for LambdaPattern<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tree, A> Pattern<T, A> for LambdaPattern<T, A> {
    fn test(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>) -> Result<bool> {
        let Some(node) = slot.node() else {
            return Ok(false);
        };
        if !cx.tree.kind(node).is(NodeClass::Lambda) {
            return Ok(false);
        }
        if let Some(body_pattern) = &self.body {
            let body = cx.tree.lambda_body(node);
            let body_slot = match &body {
                Some(body) => Slot::Node(body),
                None => Slot::Absent,
            };
            if !body_pattern.test(cx, body_slot)? {
                return Ok(false);
            }
        }
        if let Some(parameters) = &self.parameters {
            let ok = match cx.tree.lambda_parameters(node) {
                Some(LambdaParameters::Bare(param)) => {
                    parameters.test_elements(cx, std::slice::from_ref(&param))?
                }
                Some(LambdaParameters::List(params)) => parameters.test_elements(cx, &params)?,
                None => false,
            };
            if !ok {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn run(&self, cx: MatchCx<'_, T>, slot: Slot<'_, T::Node>, acc: A) -> A {
        let Some(node) = slot.node() else {
            return acc;
        };
        let mut acc = acc;
        if let Some(body_pattern) = &self.body {
            if let Some(body) = cx.tree.lambda_body(node) {
                acc = body_pattern.run(cx, Slot::Node(&body), acc);
            }
        }
        if let Some(parameters) = &self.parameters {
            match cx.tree.lambda_parameters(node) {
                Some(LambdaParameters::Bare(param)) => {
                    acc = parameters.run_elements(cx, std::slice::from_ref(&param), acc);
                }
                Some(LambdaParameters::List(params)) => {
                    acc = parameters.run_elements(cx, &params, acc);
                }
                None => {}
            }
        }
        if let Some(cb) = &self.callback {
            acc = cb(acc, node);
        }
        acc
    }
}
