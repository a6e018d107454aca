//! Fold-model factory surface: every constructor from [`build`],
//! parametrized over the accumulator type `A`.
//!
//! Callbacks here thread an accumulator — `Fn(A, &Node) -> A`, or
//! `Fn(A, &Node, &Symbol) -> A` for the symbol-aware variant — instead of
//! side-effecting. `test` and `run` stay decoupled: a successful `test`
//! never implies `run` was or must be called.
//!
//! [`build`]: crate::pattern::build

use crate::pattern::{
    BoxPattern, ExplicitTypePattern, KindPattern, LambdaPattern, NullPattern,
    ParameterListPattern, Pattern, SingleStatementPattern, SymbolPattern, TokenListPattern,
};
use crate::tree::{NodeClass, Tree};

/// Any present node, regardless of kind.
pub fn any<T: Tree, A>() -> KindPattern<T, A> {
    KindPattern::new(NodeClass::Any)
}

/// Any expression, lambdas included.
pub fn expression<T: Tree, A>() -> KindPattern<T, A> {
    KindPattern::new(NodeClass::Expression)
}

/// Any statement.
pub fn statement<T: Tree, A>() -> KindPattern<T, A> {
    KindPattern::new(NodeClass::Statement)
}

/// Any type reference.
pub fn type_ref<T: Tree, A>() -> KindPattern<T, A> {
    KindPattern::new(NodeClass::Type)
}

/// Any lambda expression, by kind only.
pub fn lambda_expr<T: Tree, A>() -> KindPattern<T, A> {
    KindPattern::new(NodeClass::Lambda)
}

/// Asserts an optional slot is empty.
pub fn absent() -> NullPattern {
    NullPattern::new()
}

/// A type written out explicitly, not the inference placeholder.
pub fn explicit_type<T: Tree, A>() -> ExplicitTypePattern<T, A> {
    ExplicitTypePattern::new()
}

/// A node resolving to any symbol at all.
pub fn any_symbol<T: Tree, A>() -> SymbolPattern<T, A> {
    SymbolPattern::any()
}

/// A node resolving to exactly `symbol`.
pub fn symbol<T: Tree, A>(symbol: T::Symbol) -> SymbolPattern<T, A> {
    SymbolPattern::exactly(symbol)
}

/// The one statement here, whether or not a block wraps it.
pub fn single_statement<T: Tree, A>() -> SingleStatementPattern<T, A> {
    SingleStatementPattern::new()
}

/// A lambda expression; constrain with `.body(..)` and `.parameters(..)`.
pub fn lambda<T: Tree, A>() -> LambdaPattern<T, A> {
    LambdaPattern::new()
}

/// Fixed-arity positional pattern over list elements.
pub fn parameters<T: Tree, A>(elements: Vec<BoxPattern<T, A>>) -> ParameterListPattern<T, A> {
    ParameterListPattern::new(elements)
}

/// Fixed-arity literal token-text pattern.
pub fn tokens<T: Tree, A, S: Into<String>>(
    texts: impl IntoIterator<Item = S>,
) -> TokenListPattern<T, A> {
    TokenListPattern::new(texts)
}

/// Box a pattern for use as a positional sub-pattern.
pub fn boxed<T, A, P>(pattern: P) -> BoxPattern<T, A>
where
    T: Tree,
    P: Pattern<T, A> + Send + Sync + 'static,
{
    Box::new(pattern)
}
