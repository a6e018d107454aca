//! Boolean-model factory surface.
//!
//! Stateless constructors producing immutable matcher instances. Omitting
//! a sub-pattern setter means "anything matches here"; omitting a callback
//! means no side effect on match. Nothing here ever touches a tree —
//! validation happens only on `test`.

use crate::pattern::{
    BoxPattern, ExplicitTypePattern, KindPattern, LambdaPattern, NullPattern,
    ParameterListPattern, Pattern, SingleStatementPattern, SymbolPattern, TokenListPattern,
};
use crate::tree::{NodeClass, Tree};

/// Any present node, regardless of kind.
pub fn any<T: Tree>() -> KindPattern<T> {
    KindPattern::new(NodeClass::Any)
}

/// Any expression, lambdas included.
pub fn expression<T: Tree>() -> KindPattern<T> {
    KindPattern::new(NodeClass::Expression)
}

/// Any statement.
pub fn statement<T: Tree>() -> KindPattern<T> {
    KindPattern::new(NodeClass::Statement)
}

/// Any type reference.
pub fn type_ref<T: Tree>() -> KindPattern<T> {
    KindPattern::new(NodeClass::Type)
}

/// Any lambda expression, by kind only. Use [`lambda`] to constrain body
/// or parameters.
pub fn lambda_expr<T: Tree>() -> KindPattern<T> {
    KindPattern::new(NodeClass::Lambda)
}

/// Asserts an optional slot is empty.
pub fn absent() -> NullPattern {
    NullPattern::new()
}

/// A type written out explicitly, not the inference placeholder.
pub fn explicit_type<T: Tree>() -> ExplicitTypePattern<T> {
    ExplicitTypePattern::new()
}

/// A node resolving to any symbol at all.
pub fn any_symbol<T: Tree>() -> SymbolPattern<T> {
    SymbolPattern::any()
}

/// A node resolving to exactly `symbol`.
pub fn symbol<T: Tree>(symbol: T::Symbol) -> SymbolPattern<T> {
    SymbolPattern::exactly(symbol)
}

/// The one statement here, whether or not a block wraps it.
pub fn single_statement<T: Tree>() -> SingleStatementPattern<T> {
    SingleStatementPattern::new()
}

/// A lambda expression; constrain with `.body(..)` and `.parameters(..)`.
pub fn lambda<T: Tree>() -> LambdaPattern<T> {
    LambdaPattern::new()
}

/// Fixed-arity positional pattern over list elements.
pub fn parameters<T: Tree>(elements: Vec<BoxPattern<T>>) -> ParameterListPattern<T> {
    ParameterListPattern::new(elements)
}

/// Fixed-arity literal token-text pattern.
pub fn tokens<T: Tree, S: Into<String>>(
    texts: impl IntoIterator<Item = S>,
) -> TokenListPattern<T> {
    TokenListPattern::new(texts)
}

/// Box a pattern for use as a positional sub-pattern.
pub fn boxed<T, P>(pattern: P) -> BoxPattern<T>
where
    T: Tree,
    P: Pattern<T, ()> + Send + Sync + 'static,
{
    Box::new(pattern)
}
