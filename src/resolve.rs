//! The resolver contract and the evaluation context.
//!
//! Symbol resolution is owned by the host front-end; patterns only consume
//! it. A node that resolves to nothing is a match failure, never an error —
//! the only error here is evaluating a symbol-aware pattern with no
//! resolver at all.

use crate::error::{Error, Result};
use crate::tree::Tree;

/// Symbol binding service supplied by the host.
pub trait Resolve<T: Tree> {
    /// Symbol this node declares, if the node is a declaration site.
    fn declared_symbol(&self, tree: &T, node: &T::Node) -> Option<T::Symbol>;

    /// Symbol this node references, if it names an existing entity.
    fn referenced_symbol(&self, tree: &T, node: &T::Node) -> Option<T::Symbol>;
}

/// Bind a node to its symbol. Declaration binding wins over reference
/// binding; neither is plain absence.
pub fn bind<T: Tree>(resolver: &dyn Resolve<T>, tree: &T, node: &T::Node) -> Option<T::Symbol> {
    resolver
        .declared_symbol(tree, node)
        .or_else(|| resolver.referenced_symbol(tree, node))
}

/// Evaluation context handed to every `test`/`run` call: the tree being
/// matched and, optionally, a resolver.
pub struct MatchCx<'a, T: Tree> {
    pub tree: &'a T,
    pub resolver: Option<&'a dyn Resolve<T>>,
}

impl<T: Tree> Clone for MatchCx<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Tree> Copy for MatchCx<'_, T> {}

impl<'a, T: Tree> MatchCx<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        Self { tree, resolver: None }
    }

    pub fn with_resolver(tree: &'a T, resolver: &'a dyn Resolve<T>) -> Self {
        Self {
            tree,
            resolver: Some(resolver),
        }
    }

    /// Symbol for `node`, declaration-first. `Err` when no resolver was
    /// supplied; `Ok(None)` when the resolver has no symbol for the node.
    pub fn bind_node(&self, node: &T::Node) -> Result<Option<T::Symbol>> {
        let resolver = self.resolver.ok_or(Error::ResolverRequired)?;
        Ok(bind(resolver, self.tree, node))
    }
}
