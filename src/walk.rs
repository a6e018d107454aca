//! Traversal adapters: apply one pattern lazily across a tree relation.
//!
//! Relations (ancestors, children, descendants, annotated nodes) are
//! plain iterators over the external tree. [`Finder`] layers a pattern on
//! top, yielding every relation node the pattern accepts. All sequences
//! are lazy and hold no cached state: re-calling the constructor re-walks
//! the relation and re-evaluates the pattern from scratch.
//!
//! Descendant walks accept options before iteration starts:
//! `within(span)` bounds the walk to a source range, `descend_if(pred)`
//! prunes subtrees, `with_trivia()` also walks structured trivia. Combine
//! them with a pattern through [`Finder::over`]:
//!
//! `finder.over(walk::descendants(tree, &root).within(span))`

use tracing::trace;

use crate::error::Result;
use crate::pattern::{Pattern, Slot};
use crate::resolve::MatchCx;
use crate::tree::{Span, Tree};

/// Walks parent links upward. Lazy; never allocates.
pub struct Ancestors<'a, T: Tree> {
    tree: &'a T,
    next: Option<T::Node>,
}

impl<T: Tree> Iterator for Ancestors<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<T::Node> {
        let current = self.next.take()?;
        self.next = self.tree.parent(&current);
        Some(current)
    }
}

/// Proper ancestors of `node`, nearest first.
pub fn ancestors<'a, T: Tree>(tree: &'a T, node: &T::Node) -> Ancestors<'a, T> {
    Ancestors {
        tree,
        next: tree.parent(node),
    }
}

/// `node` itself, then its ancestors, nearest first.
pub fn ancestors_and_self<'a, T: Tree>(tree: &'a T, node: &T::Node) -> Ancestors<'a, T> {
    Ancestors {
        tree,
        next: Some(node.clone()),
    }
}

/// Direct children, left to right.
pub fn children<T: Tree>(tree: &T, node: &T::Node) -> std::vec::IntoIter<T::Node> {
    tree.children(node).into_iter()
}

/// Preorder walk over a subtree. Options are set before the first call to
/// `next`; the iterator owns all traversal state, so a fresh constructor
/// call restarts the walk from nothing.
pub struct Descendants<'a, T: Tree> {
    tree: &'a T,
    root: Option<T::Node>,
    include_self: bool,
    stack: Vec<T::Node>,
    within: Option<Span>,
    descend_if: Option<Box<dyn Fn(&T::Node) -> bool + 'a>>,
    include_trivia: bool,
}

impl<'a, T: Tree> Descendants<'a, T> {
    fn new(tree: &'a T, root: T::Node, include_self: bool) -> Self {
        Self {
            tree,
            root: Some(root),
            include_self,
            stack: Vec::new(),
            within: None,
            descend_if: None,
            include_trivia: false,
        }
    }

    /// Yield only nodes whose span overlaps `span`. Relies on child spans
    /// lying within their parent's: a subtree outside the bound is pruned
    /// whole.
    pub fn within(mut self, span: Span) -> Self {
        self.within = Some(span);
        self
    }

    /// Skip the subtrees of nodes the predicate rejects. The rejected
    /// node itself is still yielded.
    pub fn descend_if(mut self, pred: impl Fn(&T::Node) -> bool + 'a) -> Self {
        self.descend_if = Some(Box::new(pred));
        self
    }

    /// Also walk children reachable through structured trivia.
    pub fn with_trivia(mut self) -> Self {
        self.include_trivia = true;
        self
    }

    fn may_descend(&self, node: &T::Node) -> bool {
        self.descend_if.as_ref().is_none_or(|pred| pred(node))
    }

    fn push_children(&mut self, node: &T::Node) {
        let mut kids = self.tree.children(node);
        if self.include_trivia {
            kids.extend(self.tree.trivia_children(node));
        }
        // Reversed so the leftmost child pops first.
        for child in kids.into_iter().rev() {
            self.stack.push(child);
        }
    }
}

impl<T: Tree> Iterator for Descendants<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<T::Node> {
        if let Some(root) = self.root.take() {
            if self.include_self {
                self.stack.push(root);
            } else if self.may_descend(&root) {
                self.push_children(&root);
            }
        }
        while let Some(node) = self.stack.pop() {
            if let Some(bound) = self.within {
                if !bound.overlaps(self.tree.span(&node)) {
                    continue;
                }
            }
            if self.may_descend(&node) {
                self.push_children(&node);
            }
            return Some(node);
        }
        None
    }
}

/// Preorder descendants of `node`, excluding `node` itself.
pub fn descendants<'a, T: Tree>(tree: &'a T, node: &T::Node) -> Descendants<'a, T> {
    Descendants::new(tree, node.clone(), false)
}

/// `node` itself, then its preorder descendants.
pub fn descendants_and_self<'a, T: Tree>(tree: &'a T, node: &T::Node) -> Descendants<'a, T> {
    Descendants::new(tree, node.clone(), true)
}

/// One pattern bound to an evaluation context. Every method hands back a
/// fresh lazy [`Matches`] sequence; nothing is cached between calls.
pub struct Finder<'a, T: Tree, A = ()> {
    cx: MatchCx<'a, T>,
    pattern: &'a (dyn Pattern<T, A> + 'a),
}

impl<'a, T: Tree, A> Finder<'a, T, A> {
    pub fn new(cx: MatchCx<'a, T>, pattern: &'a (dyn Pattern<T, A> + 'a)) -> Self {
        Self { cx, pattern }
    }

    /// Filter an externally supplied relation through the pattern.
    pub fn over<I>(&self, nodes: I) -> Matches<'a, T, A, I>
    where
        I: Iterator<Item = T::Node>,
    {
        Matches {
            cx: self.cx,
            pattern: self.pattern,
            nodes,
            failed: false,
        }
    }

    pub fn ancestors(&self, node: &T::Node) -> Matches<'a, T, A, Ancestors<'a, T>> {
        trace!(relation = "ancestors", "matching over relation");
        self.over(ancestors(self.cx.tree, node))
    }

    pub fn ancestors_and_self(&self, node: &T::Node) -> Matches<'a, T, A, Ancestors<'a, T>> {
        trace!(relation = "ancestors_and_self", "matching over relation");
        self.over(ancestors_and_self(self.cx.tree, node))
    }

    pub fn children(&self, node: &T::Node) -> Matches<'a, T, A, std::vec::IntoIter<T::Node>> {
        trace!(relation = "children", "matching over relation");
        self.over(children(self.cx.tree, node))
    }

    pub fn descendants(&self, node: &T::Node) -> Matches<'a, T, A, Descendants<'a, T>> {
        trace!(relation = "descendants", "matching over relation");
        self.over(descendants(self.cx.tree, node))
    }

    pub fn descendants_and_self(&self, node: &T::Node) -> Matches<'a, T, A, Descendants<'a, T>> {
        trace!(relation = "descendants_and_self", "matching over relation");
        self.over(descendants_and_self(self.cx.tree, node))
    }

    /// Nodes carrying a host-side annotation tag, filtered by the pattern.
    pub fn annotated(&self, tag: &str) -> Matches<'a, T, A, std::vec::IntoIter<T::Node>> {
        trace!(relation = "annotated", tag, "matching over relation");
        self.over(self.cx.tree.annotated(tag).into_iter())
    }
}

/// Lazy sequence of relation nodes accepted by the pattern.
///
/// Usage errors raised by the pattern (a missing resolver) surface as a
/// single `Err` item, after which the sequence ends; match failures are
/// skipped silently.
pub struct Matches<'a, T: Tree, A, I> {
    cx: MatchCx<'a, T>,
    pattern: &'a (dyn Pattern<T, A> + 'a),
    nodes: I,
    failed: bool,
}

impl<T: Tree, A, I> Iterator for Matches<'_, T, A, I>
where
    I: Iterator<Item = T::Node>,
{
    type Item = Result<T::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let node = self.nodes.next()?;
            match self.pattern.test(self.cx, Slot::Node(&node)) {
                Ok(true) => return Some(Ok(node)),
                Ok(false) => continue,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<T: Tree, A, I> Matches<'_, T, A, I>
where
    I: Iterator<Item = T::Node>,
{
    /// Eagerly materialize the remaining matches in traversal order.
    pub fn collect_nodes(self) -> Result<Vec<T::Node>> {
        self.collect()
    }

    /// Fold-model reduction: thread the accumulator through `run` for
    /// every matching node, left to right in traversal order.
    pub fn run_fold(mut self, init: A) -> Result<A> {
        let mut acc = init;
        let mut count = 0usize;
        while let Some(node) = self.next() {
            let node = node?;
            acc = self.pattern.run(self.cx, Slot::Node(&node), acc);
            count += 1;
        }
        trace!(matches = count, "fold complete");
        Ok(acc)
    }
}
