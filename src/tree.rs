//! The tree contract: what a host front-end must expose for its syntax
//! tree to be matchable.
//!
//! Patterns never depend on a concrete parser's node types. Everything they
//! need — a kind discriminant, structural children, token text, a weak
//! parent relation — comes through the [`Tree`] trait, so the same algebra
//! plugs into any tree-shaped front-end.

/// The closed set of node kinds patterns discriminate on.
///
/// Blocks are `Statement` nodes for which [`Tree::block_statements`]
/// returns `Some`; they do not get their own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Expression,
    /// Lambda expressions carry their own kind but are assignable to
    /// [`NodeClass::Expression`].
    Lambda,
    Statement,
    Type,
    ParameterList,
    Parameter,
    TokenList,
}

/// The classes a wildcard pattern can be specialized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    Expression,
    Statement,
    Type,
    Lambda,
    /// Any present node, regardless of kind. An absent slot still fails;
    /// asserting absence is `NullPattern`'s job.
    Any,
}

impl NodeKind {
    /// Kind-to-class assignability. `Lambda` counts as `Expression`;
    /// everything else requires the exact kind.
    pub fn is(self, class: NodeClass) -> bool {
        match class {
            NodeClass::Any => true,
            NodeClass::Expression => matches!(self, NodeKind::Expression | NodeKind::Lambda),
            NodeClass::Statement => self == NodeKind::Statement,
            NodeClass::Type => self == NodeKind::Type,
            NodeClass::Lambda => self == NodeKind::Lambda,
        }
    }
}

/// Half-open byte range `[start, end)` in the host's source. Used only to
/// bound descendant traversal; patterns themselves never look at spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the two ranges share at least one byte. Empty spans
    /// overlap nothing.
    pub fn overlaps(self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The two surface shapes of a lambda's parameters.
#[derive(Debug, Clone)]
pub enum LambdaParameters<N> {
    /// A single parameter with no parameter list: `x -> ...`.
    Bare(N),
    /// A parenthesized list, possibly empty: `(x, y) -> ...`.
    List(Vec<N>),
}

/// Navigation contract over an externally owned syntax tree.
///
/// Node handles are cheap to clone and never keep a subtree alive on
/// their own; the parent relation is lookup-only (an index into an owning
/// arena, a weak pointer — whatever the host uses) and is never used to
/// mutate structure.
pub trait Tree {
    type Node: Clone;
    type Token: Clone;
    type Symbol: Clone + PartialEq;

    fn kind(&self, node: &Self::Node) -> NodeKind;

    /// Weak parent back-reference; `None` at the root.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Structural children, left to right.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Source range of the node. A child's span must lie within its
    /// parent's; span-bounded traversal prunes subtrees on that invariant.
    fn span(&self, node: &Self::Node) -> Span;

    /// Statements directly inside a block-like container, or `None` when
    /// the node is not a block.
    fn block_statements(&self, node: &Self::Node) -> Option<Vec<Self::Node>>;

    /// Parameter shape of a lambda node, or `None` when the node is not a
    /// lambda.
    fn lambda_parameters(&self, node: &Self::Node) -> Option<LambdaParameters<Self::Node>>;

    /// Body of a lambda node, or `None` when the node is not a lambda or
    /// has no body.
    fn lambda_body(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Elements of a parameter/argument list node, or `None` when the
    /// node is not a list.
    fn list_elements(&self, node: &Self::Node) -> Option<Vec<Self::Node>>;

    /// Tokens of a token-list node (modifier lists and the like), or
    /// `None` when the node is not a token list.
    fn tokens(&self, node: &Self::Node) -> Option<Vec<Self::Token>>;

    fn token_text<'a>(&'a self, token: &'a Self::Token) -> &'a str;

    /// True when a type node is written as the language's type-inference
    /// placeholder rather than an explicit type.
    fn is_inferred_type(&self, node: &Self::Node) -> bool;

    /// Nodes carrying a host-side annotation tag. Hosts without
    /// annotations keep the default.
    fn annotated(&self, tag: &str) -> Vec<Self::Node> {
        let _ = tag;
        Vec::new()
    }

    /// Children reachable only through structured trivia. Hosts without
    /// structured trivia keep the default.
    fn trivia_children(&self, node: &Self::Node) -> Vec<Self::Node> {
        let _ = node;
        Vec::new()
    }
}
