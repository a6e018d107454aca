//! Test fixtures: an arena-backed tree, a map-backed resolver, and
//! patterns that record what they were asked to evaluate.
//!
//! `TestTree` stores nodes in a `Vec` arena; a node handle is its index,
//! and the parent link is a plain index too — a lookup-only relation that
//! owns nothing. Spans are assigned on construction: leaves get
//! consecutive 8-byte ranges, parents envelope their children.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::pattern::{Pattern, Slot};
use crate::resolve::{MatchCx, Resolve};
use crate::tree::{LambdaParameters, NodeKind, Span, Tree};

pub type NodeId = usize;

#[derive(Debug, Clone)]
enum Payload {
    Plain,
    /// Block-like container; the ids are its statements.
    Block(Vec<NodeId>),
    Lambda {
        shape: LambdaShape,
        body: NodeId,
    },
    /// Parameter/argument list elements.
    List(Vec<NodeId>),
    Tokens(Vec<String>),
    Type {
        inferred: bool,
    },
}

#[derive(Debug, Clone, Copy)]
enum LambdaShape {
    /// `x -> ...`: the id is the bare parameter.
    Bare(NodeId),
    /// `(..) -> ...`: the id is a ParameterList node.
    Parens(NodeId),
}

#[derive(Debug, Clone)]
struct TestNode {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    payload: Payload,
    span: Span,
}

#[derive(Debug, Default)]
pub struct TestTree {
    nodes: Vec<TestNode>,
    annotations: HashMap<String, Vec<NodeId>>,
    trivia: HashMap<NodeId, Vec<NodeId>>,
    next_offset: usize,
}

impl TestTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NodeKind, payload: Payload, children: Vec<NodeId>) -> NodeId {
        let id = self.nodes.len();
        let span = if children.is_empty() {
            let start = self.next_offset;
            self.next_offset += 8;
            Span::new(start, self.next_offset)
        } else {
            let start = self.nodes[children[0]].span.start;
            let end = self.nodes[*children.last().unwrap()].span.end;
            Span::new(start, end)
        };
        for &child in &children {
            self.nodes[child].parent = Some(id);
        }
        self.nodes.push(TestNode {
            kind,
            parent: None,
            children,
            payload,
            span,
        });
        id
    }

    pub fn expr(&mut self) -> NodeId {
        self.push(NodeKind::Expression, Payload::Plain, Vec::new())
    }

    pub fn stmt(&mut self) -> NodeId {
        self.push(NodeKind::Statement, Payload::Plain, Vec::new())
    }

    /// Statement wrapping arbitrary children (not a block).
    pub fn stmt_with(&mut self, children: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::Statement, Payload::Plain, children)
    }

    /// Block-like statement containing `statements`.
    pub fn block(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.push(
            NodeKind::Statement,
            Payload::Block(statements.clone()),
            statements,
        )
    }

    pub fn param(&mut self) -> NodeId {
        self.push(NodeKind::Parameter, Payload::Plain, Vec::new())
    }

    pub fn param_list(&mut self, params: Vec<NodeId>) -> NodeId {
        self.push(NodeKind::ParameterList, Payload::List(params.clone()), params)
    }

    /// Lambda with a single bare parameter: `x -> body`.
    pub fn lambda_bare(&mut self, param: NodeId, body: NodeId) -> NodeId {
        self.push(
            NodeKind::Lambda,
            Payload::Lambda {
                shape: LambdaShape::Bare(param),
                body,
            },
            vec![param, body],
        )
    }

    /// Lambda with a parenthesized parameter list: `(..) -> body`.
    pub fn lambda(&mut self, param_list: NodeId, body: NodeId) -> NodeId {
        self.push(
            NodeKind::Lambda,
            Payload::Lambda {
                shape: LambdaShape::Parens(param_list),
                body,
            },
            vec![param_list, body],
        )
    }

    pub fn type_ref(&mut self, inferred: bool) -> NodeId {
        self.push(NodeKind::Type, Payload::Type { inferred }, Vec::new())
    }

    pub fn token_list(&mut self, texts: &[&str]) -> NodeId {
        let texts = texts.iter().map(|t| t.to_string()).collect();
        self.push(NodeKind::TokenList, Payload::Tokens(texts), Vec::new())
    }

    pub fn annotate(&mut self, tag: &str, node: NodeId) {
        self.annotations.entry(tag.to_string()).or_default().push(node);
    }

    /// Attach a node reachable only through structured trivia.
    pub fn attach_trivia(&mut self, node: NodeId, trivia_node: NodeId) {
        self.trivia.entry(node).or_default().push(trivia_node);
    }
}

impl Tree for TestTree {
    type Node = NodeId;
    type Token = String;
    type Symbol = &'static str;

    fn kind(&self, node: &NodeId) -> NodeKind {
        self.nodes[*node].kind
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes[*node].parent
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes[*node].children.clone()
    }

    fn span(&self, node: &NodeId) -> Span {
        self.nodes[*node].span
    }

    fn block_statements(&self, node: &NodeId) -> Option<Vec<NodeId>> {
        match &self.nodes[*node].payload {
            Payload::Block(statements) => Some(statements.clone()),
            _ => None,
        }
    }

    fn lambda_parameters(&self, node: &NodeId) -> Option<LambdaParameters<NodeId>> {
        match &self.nodes[*node].payload {
            Payload::Lambda {
                shape: LambdaShape::Bare(param),
                ..
            } => Some(LambdaParameters::Bare(*param)),
            Payload::Lambda {
                shape: LambdaShape::Parens(list),
                ..
            } => self.list_elements(list).map(LambdaParameters::List),
            _ => None,
        }
    }

    fn lambda_body(&self, node: &NodeId) -> Option<NodeId> {
        match &self.nodes[*node].payload {
            Payload::Lambda { body, .. } => Some(*body),
            _ => None,
        }
    }

    fn list_elements(&self, node: &NodeId) -> Option<Vec<NodeId>> {
        match &self.nodes[*node].payload {
            Payload::List(elements) => Some(elements.clone()),
            _ => None,
        }
    }

    fn tokens(&self, node: &NodeId) -> Option<Vec<String>> {
        match &self.nodes[*node].payload {
            Payload::Tokens(texts) => Some(texts.clone()),
            _ => None,
        }
    }

    fn token_text<'a>(&'a self, token: &'a String) -> &'a str {
        token
    }

    fn is_inferred_type(&self, node: &NodeId) -> bool {
        matches!(self.nodes[*node].payload, Payload::Type { inferred: true })
    }

    fn annotated(&self, tag: &str) -> Vec<NodeId> {
        self.annotations.get(tag).cloned().unwrap_or_default()
    }

    fn trivia_children(&self, node: &NodeId) -> Vec<NodeId> {
        self.trivia.get(node).cloned().unwrap_or_default()
    }
}

/// Map-backed resolver over `TestTree` node ids.
#[derive(Debug, Default)]
pub struct TestResolver {
    declared: HashMap<NodeId, &'static str>,
    referenced: HashMap<NodeId, &'static str>,
}

impl TestResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(mut self, node: NodeId, symbol: &'static str) -> Self {
        self.declared.insert(node, symbol);
        self
    }

    pub fn refer(mut self, node: NodeId, symbol: &'static str) -> Self {
        self.referenced.insert(node, symbol);
        self
    }
}

impl Resolve<TestTree> for TestResolver {
    fn declared_symbol(&self, _tree: &TestTree, node: &NodeId) -> Option<&'static str> {
        self.declared.get(node).copied()
    }

    fn referenced_symbol(&self, _tree: &TestTree, node: &NodeId) -> Option<&'static str> {
        self.referenced.get(node).copied()
    }
}

/// Pattern that records every slot it is asked to test, then answers with
/// a fixed outcome. Clones share the log, so a probe can be boxed into a
/// list pattern and still be inspected afterwards.
#[derive(Clone)]
pub struct ProbePattern {
    outcome: bool,
    log: Arc<Mutex<Vec<Option<NodeId>>>>,
}

impl ProbePattern {
    pub fn pass() -> Self {
        Self {
            outcome: true,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn fail() -> Self {
        Self {
            outcome: false,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Snapshot of the slots a probe has been tested against, in order.
/// `None` marks an absent slot.
pub fn probe_log(probe: &ProbePattern) -> Vec<Option<NodeId>> {
    probe.log.lock().unwrap().clone()
}

impl<A> Pattern<TestTree, A> for ProbePattern {
    fn test(&self, _cx: MatchCx<'_, TestTree>, slot: Slot<'_, NodeId>) -> Result<bool> {
        self.log.lock().unwrap().push(slot.node().copied());
        Ok(self.outcome)
    }

    fn run(&self, _cx: MatchCx<'_, TestTree>, _slot: Slot<'_, NodeId>, acc: A) -> A {
        acc
    }
}

/// Initialize a `tracing` subscriber for tests that want log output.
/// Safe to call repeatedly; only the first call installs anything.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_wires_parent_links() {
        let mut tree = TestTree::new();
        let e = tree.expr();
        let s = tree.stmt_with(vec![e]);
        let root = tree.block(vec![s]);

        assert_eq!(tree.parent(&e), Some(s));
        assert_eq!(tree.parent(&s), Some(root));
        assert_eq!(tree.parent(&root), None);
    }

    #[test]
    fn spans_envelope_children() {
        let mut tree = TestTree::new();
        let e0 = tree.expr();
        let e1 = tree.expr();
        let s = tree.stmt_with(vec![e0, e1]);

        assert!(tree.span(&s).contains(tree.span(&e0)));
        assert!(tree.span(&s).contains(tree.span(&e1)));
        assert!(!tree.span(&e0).overlaps(tree.span(&e1)));
    }

    #[test]
    fn probe_clones_share_their_log() {
        let mut tree = TestTree::new();
        let node = tree.expr();
        let cx = MatchCx::new(&tree);

        let probe = ProbePattern::pass();
        let clone = probe.clone();
        assert_eq!(
            Pattern::<TestTree>::test(&clone, cx, Slot::Node(&node)),
            Ok(true),
        );
        assert_eq!(probe_log(&probe), vec![Some(node)]);
    }
}
