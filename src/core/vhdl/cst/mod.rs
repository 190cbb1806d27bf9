use crate::core::lexer::Position;
use std::path::Path;
use std::path::PathBuf;

pub mod display;
pub mod fields;
pub mod format;
pub mod node;

pub use node::{Field, FieldValue, NodeId, NodeKind, Terminal};

#[derive(Debug, Clone, PartialEq)]
pub struct CstNode {
    kind: NodeKind,
    parent: Option<NodeId>,
}

impl CstNode {
    pub fn as_kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the back reference to the node's parent, if it has one.
    ///
    /// The reference is a plain arena handle; it never owns the parent.
    pub fn get_parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// The concrete syntax tree for one design file.
///
/// Nodes live in a flat arena and reference one another by `NodeId`. Before
/// disambiguation the same arena doubles as the parse forest: alternative
/// derivations sit under `NodeKind::Ambig` nodes. Nodes orphaned while
/// splicing ambiguities (or while the parser backtracked) stay in the arena
/// but are unreachable from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Cst {
    nodes: Vec<CstNode>,
    root: Option<NodeId>,
    path: PathBuf,
}

impl Cst {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            path: PathBuf::new(),
        }
    }

    /// Appends a new node to the arena and returns its handle.
    pub fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(CstNode {
            kind: kind,
            parent: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Appends a terminal token to the arena.
    pub fn push_terminal(&mut self, text: String, position: Position) -> NodeId {
        self.push(NodeKind::Terminal(Terminal::new(text, position)))
    }

    pub fn get(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn get_node(&self, id: NodeId) -> &CstNode {
        &self.nodes[id.0]
    }

    /// Overwrites the node stored at `id`.
    ///
    /// Used by the ambiguity shaper to splice a surviving derivation into the
    /// slot its `_ambig` node occupied.
    pub fn replace(&mut self, id: NodeId, kind: NodeKind) {
        self.nodes[id.0].kind = kind;
    }

    /// The number of slots currently allocated, usable as a backtracking mark.
    pub fn mark(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node allocated at or after `mark`.
    pub fn reset(&mut self, mark: usize) {
        self.nodes.truncate(mark);
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn get_root(&self) -> NodeId {
        self.root.expect("tree must have a root")
    }

    pub fn set_path(&mut self, path: &Path) {
        self.path = path.to_path_buf();
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    /// The ordered concatenation of all field values of `id`, with sequence
    /// fields flattened in place.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id)
            .fields()
            .iter()
            .flat_map(|f| f.value.ids())
            .collect()
    }

    /// Walks the reachable tree once and sets every child's parent back
    /// reference. The root is left without a parent.
    pub fn link_parents(&mut self) {
        let root = self.get_root();
        self.nodes[root.0].parent = None;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            for child in self.children(id) {
                self.nodes[child.0].parent = Some(id);
                stack.push(child);
            }
        }
    }

    /// Collects every node reachable from the root in depth-first order.
    pub fn reachable(&self) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.get_root()];
        while let Some(id) = stack.pop() {
            found.push(id);
            let mut kids = self.children(id);
            kids.reverse();
            stack.append(&mut kids);
        }
        found
    }

    /// Compares two subtrees structurally: production name plus children,
    /// ignoring source positions.
    pub fn deep_eq(&self, a: NodeId, b: NodeId) -> bool {
        let lhs = self.get(a);
        let rhs = self.get(b);
        if lhs.kind_name() != rhs.kind_name() {
            return false;
        }
        if let (Some(t0), Some(t1)) = (lhs.as_terminal(), rhs.as_terminal()) {
            return t0.as_str() == t1.as_str();
        }
        let kids_a = self.children(a);
        let kids_b = self.children(b);
        if kids_a.len() != kids_b.len() {
            return false;
        }
        kids_a
            .into_iter()
            .zip(kids_b.into_iter())
            .all(|(x, y)| self.deep_eq(x, y))
    }

    /// Finds the position of the first terminal beneath `id`, if any exists.
    pub fn first_position(&self, id: NodeId) -> Option<Position> {
        if let Some(t) = self.get(id).as_terminal() {
            return Some(t.locate().clone());
        }
        for child in self.children(id) {
            if let Some(pos) = self.first_position(child) {
                return Some(pos);
            }
        }
        None
    }

    /// Resolves the raw text of an identifier-bearing node.
    ///
    /// Accepts `Identifier`, `ExtendedIdentifier`, or a bare `Terminal` and
    /// returns the text as written in the source.
    pub fn identifier_text(&self, id: NodeId) -> String {
        match self.get(id) {
            NodeKind::Terminal(t) => t.as_str().to_string(),
            NodeKind::Identifier { id } => self.identifier_text(*id),
            NodeKind::ExtendedIdentifier { id } => self.identifier_text(*id),
            _ => self.format(id),
        }
    }

    /// Counts the `_ambig` nodes reachable from the root.
    pub fn count_ambig(&self) -> usize {
        self.reachable()
            .into_iter()
            .filter(|id| self.get(*id).is_ambig())
            .count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parents_and_children() {
        let mut cst = Cst::new();
        let a = cst.push_terminal(String::from("e"), Position::place(1, 8));
        let iden = cst.push(NodeKind::Identifier { id: a });
        let name = cst.push(NodeKind::Name { name_val: iden });
        cst.set_root(name);
        cst.link_parents();

        assert_eq!(cst.children(name), vec![iden]);
        assert_eq!(cst.get_node(iden).get_parent(), Some(name));
        assert_eq!(cst.get_node(a).get_parent(), Some(iden));
        assert_eq!(cst.get_node(name).get_parent(), None);

        // every non-root node appears among its parent's children
        for id in cst.reachable() {
            if let Some(parent) = cst.get_node(id).get_parent() {
                assert_eq!(cst.children(parent).contains(&id), true);
            }
        }
    }

    #[test]
    fn structural_equality_ignores_positions() {
        let mut cst = Cst::new();
        let t0 = cst.push_terminal(String::from("clk"), Position::place(1, 1));
        let i0 = cst.push(NodeKind::Identifier { id: t0 });
        let t1 = cst.push_terminal(String::from("clk"), Position::place(9, 4));
        let i1 = cst.push(NodeKind::Identifier { id: t1 });
        let t2 = cst.push_terminal(String::from("rst"), Position::place(1, 1));
        let i2 = cst.push(NodeKind::Identifier { id: t2 });

        assert_eq!(cst.deep_eq(i0, i1), true);
        assert_eq!(cst.deep_eq(i0, i2), false);
    }
}
