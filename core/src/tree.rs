//! Runtime result of matching input against a command model.
//!
//! A [`ParsedTree`] is a linear chain of matched commands, root to deepest
//! match, stored in an arena indexed by [`NodeId`]. Ownership flows
//! strictly parent to child through the arena; the parent link on each
//! node is a non-owning id used for diagnostics and bottom-up walks.

use crate::model::{CommandInfo, CommandParameter};

/// Index of a node in a [`ParsedTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// One matched command with its parameter bindings.
#[derive(Debug)]
pub struct TreeNode<'m> {
    /// Non-owning back-reference to the parent node.
    pub parent: Option<NodeId>,
    /// The nested subcommand matched after this one, if any.
    pub next: Option<NodeId>,
    /// The matched command.
    pub command: &'m CommandInfo,
    /// Supplied parameters with their bound values, in input order.
    pub mapped: Vec<(&'m CommandParameter, Option<String>)>,
    /// Declared parameters that were not supplied.
    pub unmapped: Vec<&'m CommandParameter>,
    /// True if the help flag was seen at this command level.
    pub show_help: bool,
}

impl<'m> TreeNode<'m> {
    pub(crate) fn new(parent: Option<NodeId>, command: &'m CommandInfo) -> Self {
        Self {
            parent,
            next: None,
            command,
            mapped: Vec::new(),
            unmapped: Vec::new(),
            show_help: false,
        }
    }

    /// Returns the first bound value for the named parameter.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.mapped
            .iter()
            .find(|(parameter, _)| parameter.matches_name(name))
            .and_then(|(_, value)| value.as_deref())
    }

    /// Returns every bound value for the named parameter, in input order.
    pub fn values_of(&self, name: &str) -> Vec<&str> {
        self.mapped
            .iter()
            .filter(|(parameter, _)| parameter.matches_name(name))
            .filter_map(|(_, value)| value.as_deref())
            .collect()
    }
}

/// The matched command chain plus the verbatim remaining arguments.
///
/// Borrows the [`CommandModel`](crate::CommandModel) it was parsed
/// against; a tree never outlives its model.
#[derive(Debug, Default)]
pub struct ParsedTree<'m> {
    nodes: Vec<TreeNode<'m>>,
    remaining: Vec<String>,
}

impl<'m> ParsedTree<'m> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: TreeNode<'m>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode<'m> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn set_remaining(&mut self, remaining: Vec<String>) {
        self.remaining = remaining;
    }

    /// Returns the node at the given id.
    pub fn node(&self, id: NodeId) -> &TreeNode<'m> {
        &self.nodes[id.0]
    }

    /// Returns the root of the matched chain.
    pub fn root(&self) -> Option<&TreeNode<'m>> {
        self.nodes.first()
    }

    /// Returns the deepest matched command.
    pub fn leaf(&self) -> Option<&TreeNode<'m>> {
        self.iter().last()
    }

    /// Walks the chain from the root to the deepest match.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode<'m>> {
        std::iter::successors(self.nodes.first(), |node| {
            node.next.map(|id| self.node(id))
        })
    }

    /// True if any command level requested help.
    pub fn show_help(&self) -> bool {
        self.nodes.iter().any(|node| node.show_help)
    }

    /// Returns the verbatim arguments captured after the `--` sentinel.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }
}
