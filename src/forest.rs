//! Parent/child reconstruction over a flat image list.
//!
//! Two views of the same hierarchy live here:
//! - [`group_by_parent`] / [`collect_roots`] work directly on the flat slice, keyed by
//!   parent id string, and preserve input order within every group. Their
//!   position-based forms are what [`Forest::new`] is built from.
//! - [`Forest`] is an arena of the nodes addressed by [`NodeId`] handles, with one
//!   resolved parent handle per node and an ordered child-handle list per node. The
//!   renderers and the collapser work on this view.
//!
//! A node whose `parent_id` names no known image is an orphan. It is placed among the
//! forest roots so it still renders, but it is not a declared root: only an empty
//! `parent_id` or the start image chosen with [`Forest::rooted_at`] is.

use crate::image::ImageNode;
use std::collections::HashMap;

/// Stable handle of a node inside one [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Groups nodes by their `parent_id`, keeping input order inside each group.
///
/// Roots are grouped under the empty string. Parent ids without children get no entry.
pub fn group_by_parent(nodes: &[ImageNode]) -> HashMap<&str, Vec<&ImageNode>> {
    group_positions_by_parent(nodes)
        .into_iter()
        .map(|(parent_id, group)| {
            let group: Vec<&ImageNode> =
                group.into_iter().map(|position| &nodes[position]).collect();
            (parent_id, group)
        })
        .collect()
}

/// Every node with an empty `parent_id`, in input order.
pub fn collect_roots(nodes: &[ImageNode]) -> Vec<&ImageNode> {
    root_positions(nodes)
        .into_iter()
        .map(|position| &nodes[position])
        .collect()
}

fn group_positions_by_parent(nodes: &[ImageNode]) -> HashMap<&str, Vec<usize>> {
    let mut by_parent: HashMap<&str, Vec<usize>> = HashMap::new();
    for (position, node) in nodes.iter().enumerate() {
        by_parent
            .entry(node.parent_id.as_str())
            .or_default()
            .push(position);
    }
    by_parent
}

fn root_positions(nodes: &[ImageNode]) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_root())
        .map(|(position, _)| position)
        .collect()
}

#[derive(Debug, Clone)]
pub struct Forest {
    nodes: Vec<ImageNode>,
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
    roots: Vec<NodeId>,
    start: Option<NodeId>,
}

impl Forest {
    /// Builds the forest from the flat list. When ids repeat, the first occurrence
    /// is the one children attach to. Declared roots and orphans are the roots, in
    /// input order.
    pub fn new(nodes: Vec<ImageNode>) -> Self {
        let (parents, roots) = {
            let mut index: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
            for (position, node) in nodes.iter().enumerate() {
                index.entry(node.id.as_str()).or_insert(position);
            }

            let mut parents = vec![None; nodes.len()];
            let mut roots = root_positions(&nodes);
            for (parent_id, group) in group_positions_by_parent(&nodes) {
                if parent_id.is_empty() {
                    continue;
                }
                match index.get(parent_id) {
                    Some(&parent) => {
                        for child in group {
                            if child == parent {
                                roots.push(child);
                            } else {
                                parents[child] = Some(NodeId(parent));
                            }
                        }
                    }
                    None => roots.extend(group),
                }
            }
            roots.sort_unstable();

            (parents, roots.into_iter().map(NodeId).collect())
        };

        Self::assemble(nodes, parents, roots, None)
    }

    /// Builds the child adjacency from parent links, in node order.
    pub(crate) fn assemble(
        nodes: Vec<ImageNode>,
        parents: Vec<Option<NodeId>>,
        roots: Vec<NodeId>,
        start: Option<NodeId>,
    ) -> Self {
        debug_assert_eq!(nodes.len(), parents.len());

        let mut children = vec![Vec::new(); nodes.len()];
        for (position, parent) in parents.iter().enumerate() {
            if let Some(parent) = parent {
                children[parent.0].push(NodeId(position));
            }
        }

        Self {
            nodes,
            parents,
            children,
            roots,
            start,
        }
    }

    /// Makes `start` the only root, detached from its real parent, so the forest
    /// shows just the subtree below it.
    pub fn rooted_at(mut self, start: NodeId) -> Self {
        if let Some(parent) = self.parents[start.0].take() {
            self.children[parent.0].retain(|&child| child != start);
        }
        self.roots = vec![start];
        self.start = Some(start);
        self
    }

    /// The image the forest was re-rooted at, if any.
    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    /// True for a node with an empty `parent_id` and for the start image. Orphans
    /// are roots of the forest but not declared roots.
    pub fn is_declared_root(&self, id: NodeId) -> bool {
        self.start == Some(id) || self.nodes[id.0].is_root()
    }

    /// Handle of the node at `position` in the original input list.
    pub fn handle(&self, position: usize) -> Option<NodeId> {
        (position < self.nodes.len()).then_some(NodeId(position))
    }

    pub fn node(&self, id: NodeId) -> &ImageNode {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn nodes(&self) -> &[ImageNode] {
        &self.nodes
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks a node up by its full id.
    pub fn find(&self, image_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.id == image_id)
            .map(NodeId)
    }
}
