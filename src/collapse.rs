//! Removal of unlabeled pass-through images.
//!
//! A node is visible when it is labelled, is a declared root (empty parent id, or the
//! start image the forest is rooted at), or has more than one child. Everything else
//! is a plain link in a single-child chain and is dropped; each surviving node is
//! relinked to its nearest visible ancestor. Orphans are not declared roots: when one
//! is dropped, the visible nodes that hung below it become roots in its place.
//!
//! The pass runs in two phases: nearest visible ancestors are resolved first (with
//! memoized path compression, so long chains are walked once), then the collapsed
//! forest is assembled from the surviving nodes in their original order.

use crate::forest::{Forest, NodeId};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ancestor {
    Visible(NodeId),
    /// The walk ran off the top of the forest at this invisible, parentless node.
    Dangling(NodeId),
    // Only reachable through a parent cycle in malformed input
    Cycle,
}

pub fn is_visible(forest: &Forest, id: NodeId) -> bool {
    forest.node(id).is_labelled()
        || forest.is_declared_root(id)
        || forest.children(id).len() > 1
}

/// Returns a new forest without invisible nodes. Roots keep input order, and the
/// children of every surviving node keep input order.
pub fn collapse(forest: &Forest) -> Forest {
    let visible: Vec<bool> = forest.ids().map(|id| is_visible(forest, id)).collect();
    let mut was_root = vec![false; forest.len()];
    for root in forest.roots() {
        was_root[root.index()] = true;
    }

    let mut resolver = AncestorResolver::new(forest, &visible);
    let anchors: Vec<Option<Ancestor>> = forest
        .ids()
        .map(|id| match forest.parent(id) {
            Some(parent) if visible[id.index()] => Some(resolver.nearest_visible(parent)),
            _ => None,
        })
        .collect();

    // old handle -> handle in the collapsed forest
    let mut remap: Vec<Option<NodeId>> = vec![None; forest.len()];
    let mut kept = Vec::new();
    for id in forest.ids() {
        if visible[id.index()] {
            remap[id.index()] = Some(NodeId::from_index(kept.len()));
            kept.push(id);
        }
    }

    let nodes = kept.iter().map(|&id| forest.node(id).clone()).collect();
    let parents = kept
        .iter()
        .map(|&id| match anchors[id.index()] {
            // a visible node can only anchor on itself through a parent cycle
            Some(Ancestor::Visible(anchor)) if anchor != id => remap[anchor.index()],
            _ => None,
        })
        .collect();
    // surviving roots, plus nodes whose dropped ancestry ends at a removed root
    let roots = kept
        .iter()
        .filter(|&&id| match anchors[id.index()] {
            Some(Ancestor::Dangling(top)) => was_root[top.index()],
            _ => was_root[id.index()],
        })
        .filter_map(|&id| remap[id.index()])
        .collect();
    let start = forest.start().and_then(|start| remap[start.index()]);

    debug!(
        "Collapsed {} of {} images",
        forest.len() - kept.len(),
        forest.len()
    );

    Forest::assemble(nodes, parents, roots, start)
}

struct AncestorResolver<'a> {
    forest: &'a Forest,
    visible: &'a [bool],
    memo: Vec<Option<Ancestor>>,
    on_path: Vec<bool>,
}

impl<'a> AncestorResolver<'a> {
    fn new(forest: &'a Forest, visible: &'a [bool]) -> Self {
        Self {
            forest,
            visible,
            memo: vec![None; forest.len()],
            on_path: vec![false; forest.len()],
        }
    }

    /// Closest visible node at or above `start`.
    fn nearest_visible(&mut self, start: NodeId) -> Ancestor {
        let mut path = Vec::new();
        let mut current = start;

        let found = loop {
            if self.visible[current.index()] {
                break Ancestor::Visible(current);
            }
            if let Some(known) = self.memo[current.index()] {
                break known;
            }
            if self.on_path[current.index()] {
                break Ancestor::Cycle;
            }
            self.on_path[current.index()] = true;
            path.push(current);

            match self.forest.parent(current) {
                Some(parent) => current = parent,
                None => break Ancestor::Dangling(current),
            }
        };

        for id in path {
            self.memo[id.index()] = Some(found);
            self.on_path[id.index()] = false;
        }
        found
    }
}
