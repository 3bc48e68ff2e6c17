//! Text renderers for an image forest.
//!
//! - [`tree`] — indented box-drawing tree, one line per image.
//! - [`dot`] — Graphviz `digraph` of the same forest.
//! - [`short`] — repository to tag summary of the flat list.

pub mod dot;
pub mod short;
pub mod tree;

pub use dot::render_dot;
pub use short::render_short;
pub use tree::{render_tree, TreeOptions};
