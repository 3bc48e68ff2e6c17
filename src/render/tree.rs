use crate::forest::{Forest, NodeId};
use crate::image::{ImageNode, Label};
use crate::size::human_size;

const BRANCH: &str = "├─";
const LAST_BRANCH: &str = "└─";
const PIPE: &str = "│ ";
const GAP: &str = "  ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Print full ids instead of the 12 character form
    pub no_trunc: bool,
    /// Show each image's own size instead of the cumulative virtual size
    pub incremental: bool,
}

/// Renders every root of `forest` and its descendants, in stored child order.
pub fn render_tree(forest: &Forest, options: TreeOptions) -> String {
    let mut out = String::new();
    render_siblings(forest, forest.roots(), options, "", &mut out);
    out
}

fn render_siblings(
    forest: &Forest,
    siblings: &[NodeId],
    options: TreeOptions,
    prefix: &str,
    out: &mut String,
) {
    let last = siblings.len().saturating_sub(1);
    for (position, &id) in siblings.iter().enumerate() {
        let (branch, continuation) = if position == last {
            (LAST_BRANCH, GAP)
        } else {
            (BRANCH, PIPE)
        };

        out.push_str(&tree_line(forest.node(id), options, prefix, branch));

        let children = forest.children(id);
        if !children.is_empty() {
            let child_prefix = format!("{}{}", prefix, continuation);
            render_siblings(forest, children, options, &child_prefix, out);
        }
    }
}

fn tree_line(node: &ImageNode, options: TreeOptions, prefix: &str, branch: &str) -> String {
    let size = if options.incremental {
        node.size
    } else {
        node.virtual_size
    };

    // The label reads "Virtual Size" in both modes; only the value changes.
    let mut line = format!(
        "{}{}{} Virtual Size: {}",
        prefix,
        branch,
        node.display_id(options.no_trunc),
        human_size(size)
    );
    if let Label::Tagged(tags) = node.label() {
        line.push_str(&format!(" Tags: {}", tags.join(", ")));
    }
    line.push('\n');
    line
}
