use crate::forest::{Forest, NodeId};
use crate::image::Label;

const HEADER: &str = "digraph docker {\n";
const FOOTER: &str = " base [style=invisible]\n}\n";

/// Renders `forest` as a Graphviz digraph.
///
/// Roots hang off an invisible `base` node so disconnected trees share one graph.
/// Labelled images get a box node listing their tags. Ids are always truncated.
pub fn render_dot(forest: &Forest) -> String {
    let mut out = String::from(HEADER);
    render_nodes(forest, forest.roots(), &mut out);
    out.push_str(FOOTER);
    out
}

fn render_nodes(forest: &Forest, ids: &[NodeId], out: &mut String) {
    for &id in ids {
        let node = forest.node(id);
        let short_id = node.short_id();

        match forest.parent(id) {
            None => out.push_str(&format!(" base -> \"{}\" [style=invis]\n", short_id)),
            Some(parent) => out.push_str(&format!(
                " \"{}\" -> \"{}\"\n",
                forest.node(parent).short_id(),
                short_id
            )),
        }

        if let Label::Tagged(tags) = node.label() {
            out.push_str(&format!(
                " \"{}\" [label=\"{}\\n{}\",shape=box,fillcolor=\"paleturquoise\",style=\"filled,rounded\"];\n",
                short_id,
                short_id,
                tags.join("\\n")
            ));
        }

        render_nodes(forest, forest.children(id), out);
    }
}
