use crate::error::{Error, Result};
use crate::image::ImageNode;
use log::debug;

/// Normalizes a user-supplied image name, adding the implicit `latest` tag.
pub fn image_reference(query: &str) -> String {
    if query.contains(':') {
        query.to_string()
    } else {
        format!("{}:latest", query)
    }
}

/// Finds the image a tree or graph should start from.
///
/// Scans `nodes` in order and returns the position of the first node whose id starts
/// with `query` (with or without the `sha256:` prefix) or that carries the tag
/// `query` (`query:latest` when no tag is given).
pub fn resolve(query: &str, nodes: &[ImageNode]) -> Result<usize> {
    let reference = image_reference(query);

    let position = nodes.iter().position(|node| {
        id_matches(&node.id, query) || node.repo_tags.iter().any(|tag| *tag == reference)
    });

    match position {
        Some(position) => {
            debug!(
                "Start image '{}' resolved to {}",
                query, nodes[position].id
            );
            Ok(position)
        }
        None => Err(Error::NotFound {
            query: query.to_string(),
            reference,
        }),
    }
}

fn id_matches(id: &str, query: &str) -> bool {
    id.starts_with(query)
        || id
            .strip_prefix("sha256:")
            .is_some_and(|hex| hex.starts_with(query))
}
