use crate::image::{ImageNode, NONE_TAG};
use log::warn;

/// One line per repository listing its tags: `repo: tag1, tag2`.
///
/// Repositories appear in the order they are first seen in `nodes`; tags keep
/// insertion order within their repository.
pub fn render_short(nodes: &[ImageNode]) -> String {
    let mut by_repo: Vec<(&str, Vec<&str>)> = Vec::new();

    for repo_tag in nodes.iter().flat_map(|node| node.repo_tags.iter()) {
        if repo_tag == NONE_TAG {
            continue;
        }
        // the tag follows the last colon; registry ports may add earlier ones
        let Some((repo, tag)) = repo_tag.rsplit_once(':') else {
            warn!("Skipping repo tag without a tag part: {}", repo_tag);
            continue;
        };

        match by_repo.iter_mut().find(|(name, _)| *name == repo) {
            Some((_, tags)) => tags.push(tag),
            None => by_repo.push((repo, vec![tag])),
        }
    }

    by_repo
        .iter()
        .map(|(repo, tags)| format!("{}: {}\n", repo, tags.join(", ")))
        .collect()
}
