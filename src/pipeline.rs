//! Single entry point from an image list to rendered text.
//!
//! [`render`] ties the pieces together:
//! 1. picks the output modes from [`RenderOptions`] (usage error when none is set),
//! 2. builds the [`Forest`] and, if a start image is given, re-roots it there via
//!    [`crate::resolve::resolve`],
//! 3. optionally collapses unlabelled pass-through images,
//! 4. renders the tree and/or the dot graph, or the short summary.
//!
//! Output is produced in full or not at all; errors leave nothing behind.

use crate::collapse::collapse;
use crate::error::{Error, Result};
use crate::forest::Forest;
use crate::image::ImageNode;
use crate::render::{render_dot, render_short, render_tree, TreeOptions};
use crate::resolve::resolve;
use log::{debug, info};

pub const USAGE_MESSAGE: &str = "Please specify either --dot, --tree, or --short";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub tree: bool,
    pub dot: bool,
    pub short: bool,
    pub no_trunc: bool,
    pub incremental: bool,
    pub only_labelled: bool,
}

impl RenderOptions {
    /// Fails with [`Error::Usage`] unless at least one output mode is selected.
    pub fn validate(&self) -> Result<()> {
        if self.tree || self.dot || self.short {
            Ok(())
        } else {
            Err(Error::Usage(USAGE_MESSAGE.to_string()))
        }
    }

    fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            no_trunc: self.no_trunc,
            incremental: self.incremental,
        }
    }
}

/// Renders `images` according to `options`.
///
/// Tree and dot output may be combined (tree first). The short summary is used only
/// when neither is requested, and it ignores `start`.
///
/// # Errors
/// - [`Error::Usage`] when no output mode is selected.
/// - [`Error::NotFound`] when `start` matches no image.
pub fn render(
    images: Vec<ImageNode>,
    start: Option<&str>,
    options: &RenderOptions,
) -> Result<String> {
    options.validate()?;
    if !options.tree && !options.dot {
        debug!("Rendering short summary of {} images", images.len());
        return Ok(render_short(&images));
    }

    let start_position = start.map(|query| resolve(query, &images)).transpose()?;

    let mut forest = Forest::new(images);
    if let Some(start) = start_position.and_then(|position| forest.handle(position)) {
        info!("Starting from image {}", forest.node(start).id);
        forest = forest.rooted_at(start);
    }
    debug!(
        "Built forest of {} images with {} roots",
        forest.len(),
        forest.roots().len()
    );

    if options.only_labelled {
        forest = collapse(&forest);
    }

    let mut out = String::new();
    if options.tree {
        out.push_str(&render_tree(&forest, options.tree_options()));
    }
    if options.dot {
        out.push_str(&render_dot(&forest));
    }
    Ok(out)
}
