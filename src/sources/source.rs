use crate::error::Result;
use crate::image::ImageNode;
use crate::notifier::Notifier;

/// Source trait for getting the flat image list from different places
pub trait Source {
    /// Returns the name of the source for identification purposes
    fn name(&self) -> &str;

    /// Returns every image the source knows about, intermediate images included,
    /// in the order the source reports them
    fn list_images(&self, notifier: &Notifier) -> Result<Vec<ImageNode>>;
}
