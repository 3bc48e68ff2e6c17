use super::engine::EngineCli;
use super::Source;
use crate::error::Result;
use crate::image::ImageNode;
use crate::notifier::Notifier;

/// nerdctl implementation of the Source trait. nerdctl answers `image inspect` in
/// its docker-compatible format, so the docker parsing applies unchanged.
pub struct NerdctlSource {
    cli: EngineCli,
}

impl NerdctlSource {
    pub fn new() -> Result<Self> {
        let cli = EngineCli::new("nerdctl");
        cli.probe()?;
        Ok(Self { cli })
    }
}

impl Source for NerdctlSource {
    fn name(&self) -> &str {
        self.cli.program()
    }

    fn list_images(&self, notifier: &Notifier) -> Result<Vec<ImageNode>> {
        notifier.info("Listing nerdctl images...");
        let ids = self.cli.list_image_ids()?;

        notifier.info(&format!("Inspecting {} nerdctl images...", ids.len()));
        let images = self.cli.inspect_images(&ids)?;
        notifier.finish();
        Ok(images)
    }
}
