use super::engine::EngineCli;
use super::Source;
use crate::error::Result;
use crate::image::ImageNode;
use crate::notifier::Notifier;

/// Docker implementation of the Source trait
pub struct DockerSource {
    cli: EngineCli,
}

impl DockerSource {
    pub fn new() -> Result<Self> {
        let cli = EngineCli::new("docker");
        cli.probe()?;
        Ok(Self { cli })
    }
}

impl Source for DockerSource {
    fn name(&self) -> &str {
        self.cli.program()
    }

    fn list_images(&self, notifier: &Notifier) -> Result<Vec<ImageNode>> {
        notifier.info("Listing Docker images...");
        let ids = self.cli.list_image_ids()?;
        notifier.debug(&format!("Docker reported {} image ids", ids.len()));

        notifier.info(&format!("Inspecting {} Docker images...", ids.len()));
        let images = self.cli.inspect_images(&ids)?;
        notifier.finish();
        Ok(images)
    }
}
