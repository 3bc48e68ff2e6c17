use log::debug;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use super::Source;
use crate::error::{Error, Result};
use crate::image::ImageNode;
use crate::notifier::Notifier;

/// Where a serialized image array is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonInput {
    Stdin,
    File(PathBuf),
}

/// Source for an image list serialized as a JSON array, e.g. the body of the
/// engine API's `/images/json?all=1`.
pub struct JsonSource {
    input: JsonInput,
}

impl JsonSource {
    pub fn new(input: JsonInput) -> Self {
        Self { input }
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input {
            JsonInput::Stdin => {
                let mut raw = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut raw)
                    .map_err(|err| Error::InputRead(format!("stdin: {}", err)))?;
                Ok(raw)
            }
            JsonInput::File(path) => fs::read(path)
                .map_err(|err| Error::InputRead(format!("{}: {}", path.display(), err))),
        }
    }
}

impl Source for JsonSource {
    fn name(&self) -> &str {
        "json"
    }

    fn list_images(&self, notifier: &Notifier) -> Result<Vec<ImageNode>> {
        match &self.input {
            JsonInput::Stdin => notifier.debug("Reading images from stdin"),
            JsonInput::File(path) => {
                notifier.debug(&format!("Reading images from {}", path.display()))
            }
        }

        let raw = self.read_input()?;
        parse_images(&raw)
    }
}

/// Parses a JSON array of image records.
pub fn parse_images(raw: &[u8]) -> Result<Vec<ImageNode>> {
    let images: Vec<ImageNode> =
        serde_json::from_slice(raw).map_err(|err| Error::InputParse(err.to_string()))?;
    debug!("Parsed {} images", images.len());
    Ok(images)
}
